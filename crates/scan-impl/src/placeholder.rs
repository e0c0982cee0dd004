//! 基于属性源的占位符处理器实现

use routing_common::{ConfigurationError, PropertyValue};
use scan_abstractions::{PropertyPlaceholderProcessor, PropertySource, RouteDefinition};
use std::sync::Arc;
use tracing::debug;

/// 占位符起始标记
const PLACEHOLDER_PREFIX: &str = "${";
/// 占位符结束标记
const PLACEHOLDER_SUFFIX: char = '}';
/// 默认值分隔符
const DEFAULT_VALUE_SEPARATOR: char = ':';

/// 基于属性源的占位符处理器
///
/// 将定义属性中的 `${key}` 与 `${key:default}` 记号替换为属性源中的
/// 值；多个属性源按添加顺序查询，先命中者胜出
pub struct PropertySourcesPlaceholderProcessor {
    sources: Vec<Arc<dyn PropertySource>>,
    ignore_unresolvable: bool,
    order: i32,
}

impl PropertySourcesPlaceholderProcessor {
    /// 创建新的占位符处理器
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            ignore_unresolvable: false,
            order: 0,
        }
    }

    /// 添加属性源
    pub fn with_source(mut self, source: Arc<dyn PropertySource>) -> Self {
        self.sources.push(source);
        self
    }

    /// 设置是否忽略无法解析的占位符（保留原始记号）
    pub fn with_ignore_unresolvable(mut self, ignore: bool) -> Self {
        self.ignore_unresolvable = ignore;
        self
    }

    /// 设置处理器应用顺序
    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    fn lookup(&self, key: &str) -> Option<String> {
        for source in &self.sources {
            if let Some(value) = source.get_property(key) {
                debug!("属性源 {} 命中占位符键: {}", source.name(), key);
                return Some(value);
            }
        }
        None
    }

    /// 解析一段文本中的全部占位符记号
    fn resolve_text(&self, raw: &str) -> Result<String, ConfigurationError> {
        let mut result = String::with_capacity(raw.len());
        let mut rest = raw;

        while let Some(start) = rest.find(PLACEHOLDER_PREFIX) {
            result.push_str(&rest[..start]);
            let after_prefix = &rest[start + PLACEHOLDER_PREFIX.len()..];

            let Some(end) = after_prefix.find(PLACEHOLDER_SUFFIX) else {
                // 未闭合的记号按普通文本处理
                result.push_str(&rest[start..]);
                return Ok(result);
            };

            let token = &after_prefix[..end];
            let (key, default_value) = match token.split_once(DEFAULT_VALUE_SEPARATOR) {
                Some((key, default_value)) => (key, Some(default_value)),
                None => (token, None),
            };

            match self.lookup(key).or_else(|| default_value.map(str::to_string)) {
                Some(value) => result.push_str(&value),
                None if self.ignore_unresolvable => {
                    result.push_str(&rest[start..=start + PLACEHOLDER_PREFIX.len() + end]);
                }
                None => {
                    return Err(ConfigurationError::placeholder_unresolved(format!(
                        "${{{token}}}"
                    )));
                }
            }

            rest = &after_prefix[end + 1..];
        }

        result.push_str(rest);
        Ok(result)
    }
}

impl Default for PropertySourcesPlaceholderProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyPlaceholderProcessor for PropertySourcesPlaceholderProcessor {
    fn process_definition(
        &self,
        definition: &mut RouteDefinition,
    ) -> Result<(), ConfigurationError> {
        for (_key, value) in definition.properties.iter_mut() {
            match value {
                PropertyValue::Literal(text) => *text = self.resolve_text(text)?,
                PropertyValue::TypedString(typed) => {
                    typed.value = self.resolve_text(&typed.value)?;
                }
                // 非文本值不做替换
                PropertyValue::Value(_) => {}
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "PropertySourcesPlaceholderProcessor"
    }

    fn order(&self) -> i32 {
        self.order
    }
}
