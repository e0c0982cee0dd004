//! 属性源实现
//!
//! 为占位符解析提供内存映射和环境变量两种属性来源

use scan_abstractions::PropertySource;
use std::collections::HashMap;
use tracing::debug;

/// 内存映射属性源
#[derive(Debug, Default)]
pub struct MapPropertySource {
    name: String,
    values: HashMap<String, String>,
}

impl MapPropertySource {
    /// 创建新的内存属性源
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: HashMap::new(),
        }
    }

    /// 添加属性
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl PropertySource for MapPropertySource {
    fn get_property(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// 环境变量属性源
///
/// 属性键按约定转换为环境变量名：大写并将 `.`、`-`、`::` 映射为 `_`，
/// 再拼接前缀，如 `route.pkg` 对应 `ROUTE_PKG`
#[derive(Debug)]
pub struct EnvironmentPropertySource {
    prefix: String,
}

impl EnvironmentPropertySource {
    /// 创建新的环境变量属性源
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// 获取环境变量前缀
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn env_key(&self, key: &str) -> String {
        let mangled = key
            .replace("::", "_")
            .replace(['.', '-'], "_")
            .to_uppercase();
        format!("{}{}", self.prefix, mangled)
    }
}

impl Default for EnvironmentPropertySource {
    fn default() -> Self {
        Self::new("ROUTE_")
    }
}

impl PropertySource for EnvironmentPropertySource {
    fn get_property(&self, key: &str) -> Option<String> {
        let env_key = self.env_key(key);
        match std::env::var(&env_key) {
            Ok(value) => Some(value),
            Err(_) => {
                debug!("环境变量不存在: {}", env_key);
                None
            }
        }
    }

    fn name(&self) -> &str {
        "EnvironmentPropertySource"
    }
}
