//! 定义属性值模型
//!
//! 注册表条目携带的属性值，占位符解析在这些值上就地进行

/// 类型化字符串值
///
/// 延迟解析的文本值包装，记录期望的目标类型名称
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedStringValue {
    /// 底层文本
    pub value: String,
    /// 目标类型名称（可选）
    pub target_type: Option<String>,
}

impl TypedStringValue {
    /// 创建新的类型化字符串值
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            target_type: None,
        }
    }

    /// 设置目标类型名称
    pub fn with_target_type(mut self, target_type: impl Into<String>) -> Self {
        self.target_type = Some(target_type.into());
        self
    }
}

/// 属性值
///
/// 文本解析规则：纯文本直接使用，类型化字符串取其底层文本，
/// 其余表示形式视为无值
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// 纯文本值
    Literal(String),
    /// 类型化字符串值
    TypedString(TypedStringValue),
    /// 其他结构化值
    Value(serde_json::Value),
}

impl PropertyValue {
    /// 创建纯文本属性值
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    /// 创建类型化字符串属性值
    pub fn typed_string(value: impl Into<String>) -> Self {
        Self::TypedString(TypedStringValue::new(value))
    }

    /// 按文本解析规则读取属性值
    pub fn resolve_text(&self) -> Option<&str> {
        match self {
            Self::Literal(value) => Some(value),
            Self::TypedString(typed) => Some(&typed.value),
            Self::Value(_) => None,
        }
    }
}

/// 属性值集合
///
/// 保持插入顺序，键重复时覆盖旧值
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyValues {
    values: Vec<(String, PropertyValue)>,
}

impl PropertyValues {
    /// 创建空的属性值集合
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置属性值
    pub fn set(&mut self, key: impl Into<String>, value: PropertyValue) {
        let key = key.into();
        if let Some(existing) = self.values.iter_mut().find(|(k, _)| *k == key) {
            existing.1 = value;
        } else {
            self.values.push((key, value));
        }
    }

    /// 获取属性值
    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.values.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// 检查属性是否存在
    pub fn contains(&self, key: &str) -> bool {
        self.values.iter().any(|(k, _)| k == key)
    }

    /// 遍历属性值
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// 可变遍历属性值
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut PropertyValue)> {
        self.values.iter_mut().map(|(k, v)| (k.as_str(), v))
    }

    /// 属性数量
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
