//! 文本占位符解析抽象接口
//!
//! 定义属性中的 `${...}` 占位符由处理器在注册前就地替换

use crate::registry::RouteDefinition;
use routing_common::ConfigurationError;

/// 属性源 trait
///
/// 为占位符解析提供外部属性值
pub trait PropertySource: Send + Sync {
    /// 按键读取属性值
    fn get_property(&self, key: &str) -> Option<String>;

    /// 属性源名称
    fn name(&self) -> &str;
}

/// 文本占位符处理器 trait
pub trait PropertyPlaceholderProcessor: Send + Sync {
    /// 就地解析定义属性中的占位符
    fn process_definition(&self, definition: &mut RouteDefinition)
        -> Result<(), ConfigurationError>;

    /// 处理器名称
    fn name(&self) -> &str;

    /// 处理器应用顺序，数值小者先执行
    fn order(&self) -> i32 {
        0
    }
}
