//! 路由定义注册表抽象接口

use routing_common::{
    PropertyValue, PropertyValues, RegistryError, RouteDescriptor, TypeInfo,
};

/// 路由定义（注册表条目）
///
/// 注册表持有的一条命名定义；创建后归注册表独占所有，
/// 注册方不再保留引用
#[derive(Debug, Clone)]
pub struct RouteDefinition {
    /// 目标类型信息
    pub type_info: TypeInfo,
    /// 标记类型信息（扫描发现的定义携带，手工注册的定义可为空）
    pub marker: Option<TypeInfo>,
    /// 优先级
    pub priority: i32,
    /// 是否启用
    pub enabled: bool,
    /// 属性值集合
    pub properties: PropertyValues,
    /// 注册时间
    pub registered_at: chrono::DateTime<chrono::Utc>,
}

impl RouteDefinition {
    /// 创建新的路由定义
    pub fn new(type_info: TypeInfo) -> Self {
        Self {
            type_info,
            marker: None,
            priority: 0,
            enabled: true,
            properties: PropertyValues::new(),
            registered_at: chrono::Utc::now(),
        }
    }

    /// 从扫描发现的声明构造路由定义
    pub fn from_descriptor(descriptor: &RouteDescriptor) -> Self {
        let mut properties = PropertyValues::new();
        for (key, value) in &descriptor.metadata {
            properties.set(key.clone(), PropertyValue::literal(value.clone()));
        }

        Self {
            type_info: descriptor.type_info.clone(),
            marker: Some(descriptor.marker.clone()),
            priority: descriptor.priority,
            enabled: descriptor.enabled,
            properties,
            registered_at: chrono::Utc::now(),
        }
    }

    /// 设置属性值
    pub fn with_property(mut self, key: impl Into<String>, value: PropertyValue) -> Self {
        self.properties.set(key, value);
        self
    }
}

/// 路由定义注册表 trait
///
/// 引导阶段的唯一写入方是引导流程本身；引导结束后注册表被冻结，
/// 后续写入一律失败
pub trait RouteDefinitionRegistry: Send + Sync {
    /// 注册路由定义；名称重复时返回名称冲突错误，已有条目保持不变
    fn register_definition(
        &mut self,
        name: &str,
        definition: RouteDefinition,
    ) -> Result<(), RegistryError>;

    /// 按名称获取路由定义
    fn get_definition(&self, name: &str) -> Option<&RouteDefinition>;

    /// 检查名称是否已注册
    fn contains_definition(&self, name: &str) -> bool;

    /// 获取全部已注册名称（按注册顺序）
    fn definition_names(&self) -> Vec<String>;

    /// 已注册定义数量
    fn definition_count(&self) -> usize;

    /// 冻结注册表（引导结束后调用）
    fn freeze(&mut self);

    /// 注册表是否已冻结
    fn is_frozen(&self) -> bool;
}
