//! 注册名称生成策略实现

use routing_common::{to_snake_case, RouteDescriptor};
use scan_abstractions::{RouteDefinitionRegistry, RouteNameGenerator};

/// 内置命名策略
///
/// 声明显式指定了路由名称时直接使用，否则取类型短名称的蛇形形式
#[derive(Debug, Default)]
pub struct DefaultRouteNameGenerator;

impl DefaultRouteNameGenerator {
    /// 创建内置命名策略
    pub fn new() -> Self {
        Self
    }
}

impl RouteNameGenerator for DefaultRouteNameGenerator {
    fn generate(
        &self,
        descriptor: &RouteDescriptor,
        _registry: &dyn RouteDefinitionRegistry,
    ) -> String {
        descriptor
            .route_name
            .clone()
            .unwrap_or_else(|| to_snake_case(&descriptor.type_info.name))
    }
}

/// 全限定命名策略
///
/// 以模块路径为前缀消除短名称歧义，适合多个包中存在同名类型的场景
#[derive(Debug, Default)]
pub struct QualifiedRouteNameGenerator;

impl QualifiedRouteNameGenerator {
    /// 创建全限定命名策略
    pub fn new() -> Self {
        Self
    }
}

impl RouteNameGenerator for QualifiedRouteNameGenerator {
    fn generate(
        &self,
        descriptor: &RouteDescriptor,
        _registry: &dyn RouteDefinitionRegistry,
    ) -> String {
        let short = to_snake_case(&descriptor.type_info.name);
        if descriptor.type_info.module_path.is_empty() {
            short
        } else {
            format!("{}::{}", descriptor.type_info.module_path, short)
        }
    }
}
