//! 注册名称生成策略抽象接口

use crate::registry::RouteDefinitionRegistry;
use routing_common::RouteDescriptor;

/// 注册名称生成策略 trait
///
/// 为每个发现的声明生成注册表名称；策略本身不保证唯一性，
/// 名称冲突由注册表在注册时报告
pub trait RouteNameGenerator: Send + Sync {
    /// 为发现的路由声明生成注册名称
    fn generate(&self, descriptor: &RouteDescriptor, registry: &dyn RouteDefinitionRegistry)
        -> String;
}
