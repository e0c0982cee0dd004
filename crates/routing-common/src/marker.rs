//! 路由服务标记接口定义
//!
//! 扫描期间通过标记类型识别候选声明

use std::fmt::Debug;

/// 路由服务标记 trait
///
/// 所有希望被扫描注册的路由服务都必须携带此标记（通常由
/// `#[route_service]` 宏自动实现），或携带调用方指定的自定义标记
pub trait RouteService: Send + Sync + Debug + 'static {
    /// 路由服务名称
    fn route_name(&self) -> &'static str;

    /// 路由优先级，数值越高优先级越高
    fn route_priority(&self) -> i32 {
        0
    }

    /// 路由服务是否启用
    fn is_enabled(&self) -> bool {
        true
    }
}
