//! 全局路由声明清单
//!
//! 由 `#[route_service]` 宏生成的注册函数在程序启动时填充，
//! 扫描器在引导阶段只读地过滤此清单

use crate::metadata::RouteDescriptor;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::debug;

/// 全局路由声明清单
static GLOBAL_ROUTE_INVENTORY: Lazy<RwLock<Vec<RouteDescriptor>>> =
    Lazy::new(|| RwLock::new(Vec::new()));

/// 注册一条路由声明到全局清单
///
/// 同一类型与标记的组合只保留首次注册；返回是否实际插入
pub fn register_route_descriptor(descriptor: RouteDescriptor) -> bool {
    let mut inventory = GLOBAL_ROUTE_INVENTORY.write();

    let duplicate = inventory.iter().any(|existing| {
        existing.type_info.id == descriptor.type_info.id && existing.marker.id == descriptor.marker.id
    });
    if duplicate {
        debug!(
            "路由声明已存在，跳过重复注册: {}",
            descriptor.type_info.qualified_name()
        );
        return false;
    }

    inventory.push(descriptor);
    true
}

/// 获取全局清单中全部路由声明的快照
pub fn inventory_descriptors() -> Vec<RouteDescriptor> {
    GLOBAL_ROUTE_INVENTORY.read().clone()
}

/// 全局清单中的声明数量
pub fn inventory_size() -> usize {
    GLOBAL_ROUTE_INVENTORY.read().len()
}
