//! Centralized integration tests for route-macros crate

use routing_common::{inventory_descriptors, RouteService, TypeInfo};
use scan_abstractions::RouteScanner;
use scan_impl::InventoryRouteScanner;

/// 自定义标记 trait，实现在使用方
pub trait AdminRoute: Send + Sync + std::fmt::Debug + 'static {}

/// 通过注册宏声明的测试路由
mod marked {
    use route_macros::route_service;

    #[derive(Debug)]
    #[route_service(name = "orders", priority = 10)]
    pub struct OrderRoute;

    #[derive(Debug)]
    #[route_service]
    pub struct PaymentRoute;

    #[derive(Debug)]
    #[route_service(disabled)]
    pub struct LegacyRoute;

    #[derive(Debug)]
    #[route_service(marker = crate::AdminRoute)]
    pub struct ConsoleRoute;

    impl crate::AdminRoute for ConsoleRoute {}
}

fn marked_package() -> String {
    TypeInfo::of::<marked::OrderRoute>().module_path
}

#[test]
fn test_macro_registers_descriptor_in_inventory() {
    let descriptors = inventory_descriptors();

    let order = descriptors
        .iter()
        .find(|d| d.type_info.name == "OrderRoute" && d.type_info.module_path == marked_package())
        .expect("OrderRoute 应该已写入全局清单");

    assert_eq!(order.route_name.as_deref(), Some("orders"));
    assert_eq!(order.priority, 10);
    assert!(order.enabled);
    assert_eq!(order.marker.name, "RouteService");
}

#[test]
fn test_macro_implements_marker_trait() {
    let route = marked::OrderRoute;

    assert_eq!(route.route_name(), "orders");
    assert_eq!(route.route_priority(), 10);
    assert!(route.is_enabled());

    let payment = marked::PaymentRoute;
    assert_eq!(payment.route_name(), "PaymentRoute");
    assert_eq!(payment.route_priority(), 0);
}

#[test]
fn test_disabled_declaration_is_registered_but_flagged() {
    let descriptors = inventory_descriptors();

    let legacy = descriptors
        .iter()
        .find(|d| d.type_info.name == "LegacyRoute" && d.type_info.module_path == marked_package())
        .expect("LegacyRoute 应该已写入全局清单");

    assert!(!legacy.enabled);
}

#[tokio::test]
async fn test_scanner_finds_macro_declared_routes() {
    let scanner = InventoryRouteScanner::new();
    let marker = TypeInfo::of_marker::<dyn RouteService>();

    let discovered = scanner.scan(&[marked_package()], &marker).await.unwrap();

    let names: Vec<&str> = discovered.iter().map(|d| d.type_info.name.as_str()).collect();
    // 优先级高者在前，禁用与自定义标记的声明被过滤
    assert_eq!(names, vec!["OrderRoute", "PaymentRoute"]);
}

#[tokio::test]
async fn test_scanner_filters_by_custom_marker() {
    let scanner = InventoryRouteScanner::new();
    let marker = TypeInfo::of_marker::<dyn AdminRoute>();

    let discovered = scanner.scan(&[marked_package()], &marker).await.unwrap();

    assert_eq!(discovered.len(), 1);
    assert_eq!(discovered[0].type_info.name, "ConsoleRoute");
}
