//! # Route Macros
//!
//! 这个 crate 提供了用于自动路由声明注册的过程宏。
//!
//! ## 核心宏
//!
//! - [`macro@route_service`] - 路由服务标记与注册宏
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use route_macros::route_service;
//!
//! #[derive(Debug)]
//! #[route_service(name = "orders", priority = 10)]
//! pub struct OrderRoute;
//! ```
//!
//! 宏会为结构体实现 `RouteService` 标记 trait，并生成一个在程序
//! 启动时把路由声明写入全局清单的注册函数；扫描器在引导阶段按包
//! 路径过滤该清单。使用方 crate 需要依赖 `ctor`。

use proc_macro::TokenStream;

mod route_service;

/// 路由服务标记与注册宏
///
/// # 参数
///
/// - `name = "custom_name"` - 显式路由名称（默认由命名策略生成）
/// - `priority = N` - 路由优先级（默认为 0）
/// - `disabled` - 声明存在但不参与注册
/// - `marker = path::To::Trait` - 自定义标记 trait（此时标记 trait
///   的实现由使用方自行提供）
///
/// # 示例
///
/// ```rust,ignore
/// #[route_service(priority = 100)]
/// pub struct PaymentRoute;
/// ```
#[proc_macro_attribute]
pub fn route_service(args: TokenStream, input: TokenStream) -> TokenStream {
    route_service::route_service_impl(args, input)
}
