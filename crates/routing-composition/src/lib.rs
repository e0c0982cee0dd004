//! # 路由组合层
//!
//! 这个 crate 是 RouteScan 基础设施的组合层，负责在应用引导阶段把
//! 路由扫描、占位符解析和注册表写入组合成一个完整的注册流程。
//!
//! ## 主要功能
//!
//! - **扫描注册配置器**: 按包路径扫描携带标记的路由声明并逐一注册
//! - **占位符解析**: 在扫描前对配置器自身的配置属性做文本替换
//! - **两阶段引导**: 先落地待处理定义，再执行扫描注册并冻结注册表
//!
//! ## 基本使用
//!
//! ```rust,no_run
//! use routing_composition::{RouteScannerConfigurer, ScanBootstrapper};
//! use scan_impl::InMemoryRouteRegistry;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let configurer = RouteScannerConfigurer::new().with_base_package("demo::routes");
//!
//!     let mut registry = InMemoryRouteRegistry::new();
//!     let registered = ScanBootstrapper::new()
//!         .with_configurer(configurer)
//!         .bootstrap(&mut registry)
//!         .await?;
//!
//!     println!("已注册 {} 个路由定义", registered);
//!     Ok(())
//! }
//! ```

pub mod bootstrapper;
pub mod configurer;
pub mod context;

pub use bootstrapper::ScanBootstrapper;
pub use configurer::{
    IsolatedDefinitionView, RouteScannerConfigurer, BASE_PACKAGE_PROPERTY,
    DEFAULT_CONFIGURER_NAME,
};
pub use context::ScanContext;

// 重新导出错误类型
pub use routing_common::RegistrarError;
