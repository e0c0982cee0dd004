//! # 路由扫描注册具体实现
//!
//! 提供具体的路由定义注册表、扫描器、命名策略和占位符处理器实现。
//!
//! ## 主要类型
//!
//! - [`InMemoryRouteRegistry`] - 内存路由定义注册表
//! - [`InventoryRouteScanner`] - 基于全局清单的路由扫描器
//! - [`ManifestRouteScanner`] - 基于 TOML 清单文件的路由扫描器
//! - [`DefaultRouteNameGenerator`] / [`QualifiedRouteNameGenerator`] - 命名策略
//! - [`PropertySourcesPlaceholderProcessor`] - 基于属性源的占位符处理器

pub mod manifest;
pub mod naming;
pub mod placeholder;
pub mod registry;
pub mod scanner;
pub mod sources;

pub use manifest::*;
pub use naming::*;
pub use placeholder::*;
pub use registry::*;
pub use scanner::*;
pub use sources::*;
