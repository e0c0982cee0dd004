//! # Scanning Abstractions
//!
//! 路由扫描注册抽象层，定义注册器与外部协作者之间的核心接口。
//!
//! ## 核心接口
//!
//! - [`RouteDefinitionRegistry`] - 路由定义注册表接口
//! - [`RouteScanner`] - 路由扫描器接口
//! - [`RouteNameGenerator`] - 注册名称生成策略接口
//! - [`PropertyPlaceholderProcessor`] / [`PropertySource`] - 文本占位符解析接口

pub mod naming;
pub mod placeholder;
pub mod registry;
pub mod scanner;

pub use naming::*;
pub use placeholder::*;
pub use registry::*;
pub use scanner::*;
