//! # 示例应用程序
//!
//! 演示如何使用 RouteScan 扫描注册基础设施

use clap::Parser;
use routing_composition::{RouteScannerConfigurer, ScanBootstrapper};
use scan_abstractions::RouteDefinitionRegistry;
use scan_impl::{
    EnvironmentPropertySource, InMemoryRouteRegistry, ManifestRouteScanner, MapPropertySource,
    PropertySourcesPlaceholderProcessor,
};
use std::sync::Arc;
use tracing::info;

/// 示例路由服务定义
mod routes {
    use route_macros::route_service;

    /// 订单路由
    #[derive(Debug)]
    #[route_service(name = "orders", priority = 10)]
    pub struct OrderRoute;

    /// 支付路由
    #[derive(Debug)]
    #[route_service]
    pub struct PaymentRoute;

    /// 已下线的路由，保留声明但不参与注册
    #[derive(Debug)]
    #[route_service(disabled)]
    pub struct LegacyRoute;
}

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "scan-demo")]
#[command(about = "RouteScan 示例应用")]
struct Args {
    /// 路由清单文件路径（提供时使用清单扫描器）
    #[arg(short, long)]
    manifest: Option<String>,

    /// 待扫描的包路径，支持 ${...} 占位符
    #[arg(short, long, default_value = "${scan.pkg:scan_demo::routes}")]
    base_package: String,

    /// 日志级别
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(args.log_level.as_str())
        .init();

    info!("启动 RouteScan 示例应用");

    // 占位符处理器：环境变量优先，内存属性兜底
    let processor = PropertySourcesPlaceholderProcessor::new()
        .with_source(Arc::new(EnvironmentPropertySource::default()))
        .with_source(Arc::new(
            MapPropertySource::new("defaults").with_property("scan.pkg", "scan_demo::routes"),
        ));

    let mut configurer = RouteScannerConfigurer::new()
        .with_base_package(args.base_package.clone())
        .with_process_property_placeholders(true);

    if let Some(manifest) = &args.manifest {
        info!("使用清单扫描器: {}", manifest);
        configurer = configurer.with_scanner(Arc::new(ManifestRouteScanner::new(manifest)));
    }

    let mut registry = InMemoryRouteRegistry::new();
    let registered = ScanBootstrapper::new()
        .with_configurer(configurer)
        .with_placeholder_processor(Arc::new(processor))
        .bootstrap(&mut registry)
        .await?;

    info!("扫描注册完成，共注册 {} 个路由定义", registered);
    for name in registry.definition_names() {
        if let Some(definition) = registry.get_definition(&name) {
            println!("{} -> {}", name, definition.type_info.qualified_name());
        }
    }

    Ok(())
}
