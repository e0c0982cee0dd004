//! 路由引导器
//!
//! 显式的两阶段引导契约：配置落地阶段保证在扫描注册阶段开始前完成

use crate::configurer::RouteScannerConfigurer;
use crate::context::ScanContext;
use routing_common::RegistrarError;
use scan_abstractions::{PropertyPlaceholderProcessor, RouteDefinitionRegistry};
use std::sync::Arc;
use tracing::{debug, info};

/// 路由引导器
///
/// 阶段一：把每个配置器自身的待处理定义写入注册表，并组装扫描
/// 上下文；阶段二：依次执行各配置器的扫描注册，最后冻结注册表。
/// 任一步骤失败即中止引导，错误原样向上传播
#[derive(Default)]
pub struct ScanBootstrapper {
    configurers: Vec<RouteScannerConfigurer>,
    processors: Vec<Arc<dyn PropertyPlaceholderProcessor>>,
}

impl std::fmt::Debug for ScanBootstrapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScanBootstrapper")
            .field("configurers", &self.configurers.len())
            .field("processors", &self.processors.len())
            .finish()
    }
}

impl ScanBootstrapper {
    /// 创建新的引导器
    pub fn new() -> Self {
        Self {
            configurers: Vec::new(),
            processors: Vec::new(),
        }
    }

    /// 添加扫描注册配置器
    pub fn with_configurer(mut self, configurer: RouteScannerConfigurer) -> Self {
        self.configurers.push(configurer);
        self
    }

    /// 添加占位符处理器
    pub fn with_placeholder_processor(
        mut self,
        processor: Arc<dyn PropertyPlaceholderProcessor>,
    ) -> Self {
        self.processors.push(processor);
        self
    }

    /// 执行两阶段引导，返回扫描注册的定义总数
    pub async fn bootstrap(
        self,
        registry: &mut dyn RouteDefinitionRegistry,
    ) -> Result<usize, RegistrarError> {
        info!("开始路由引导，共 {} 个配置器", self.configurers.len());

        // 阶段一：落地配置，组装上下文
        let mut context = ScanContext::new();
        for processor in &self.processors {
            context.add_processor(processor.clone());
        }
        for configurer in &self.configurers {
            let name = configurer.configurer_name();
            if registry.contains_definition(name) {
                debug!("配置器定义已存在，跳过落地: {}", name);
            } else {
                registry.register_definition(name, configurer.pending_definition())?;
            }
        }

        // 阶段二：扫描注册，然后冻结注册表
        let mut total = 0usize;
        for configurer in &self.configurers {
            total += configurer.post_process_registry(registry, &context).await?;
        }
        registry.freeze();

        info!("路由引导完成，共注册 {} 个路由定义", total);
        Ok(total)
    }
}
