//! 内存路由定义注册表实现

use routing_common::RegistryError;
use scan_abstractions::{RouteDefinition, RouteDefinitionRegistry};
use std::collections::HashMap;
use tracing::{debug, info};

/// 内存路由定义注册表
///
/// 引导阶段的标准注册表实现：名称唯一，保持注册顺序，
/// 引导结束后冻结
#[derive(Debug, Default)]
pub struct InMemoryRouteRegistry {
    definitions: HashMap<String, RouteDefinition>,
    registration_order: Vec<String>,
    frozen: bool,
}

impl InMemoryRouteRegistry {
    /// 创建新的注册表
    pub fn new() -> Self {
        Self::default()
    }
}

impl RouteDefinitionRegistry for InMemoryRouteRegistry {
    fn register_definition(
        &mut self,
        name: &str,
        definition: RouteDefinition,
    ) -> Result<(), RegistryError> {
        if self.frozen {
            return Err(RegistryError::RegistryFrozen);
        }
        if self.definitions.contains_key(name) {
            return Err(RegistryError::registration_conflict(name));
        }

        debug!(
            "注册路由定义: {} ({})",
            name,
            definition.type_info.qualified_name()
        );
        self.definitions.insert(name.to_string(), definition);
        self.registration_order.push(name.to_string());
        Ok(())
    }

    fn get_definition(&self, name: &str) -> Option<&RouteDefinition> {
        self.definitions.get(name)
    }

    fn contains_definition(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    fn definition_names(&self) -> Vec<String> {
        self.registration_order.clone()
    }

    fn definition_count(&self) -> usize {
        self.definitions.len()
    }

    fn freeze(&mut self) {
        info!("注册表已冻结，共 {} 个路由定义", self.definitions.len());
        self.frozen = true;
    }

    fn is_frozen(&self) -> bool {
        self.frozen
    }
}
