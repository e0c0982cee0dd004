//! 基于全局清单的路由扫描器实现

use async_trait::async_trait;
use dashmap::DashMap;
use routing_common::{
    inventory_descriptors, is_valid_package_path, package_matches, RouteDescriptor, ScanError,
    TypeInfo,
};
use scan_abstractions::RouteScanner;
use std::any::TypeId;
use std::collections::HashSet;
use tracing::{debug, info};

/// 基于全局清单的路由扫描器
///
/// `#[route_service]` 宏在程序启动时把声明写入全局清单，
/// 扫描即按标记类型和包路径前缀过滤该清单
#[derive(Debug, Default)]
pub struct InventoryRouteScanner {
    /// 扫描结果缓存，键为包路径与标记类型的组合
    scan_cache: DashMap<(String, TypeId), Vec<RouteDescriptor>>,
}

impl InventoryRouteScanner {
    /// 创建新的扫描器
    pub fn new() -> Self {
        Self::default()
    }

    /// 清空扫描缓存
    pub fn clear_cache(&self) {
        self.scan_cache.clear();
        debug!("扫描缓存已清空");
    }

    fn scan_package(&self, package: &str, marker: &TypeInfo) -> Vec<RouteDescriptor> {
        let cache_key = (package.to_string(), marker.id);
        if let Some(cached) = self.scan_cache.get(&cache_key) {
            debug!("使用缓存的扫描结果: {}", package);
            return cached.clone();
        }

        let matches: Vec<RouteDescriptor> = inventory_descriptors()
            .into_iter()
            .filter(|descriptor| {
                descriptor.enabled
                    && descriptor.marker.id == marker.id
                    && package_matches(package, &descriptor.type_info.module_path)
            })
            .collect();

        if matches.is_empty() {
            // 空扫描结果按无操作处理
            debug!("包 {} 未发现携带标记 {} 的路由声明", package, marker.name);
        }

        self.scan_cache.insert(cache_key, matches.clone());
        matches
    }
}

#[async_trait]
impl RouteScanner for InventoryRouteScanner {
    async fn scan(
        &self,
        packages: &[String],
        marker: &TypeInfo,
    ) -> Result<Vec<RouteDescriptor>, ScanError> {
        let mut discovered = Vec::new();
        let mut seen = HashSet::new();

        for package in packages {
            if !is_valid_package_path(package) {
                return Err(ScanError::scan_failure(package, "非法的包路径"));
            }

            for descriptor in self.scan_package(package, marker) {
                // 包路径存在包含关系时按类型去重
                if seen.insert(descriptor.type_info.id) {
                    discovered.push(descriptor);
                }
            }
        }

        discovered.sort_by(|a, b| {
            b.priority
                .cmp(&a.priority)
                .then_with(|| a.type_info.qualified_name().cmp(&b.type_info.qualified_name()))
        });

        info!("路由扫描完成，共发现 {} 个声明", discovered.len());
        Ok(discovered)
    }

    fn name(&self) -> &str {
        "InventoryRouteScanner"
    }

    fn supports(&self, package: &str) -> bool {
        is_valid_package_path(package)
    }
}
