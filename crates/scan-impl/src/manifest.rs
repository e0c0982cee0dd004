//! 基于 TOML 清单文件的路由扫描器实现
//!
//! 面向无法使用注册宏的场景，路由声明以清单文件形式维护

use async_trait::async_trait;
use routing_common::{
    is_valid_package_path, package_matches, RouteDescriptor, ScanError, TypeInfo,
};
use scan_abstractions::RouteScanner;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 清单中的单条路由声明记录
#[derive(Debug, Clone, Deserialize)]
struct ManifestEntry {
    /// 完全限定的类型路径
    #[serde(rename = "type")]
    type_name: String,
    /// 显式路由名称
    name: Option<String>,
    /// 标记类型名称，缺省为 `RouteService`
    marker: Option<String>,
    /// 优先级
    #[serde(default)]
    priority: i32,
    /// 是否启用
    #[serde(default = "default_enabled")]
    enabled: bool,
}

const fn default_enabled() -> bool {
    true
}

/// 路由清单文件结构
#[derive(Debug, Default, Deserialize)]
struct RouteManifest {
    #[serde(default)]
    routes: Vec<ManifestEntry>,
}

/// 基于 TOML 清单文件的路由扫描器
#[derive(Debug)]
pub struct ManifestRouteScanner {
    manifest_path: PathBuf,
}

impl ManifestRouteScanner {
    /// 创建新的清单扫描器；文件在扫描时读取
    pub fn new<P: AsRef<Path>>(manifest_path: P) -> Self {
        Self {
            manifest_path: manifest_path.as_ref().to_path_buf(),
        }
    }

    /// 清单文件路径
    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    async fn load_manifest(&self) -> Result<RouteManifest, ScanError> {
        let path = self.manifest_path.display().to_string();
        debug!("加载路由清单文件: {}", path);

        let content = tokio::fs::read_to_string(&self.manifest_path)
            .await
            .map_err(|e| ScanError::manifest_error(&path, e.to_string()))?;

        toml::from_str(&content).map_err(|e| ScanError::manifest_error(&path, e.to_string()))
    }

    fn entry_to_descriptor(entry: &ManifestEntry, marker: &TypeInfo) -> RouteDescriptor {
        let mut descriptor =
            RouteDescriptor::new(TypeInfo::from_qualified_name(&entry.type_name), marker.clone())
                .with_priority(entry.priority)
                .with_enabled(entry.enabled);
        if let Some(name) = &entry.name {
            descriptor = descriptor.with_route_name(name.clone());
        }
        descriptor
    }
}

#[async_trait]
impl RouteScanner for ManifestRouteScanner {
    async fn scan(
        &self,
        packages: &[String],
        marker: &TypeInfo,
    ) -> Result<Vec<RouteDescriptor>, ScanError> {
        let manifest = self.load_manifest().await?;
        let mut discovered = Vec::new();

        for package in packages {
            if !is_valid_package_path(package) {
                return Err(ScanError::scan_failure(package, "非法的包路径"));
            }

            for entry in &manifest.routes {
                // 清单来源没有真实的 TypeId，标记按名称匹配
                let entry_marker = entry.marker.as_deref().unwrap_or("RouteService");
                if entry_marker != marker.name || !entry.enabled {
                    continue;
                }

                let type_info = TypeInfo::from_qualified_name(&entry.type_name);
                if package_matches(package, &type_info.module_path)
                    && !discovered
                        .iter()
                        .any(|d: &RouteDescriptor| d.type_info.qualified_name() == entry.type_name)
                {
                    discovered.push(Self::entry_to_descriptor(entry, marker));
                }
            }
        }

        discovered.sort_by(|a, b| {
            b.priority
                .cmp(&a.priority)
                .then_with(|| a.type_info.qualified_name().cmp(&b.type_info.qualified_name()))
        });

        info!(
            "清单扫描完成: {}，共发现 {} 个声明",
            self.manifest_path.display(),
            discovered.len()
        );
        Ok(discovered)
    }

    fn name(&self) -> &str {
        "ManifestRouteScanner"
    }

    fn supports(&self, package: &str) -> bool {
        is_valid_package_path(package)
    }
}
