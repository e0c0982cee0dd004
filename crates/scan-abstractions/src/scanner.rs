//! 路由扫描器抽象接口
//!
//! 提供按包路径和标记类型枚举路由声明的能力

use async_trait::async_trait;
use routing_common::{RouteDescriptor, ScanError, TypeInfo};

/// 路由扫描器 trait
///
/// 扫描引擎负责在给定的包路径集合中枚举携带标记的声明；
/// 匹配零条声明不是错误，按无操作处理
#[async_trait]
pub trait RouteScanner: Send + Sync {
    /// 在给定包路径集合中枚举携带指定标记的路由声明
    async fn scan(
        &self,
        packages: &[String],
        marker: &TypeInfo,
    ) -> Result<Vec<RouteDescriptor>, ScanError>;

    /// 扫描器名称
    fn name(&self) -> &str;

    /// 检查是否支持给定的包路径
    fn supports(&self, package: &str) -> bool;
}
