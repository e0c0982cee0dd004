//! 扫描上下文

use scan_abstractions::PropertyPlaceholderProcessor;
use std::sync::Arc;
use uuid::Uuid;

/// 扫描上下文
///
/// 承载引导期间对配置器可见的环境：当前只包含已注册的文本占位符
/// 处理器集合
#[derive(Clone)]
pub struct ScanContext {
    id: Uuid,
    created_at: chrono::DateTime<chrono::Utc>,
    processors: Vec<Arc<dyn PropertyPlaceholderProcessor>>,
}

impl ScanContext {
    /// 创建新的扫描上下文
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: chrono::Utc::now(),
            processors: Vec::new(),
        }
    }

    /// 添加占位符处理器
    pub fn add_processor(&mut self, processor: Arc<dyn PropertyPlaceholderProcessor>) {
        self.processors.push(processor);
    }

    /// 添加占位符处理器（链式）
    pub fn with_processor(mut self, processor: Arc<dyn PropertyPlaceholderProcessor>) -> Self {
        self.add_processor(processor);
        self
    }

    /// 获取全部占位符处理器，按 `order` 升序排列
    pub fn placeholder_processors(&self) -> Vec<Arc<dyn PropertyPlaceholderProcessor>> {
        let mut processors = self.processors.clone();
        processors.sort_by_key(|p| p.order());
        processors
    }

    /// 是否注册了占位符处理器
    pub fn has_placeholder_processors(&self) -> bool {
        !self.processors.is_empty()
    }

    /// 上下文标识
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// 上下文创建时间
    pub fn created_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.created_at
    }
}

impl Default for ScanContext {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ScanContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScanContext")
            .field("id", &self.id)
            .field("created_at", &self.created_at)
            .field("processors", &self.processors.len())
            .finish()
    }
}
