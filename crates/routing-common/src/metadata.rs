//! 元数据定义
//!
//! 提供路由声明和类型的元数据信息

use std::any::TypeId;
use std::collections::HashMap;

/// 类型信息
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    /// 类型名称（不含模块路径）
    pub name: String,
    /// 类型ID
    pub id: TypeId,
    /// 模块路径
    pub module_path: String,
}

impl TypeInfo {
    /// 从类型获取类型信息
    pub fn of<T: 'static>() -> Self {
        let full_name = std::any::type_name::<T>();
        let (module_path, name) = match full_name.rsplit_once("::") {
            Some((module, name)) => (module.to_string(), name.to_string()),
            None => (String::new(), full_name.to_string()),
        };

        Self {
            name,
            id: TypeId::of::<T>(),
            module_path,
        }
    }

    /// 从标记 trait 获取类型信息（trait object 形式）
    pub fn of_marker<T: ?Sized + 'static>() -> Self {
        let full_name = std::any::type_name::<T>();
        let short_name = full_name
            .trim_start_matches("dyn ")
            .rsplit("::")
            .next()
            .unwrap_or(full_name)
            .to_string();

        Self {
            name: short_name,
            id: TypeId::of::<T>(),
            module_path: full_name.to_string(),
        }
    }

    /// 从完全限定名称创建类型信息（用于清单等文本配置）
    ///
    /// 文本来源无法取得真实的 `TypeId`，此处使用占位符，实际应该由
    /// 运行时解析
    pub fn from_qualified_name(qualified: &str) -> Self {
        let (module_path, name) = match qualified.rsplit_once("::") {
            Some((module, name)) => (module.to_string(), name.to_string()),
            None => (String::new(), qualified.to_string()),
        };

        Self {
            name,
            id: TypeId::of::<()>(),
            module_path,
        }
    }

    /// 获取完全限定名称
    pub fn qualified_name(&self) -> String {
        if self.module_path.is_empty() {
            self.name.clone()
        } else {
            format!("{}::{}", self.module_path, self.name)
        }
    }
}

/// 路由声明元数据
///
/// 扫描过程中发现的一个携带标记的声明；仅在注册过程中短暂存在，
/// 注册完成后由注册表条目接管
#[derive(Debug, Clone)]
pub struct RouteDescriptor {
    /// 目标类型信息
    pub type_info: TypeInfo,
    /// 标记类型信息
    pub marker: TypeInfo,
    /// 显式指定的路由名称（可选，缺省时由命名策略生成）
    pub route_name: Option<String>,
    /// 路由优先级
    pub priority: i32,
    /// 是否启用
    pub enabled: bool,
    /// 自定义属性
    pub metadata: HashMap<String, String>,
}

impl RouteDescriptor {
    /// 创建新的路由声明元数据
    pub fn new(type_info: TypeInfo, marker: TypeInfo) -> Self {
        Self {
            type_info,
            marker,
            route_name: None,
            priority: 0,
            enabled: true,
            metadata: HashMap::new(),
        }
    }

    /// 设置显式路由名称
    pub fn with_route_name(mut self, name: impl Into<String>) -> Self {
        self.route_name = Some(name.into());
        self
    }

    /// 设置优先级
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// 设置启用状态
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// 添加自定义属性
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}
