//! 路由扫描注册配置器
//!
//! 引导阶段的单一操作入口：按配置的包路径扫描携带标记的路由声明，
//! 为每条声明生成注册名称并写入注册表

use crate::context::ScanContext;
use routing_common::{
    tokenize_base_packages, ConfigurationError, PropertyValue, RegistrarError, RegistryError,
    RouteService, TypeInfo,
};
use scan_abstractions::{
    PropertyPlaceholderProcessor, RouteDefinition, RouteDefinitionRegistry, RouteNameGenerator,
    RouteScanner,
};
use scan_impl::{DefaultRouteNameGenerator, InventoryRouteScanner};
use std::sync::Arc;
use tracing::{debug, info};

/// 配置器自身定义中承载包路径的属性键
pub const BASE_PACKAGE_PROPERTY: &str = "base_package";

/// 配置器在注册表中的默认条目名称
pub const DEFAULT_CONFIGURER_NAME: &str = "route_scanner_configurer";

/// 路由扫描注册配置器
///
/// 配置一经 [`post_process_registry`](Self::post_process_registry)
/// 开始执行即不可变；该入口在引导期间只被调用一次
pub struct RouteScannerConfigurer {
    /// 待扫描的包路径字符串（可含多个分隔的路径和占位符记号）
    base_package: Option<String>,
    /// 标记类型
    marker: Option<TypeInfo>,
    /// 是否先对配置器自身的属性做占位符解析
    process_property_placeholders: bool,
    /// 注册名称生成策略
    name_generator: Arc<dyn RouteNameGenerator>,
    /// 扫描引擎
    scanner: Arc<dyn RouteScanner>,
    /// 配置器在注册表中的条目名称
    configurer_name: String,
}

impl RouteScannerConfigurer {
    /// 创建新的配置器，使用内置扫描器、内置命名策略和默认标记
    pub fn new() -> Self {
        Self {
            base_package: None,
            marker: Some(TypeInfo::of_marker::<dyn RouteService>()),
            process_property_placeholders: false,
            name_generator: Arc::new(DefaultRouteNameGenerator::new()),
            scanner: Arc::new(InventoryRouteScanner::new()),
            configurer_name: DEFAULT_CONFIGURER_NAME.to_string(),
        }
    }

    /// 设置待扫描的包路径字符串
    pub fn with_base_package(mut self, base_package: impl Into<String>) -> Self {
        self.base_package = Some(base_package.into());
        self
    }

    /// 设置标记类型
    pub fn with_marker(mut self, marker: TypeInfo) -> Self {
        self.marker = Some(marker);
        self
    }

    /// 设置是否先做占位符解析
    pub fn with_process_property_placeholders(mut self, process: bool) -> Self {
        self.process_property_placeholders = process;
        self
    }

    /// 设置注册名称生成策略
    pub fn with_name_generator(mut self, generator: Arc<dyn RouteNameGenerator>) -> Self {
        self.name_generator = generator;
        self
    }

    /// 设置扫描引擎
    pub fn with_scanner(mut self, scanner: Arc<dyn RouteScanner>) -> Self {
        self.scanner = scanner;
        self
    }

    /// 设置配置器在注册表中的条目名称
    pub fn with_configurer_name(mut self, name: impl Into<String>) -> Self {
        self.configurer_name = name.into();
        self
    }

    /// 覆盖包路径配置
    pub fn set_base_package(&mut self, base_package: Option<String>) {
        self.base_package = base_package;
    }

    /// 覆盖标记类型配置
    pub fn set_marker(&mut self, marker: Option<TypeInfo>) {
        self.marker = marker;
    }

    /// 配置器在注册表中的条目名称
    pub fn configurer_name(&self) -> &str {
        &self.configurer_name
    }

    /// 校验必需配置项
    ///
    /// `base_package` 与 `marker` 缺失时立即失败，任何扫描都不会发生
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        match &self.base_package {
            Some(pkg) if !pkg.trim().is_empty() => {}
            _ => return Err(ConfigurationError::required_field_missing(BASE_PACKAGE_PROPERTY)),
        }
        if self.marker.is_none() {
            return Err(ConfigurationError::required_field_missing("marker"));
        }
        Ok(())
    }

    /// 构造配置器自身的待处理定义
    ///
    /// 引导流程在扫描开始前把它写入注册表，占位符解析步骤从注册表
    /// 取回的就是这条定义
    pub fn pending_definition(&self) -> RouteDefinition {
        let mut definition = RouteDefinition::new(TypeInfo::of::<Self>());
        if let Some(pkg) = &self.base_package {
            definition
                .properties
                .set(BASE_PACKAGE_PROPERTY, PropertyValue::literal(pkg.clone()));
        }
        definition
    }

    /// 引导阶段的单一操作入口
    ///
    /// 可选的占位符解析之后，把包路径字符串分词为一个或多个包路径，
    /// 交由扫描引擎枚举声明，并为每条声明生成名称写入注册表。
    /// 返回本次注册的定义数量。
    ///
    /// 匹配零条声明的包路径按无操作处理；扫描引擎和注册表的错误
    /// 原样向上传播，已注册的条目不回滚
    pub async fn post_process_registry(
        &self,
        registry: &mut dyn RouteDefinitionRegistry,
        context: &ScanContext,
    ) -> Result<usize, RegistrarError> {
        info!("开始路由服务扫描注册...");
        self.validate()?;

        let base_package = if self.process_property_placeholders {
            self.resolve_base_package(&*registry, context)?
        } else {
            self.base_package.clone()
        };

        // 占位符解析可能得出"无值"，此处按配置缺失处理
        let base_package = match base_package {
            Some(pkg) if !pkg.trim().is_empty() => pkg,
            _ => {
                return Err(
                    ConfigurationError::required_field_missing(BASE_PACKAGE_PROPERTY).into(),
                )
            }
        };
        let marker = self
            .marker
            .as_ref()
            .ok_or_else(|| ConfigurationError::required_field_missing("marker"))?;

        let packages = tokenize_base_packages(&base_package);
        if packages.is_empty() {
            return Err(ConfigurationError::invalid_field_value(
                BASE_PACKAGE_PROPERTY,
                "未包含任何有效包路径",
            )
            .into());
        }
        debug!("解析后的扫描包路径: {:?}", packages);

        let descriptors = self.scanner.scan(&packages, marker).await?;
        if descriptors.is_empty() {
            // 空扫描结果按无操作处理
            debug!("扫描结果为空，跳过注册");
            return Ok(0);
        }

        let mut registered = 0usize;
        for descriptor in &descriptors {
            let name = self.name_generator.generate(descriptor, registry);
            let definition = RouteDefinition::from_descriptor(descriptor);
            registry.register_definition(&name, definition)?;
            registered += 1;
        }

        info!("路由服务注册完成，共注册 {} 个定义", registered);
        Ok(registered)
    }

    /// 占位符解析子步骤
    ///
    /// 注册表填充先于全局属性替换执行，配置器自身的属性此时尚未被
    /// 替换。为此从注册表取回自身的待处理定义，在仅含这一条定义的
    /// 隔离视图上依次应用全部处理器，再读回解析后的包路径。
    /// 上下文中没有处理器时静默跳过，直接使用字面配置值
    fn resolve_base_package(
        &self,
        registry: &dyn RouteDefinitionRegistry,
        context: &ScanContext,
    ) -> Result<Option<String>, RegistrarError> {
        let processors = context.placeholder_processors();
        if processors.is_empty() {
            debug!("未注册任何占位符处理器，跳过占位符解析");
            return Ok(self.base_package.clone());
        }

        let pending = registry
            .get_definition(&self.configurer_name)
            .ok_or_else(|| RegistryError::definition_not_found(&self.configurer_name))?;

        let mut view = IsolatedDefinitionView::new(self.configurer_name.clone(), pending.clone());
        for processor in &processors {
            debug!("应用占位符处理器: {}", processor.name());
            view.apply(processor.as_ref())?;
        }

        Ok(view
            .definition()
            .properties
            .get(BASE_PACKAGE_PROPERTY)
            .and_then(PropertyValue::resolve_text)
            .map(str::to_string))
    }
}

impl Default for RouteScannerConfigurer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RouteScannerConfigurer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteScannerConfigurer")
            .field("base_package", &self.base_package)
            .field("marker", &self.marker.as_ref().map(|m| &m.name))
            .field(
                "process_property_placeholders",
                &self.process_property_placeholders,
            )
            .field("configurer_name", &self.configurer_name)
            .field("scanner", &self.scanner.name())
            .finish()
    }
}

/// 仅包含单条待处理定义的隔离注册表视图
///
/// 占位符处理器在此视图上就地修改属性值，真实注册表不受影响
#[derive(Debug)]
pub struct IsolatedDefinitionView {
    name: String,
    definition: RouteDefinition,
}

impl IsolatedDefinitionView {
    /// 以一条定义的副本创建隔离视图
    pub fn new(name: impl Into<String>, definition: RouteDefinition) -> Self {
        Self {
            name: name.into(),
            definition,
        }
    }

    /// 对视图中的定义应用一个占位符处理器
    pub fn apply(
        &mut self,
        processor: &dyn PropertyPlaceholderProcessor,
    ) -> Result<(), ConfigurationError> {
        processor.process_definition(&mut self.definition)
    }

    /// 视图中的定义名称
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 视图中的定义
    pub fn definition(&self) -> &RouteDefinition {
        &self.definition
    }
}
