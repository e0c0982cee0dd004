//! Centralized integration tests for routing-composition crate

use async_trait::async_trait;
use routing_common::{
    ConfigurationError, PropertyValue, RegistrarError, RegistryError, RouteDescriptor,
    RouteService, ScanError, TypeInfo,
};
use routing_composition::{RouteScannerConfigurer, ScanBootstrapper, ScanContext};
use scan_abstractions::{
    RouteDefinition, RouteDefinitionRegistry, RouteNameGenerator, RouteScanner,
};
use scan_impl::{InMemoryRouteRegistry, MapPropertySource, PropertySourcesPlaceholderProcessor};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// 通过注册宏声明的测试路由
mod fixtures {
    use route_macros::route_service;

    #[derive(Debug)]
    #[route_service(priority = 5)]
    pub struct OrderRoute;

    #[derive(Debug)]
    #[route_service(name = "payments")]
    pub struct PaymentRoute;
}

/// 记录调用情况的扫描器桩
#[derive(Debug)]
struct CountingScanner {
    calls: Arc<AtomicUsize>,
    seen_packages: Arc<Mutex<Vec<String>>>,
    results: Vec<RouteDescriptor>,
    fail: bool,
}

impl CountingScanner {
    fn new(results: Vec<RouteDescriptor>) -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            seen_packages: Arc::new(Mutex::new(Vec::new())),
            results,
            fail: false,
        }
    }

    fn failing() -> Self {
        let mut scanner = Self::new(Vec::new());
        scanner.fail = true;
        scanner
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn seen_packages(&self) -> Vec<String> {
        self.seen_packages.lock().unwrap().clone()
    }
}

#[async_trait]
impl RouteScanner for CountingScanner {
    async fn scan(
        &self,
        packages: &[String],
        _marker: &TypeInfo,
    ) -> Result<Vec<RouteDescriptor>, ScanError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen_packages
            .lock()
            .unwrap()
            .extend(packages.iter().cloned());
        if self.fail {
            return Err(ScanError::scan_failure(
                packages.first().cloned().unwrap_or_default(),
                "scanner stub failure",
            ));
        }
        Ok(self.results.clone())
    }

    fn name(&self) -> &str {
        "CountingScanner"
    }

    fn supports(&self, _package: &str) -> bool {
        true
    }
}

/// 固定名称的命名策略桩，用于制造名称冲突
struct FixedNameGenerator(&'static str);

impl RouteNameGenerator for FixedNameGenerator {
    fn generate(
        &self,
        _descriptor: &RouteDescriptor,
        _registry: &dyn RouteDefinitionRegistry,
    ) -> String {
        self.0.to_string()
    }
}

/// 统计定义读取次数的注册表包装
#[derive(Default)]
struct TrackingRegistry {
    inner: InMemoryRouteRegistry,
    lookups: AtomicUsize,
}

impl TrackingRegistry {
    fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl RouteDefinitionRegistry for TrackingRegistry {
    fn register_definition(
        &mut self,
        name: &str,
        definition: RouteDefinition,
    ) -> Result<(), RegistryError> {
        self.inner.register_definition(name, definition)
    }

    fn get_definition(&self, name: &str) -> Option<&RouteDefinition> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.get_definition(name)
    }

    fn contains_definition(&self, name: &str) -> bool {
        self.inner.contains_definition(name)
    }

    fn definition_names(&self) -> Vec<String> {
        self.inner.definition_names()
    }

    fn definition_count(&self) -> usize {
        self.inner.definition_count()
    }

    fn freeze(&mut self) {
        self.inner.freeze();
    }

    fn is_frozen(&self) -> bool {
        self.inner.is_frozen()
    }
}

fn descriptor(qualified: &str) -> RouteDescriptor {
    RouteDescriptor::new(
        TypeInfo::from_qualified_name(qualified),
        TypeInfo::of_marker::<dyn RouteService>(),
    )
}

#[tokio::test]
async fn test_missing_base_package_fails_before_any_scan() {
    let scanner = Arc::new(CountingScanner::new(Vec::new()));
    let configurer = RouteScannerConfigurer::new().with_scanner(scanner.clone());
    let mut registry = InMemoryRouteRegistry::new();

    let result = configurer
        .post_process_registry(&mut registry, &ScanContext::new())
        .await;

    assert!(matches!(
        result,
        Err(RegistrarError::Configuration {
            source: ConfigurationError::RequiredFieldMissing { ref field }
        }) if field == "base_package"
    ));
    assert_eq!(scanner.call_count(), 0);
    assert_eq!(registry.definition_count(), 0);
}

#[tokio::test]
async fn test_missing_marker_fails_before_any_scan() {
    let scanner = Arc::new(CountingScanner::new(Vec::new()));
    let mut configurer = RouteScannerConfigurer::new()
        .with_base_package("demo::routes")
        .with_scanner(scanner.clone());
    configurer.set_marker(None);
    let mut registry = InMemoryRouteRegistry::new();

    let result = configurer
        .post_process_registry(&mut registry, &ScanContext::new())
        .await;

    assert!(matches!(
        result,
        Err(RegistrarError::Configuration {
            source: ConfigurationError::RequiredFieldMissing { ref field }
        }) if field == "marker"
    ));
    assert_eq!(scanner.call_count(), 0);
}

#[tokio::test]
async fn test_zero_match_scan_completes_without_registrations() {
    let scanner = Arc::new(CountingScanner::new(Vec::new()));
    let configurer = RouteScannerConfigurer::new()
        .with_base_package("demo::routes")
        .with_scanner(scanner.clone());
    let mut registry = InMemoryRouteRegistry::new();

    let registered = configurer
        .post_process_registry(&mut registry, &ScanContext::new())
        .await
        .unwrap();

    assert_eq!(registered, 0);
    assert_eq!(registry.definition_count(), 0);
    assert_eq!(scanner.call_count(), 1);
}

#[tokio::test]
async fn test_tokenized_packages_reach_scanner() {
    let scanner = Arc::new(CountingScanner::new(Vec::new()));
    let configurer = RouteScannerConfigurer::new()
        .with_base_package("a.b, a.c;a.d")
        .with_scanner(scanner.clone());
    let mut registry = InMemoryRouteRegistry::new();

    configurer
        .post_process_registry(&mut registry, &ScanContext::new())
        .await
        .unwrap();

    assert_eq!(scanner.seen_packages(), vec!["a.b", "a.c", "a.d"]);
}

#[tokio::test]
async fn test_duplicate_generated_names_raise_conflict_and_keep_first() {
    let scanner = Arc::new(CountingScanner::new(vec![
        descriptor("demo::routes::OrderRoute"),
        descriptor("demo::api::OrderRoute"),
    ]));
    let configurer = RouteScannerConfigurer::new()
        .with_base_package("demo")
        .with_scanner(scanner)
        .with_name_generator(Arc::new(FixedNameGenerator("order_route")));
    let mut registry = InMemoryRouteRegistry::new();

    let result = configurer
        .post_process_registry(&mut registry, &ScanContext::new())
        .await;

    assert!(matches!(
        result,
        Err(RegistrarError::Registry {
            source: RegistryError::RegistrationConflict { ref name }
        }) if name == "order_route"
    ));
    // 第一条注册不回滚，也不被覆盖
    assert_eq!(registry.definition_count(), 1);
    let kept = registry.get_definition("order_route").unwrap();
    assert_eq!(kept.type_info.module_path, "demo::routes");
}

#[tokio::test]
async fn test_placeholder_resolution_rewrites_base_package_before_scan() {
    let scanner = Arc::new(CountingScanner::new(Vec::new()));
    let configurer = RouteScannerConfigurer::new()
        .with_base_package("${pkg}")
        .with_process_property_placeholders(true)
        .with_scanner(scanner.clone());
    let mut registry = InMemoryRouteRegistry::new();
    registry
        .register_definition(configurer.configurer_name(), configurer.pending_definition())
        .unwrap();

    let processor = PropertySourcesPlaceholderProcessor::new().with_source(Arc::new(
        MapPropertySource::new("test").with_property("pkg", "com_example::services"),
    ));
    let context = ScanContext::new().with_processor(Arc::new(processor));

    configurer
        .post_process_registry(&mut registry, &context)
        .await
        .unwrap();

    // 扫描必须针对解析后的包路径执行，而不是字面记号
    assert_eq!(scanner.seen_packages(), vec!["com_example::services"]);
}

#[tokio::test]
async fn test_placeholders_without_processors_use_literal_value() {
    let scanner = Arc::new(CountingScanner::new(Vec::new()));
    let configurer = RouteScannerConfigurer::new()
        .with_base_package("demo::services")
        .with_process_property_placeholders(true)
        .with_scanner(scanner.clone());
    let mut registry = TrackingRegistry::default();

    configurer
        .post_process_registry(&mut registry, &ScanContext::new())
        .await
        .unwrap();

    // 没有处理器时不构造隔离视图，也不读取注册表
    assert_eq!(registry.lookup_count(), 0);
    assert_eq!(scanner.seen_packages(), vec!["demo::services"]);
}

#[tokio::test]
async fn test_placeholder_processors_apply_in_order() {
    let scanner = Arc::new(CountingScanner::new(Vec::new()));
    let configurer = RouteScannerConfigurer::new()
        .with_base_package("${pkg}")
        .with_process_property_placeholders(true)
        .with_scanner(scanner.clone());
    let mut registry = InMemoryRouteRegistry::new();
    registry
        .register_definition(configurer.configurer_name(), configurer.pending_definition())
        .unwrap();

    // order 小者先执行，记号被首个命中的处理器消耗
    let early = PropertySourcesPlaceholderProcessor::new()
        .with_source(Arc::new(
            MapPropertySource::new("early").with_property("pkg", "first_pass"),
        ))
        .with_order(-10);
    let late = PropertySourcesPlaceholderProcessor::new()
        .with_source(Arc::new(
            MapPropertySource::new("late").with_property("pkg", "second_pass"),
        ))
        .with_order(10);
    let context = ScanContext::new()
        .with_processor(Arc::new(late))
        .with_processor(Arc::new(early));

    configurer
        .post_process_registry(&mut registry, &context)
        .await
        .unwrap();

    assert_eq!(scanner.seen_packages(), vec!["first_pass"]);
}

#[tokio::test]
async fn test_missing_pending_definition_propagates_registry_error() {
    let configurer = RouteScannerConfigurer::new()
        .with_base_package("${pkg}")
        .with_process_property_placeholders(true)
        .with_scanner(Arc::new(CountingScanner::new(Vec::new())));
    let mut registry = InMemoryRouteRegistry::new();

    let processor = PropertySourcesPlaceholderProcessor::new()
        .with_source(Arc::new(MapPropertySource::new("test").with_property("pkg", "demo")));
    let context = ScanContext::new().with_processor(Arc::new(processor));

    let result = configurer
        .post_process_registry(&mut registry, &context)
        .await;

    assert!(matches!(
        result,
        Err(RegistrarError::Registry {
            source: RegistryError::DefinitionNotFound { .. }
        })
    ));
}

#[tokio::test]
async fn test_scanner_failure_propagates_unmodified() {
    let configurer = RouteScannerConfigurer::new()
        .with_base_package("demo::routes")
        .with_scanner(Arc::new(CountingScanner::failing()));
    let mut registry = InMemoryRouteRegistry::new();

    let result = configurer
        .post_process_registry(&mut registry, &ScanContext::new())
        .await;

    assert!(matches!(
        result,
        Err(RegistrarError::Scan {
            source: ScanError::ScanFailure { .. }
        })
    ));
    assert_eq!(registry.definition_count(), 0);
}

#[tokio::test]
async fn test_bootstrap_end_to_end_with_macro_declared_routes() {
    let processor = PropertySourcesPlaceholderProcessor::new().with_source(Arc::new(
        MapPropertySource::new("test").with_property("pkg", "integration_tests::fixtures"),
    ));
    let configurer = RouteScannerConfigurer::new()
        .with_base_package("${pkg}")
        .with_process_property_placeholders(true);

    let mut registry = InMemoryRouteRegistry::new();
    let registered = ScanBootstrapper::new()
        .with_configurer(configurer)
        .with_placeholder_processor(Arc::new(processor))
        .bootstrap(&mut registry)
        .await
        .unwrap();

    assert_eq!(registered, 2);
    // 宏声明的路由按命名策略注册
    assert!(registry.contains_definition("order_route"));
    assert!(registry.contains_definition("payments"));
    // 配置器自身的待处理定义在阶段一落地后保留
    assert!(registry.contains_definition("route_scanner_configurer"));
    // 引导结束后注册表被冻结
    assert!(registry.is_frozen());
    let late = registry.register_definition(
        "late_route",
        RouteDefinition::new(TypeInfo::from_qualified_name("demo::LateRoute")),
    );
    assert!(matches!(late, Err(RegistryError::RegistryFrozen)));
}

#[tokio::test]
async fn test_bootstrap_registers_definitions_with_descriptor_metadata() {
    let configurer =
        RouteScannerConfigurer::new().with_base_package("integration_tests::fixtures");

    let mut registry = InMemoryRouteRegistry::new();
    ScanBootstrapper::new()
        .with_configurer(configurer)
        .bootstrap(&mut registry)
        .await
        .unwrap();

    let order = registry.get_definition("order_route").unwrap();
    assert_eq!(order.type_info.name, "OrderRoute");
    assert_eq!(order.priority, 5);
    assert!(order.enabled);
    assert_eq!(
        order.marker.as_ref().map(|m| m.name.as_str()),
        Some("RouteService")
    );

    let payments = registry.get_definition("payments").unwrap();
    assert_eq!(payments.type_info.name, "PaymentRoute");
}

#[tokio::test]
async fn test_unresolvable_placeholder_aborts_bootstrap() {
    let processor = PropertySourcesPlaceholderProcessor::new()
        .with_source(Arc::new(MapPropertySource::new("empty")));
    let configurer = RouteScannerConfigurer::new()
        .with_base_package("${missing}")
        .with_process_property_placeholders(true);

    let mut registry = InMemoryRouteRegistry::new();
    let result = ScanBootstrapper::new()
        .with_configurer(configurer)
        .with_placeholder_processor(Arc::new(processor))
        .bootstrap(&mut registry)
        .await;

    assert!(matches!(
        result,
        Err(RegistrarError::Configuration {
            source: ConfigurationError::PlaceholderUnresolved { .. }
        })
    ));
    assert!(!registry.is_frozen());
}

#[tokio::test]
async fn test_non_text_base_package_value_is_treated_as_absent() {
    let scanner = Arc::new(CountingScanner::new(Vec::new()));
    let configurer = RouteScannerConfigurer::new()
        .with_base_package("${pkg}")
        .with_process_property_placeholders(true)
        .with_scanner(scanner.clone());
    let mut registry = InMemoryRouteRegistry::new();

    // 待处理定义中的包路径属性是结构化值而非文本
    let mut pending = configurer.pending_definition();
    pending.properties.set(
        "base_package",
        PropertyValue::Value(serde_json::json!(["demo"])),
    );
    registry
        .register_definition(configurer.configurer_name(), pending)
        .unwrap();

    let processor = PropertySourcesPlaceholderProcessor::new()
        .with_source(Arc::new(MapPropertySource::new("test").with_property("pkg", "demo")));
    let context = ScanContext::new().with_processor(Arc::new(processor));

    let result = configurer
        .post_process_registry(&mut registry, &context)
        .await;

    assert!(matches!(
        result,
        Err(RegistrarError::Configuration {
            source: ConfigurationError::RequiredFieldMissing { ref field }
        }) if field == "base_package"
    ));
    assert_eq!(scanner.call_count(), 0);
}
