//! 错误类型定义

use thiserror::Error;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("必需配置项缺失: {field}")]
    RequiredFieldMissing { field: String },

    #[error("占位符无法解析: {placeholder}")]
    PlaceholderUnresolved { placeholder: String },

    #[error("配置项无效: {field}, 原因: {message}")]
    InvalidFieldValue { field: String, message: String },
}

impl ConfigurationError {
    /// 创建必需配置项缺失错误
    pub fn required_field_missing(field: impl Into<String>) -> Self {
        Self::RequiredFieldMissing {
            field: field.into(),
        }
    }

    /// 创建占位符无法解析错误
    pub fn placeholder_unresolved(placeholder: impl Into<String>) -> Self {
        Self::PlaceholderUnresolved {
            placeholder: placeholder.into(),
        }
    }

    /// 创建配置项无效错误
    pub fn invalid_field_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidFieldValue {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// 扫描错误类型
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("路由扫描失败: {package}, 原因: {message}")]
    ScanFailure { package: String, message: String },

    #[error("路由清单读取失败: {path}, 原因: {message}")]
    ManifestError { path: String, message: String },
}

impl ScanError {
    /// 创建扫描失败错误
    pub fn scan_failure(package: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ScanFailure {
            package: package.into(),
            message: message.into(),
        }
    }

    /// 创建清单读取失败错误
    pub fn manifest_error(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ManifestError {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// 注册表错误类型
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("路由定义名称冲突: {name}")]
    RegistrationConflict { name: String },

    #[error("路由定义不存在: {name}")]
    DefinitionNotFound { name: String },

    #[error("注册表已冻结，禁止继续注册")]
    RegistryFrozen,
}

impl RegistryError {
    /// 创建名称冲突错误
    pub fn registration_conflict(name: impl Into<String>) -> Self {
        Self::RegistrationConflict { name: name.into() }
    }

    /// 创建定义不存在错误
    pub fn definition_not_found(name: impl Into<String>) -> Self {
        Self::DefinitionNotFound { name: name.into() }
    }
}

/// 注册器错误类型
///
/// 扫描注册与引导流程的汇总错误；所有失败对引导过程都是致命的，
/// 组件内部不做任何恢复或重试
#[derive(Error, Debug)]
pub enum RegistrarError {
    #[error("配置错误: {source}")]
    Configuration {
        #[from]
        source: ConfigurationError,
    },

    #[error("扫描错误: {source}")]
    Scan {
        #[from]
        source: ScanError,
    },

    #[error("注册表错误: {source}")]
    Registry {
        #[from]
        source: RegistryError,
    },

    #[error("引导失败: {message}")]
    BootstrapFailed { message: String },
}

/// 结果类型别名
pub type ConfigurationResult<T> = Result<T, ConfigurationError>;
pub type ScanResult<T> = Result<T, ScanError>;
pub type RegistryResult<T> = Result<T, RegistryError>;
pub type RegistrarResult<T> = Result<T, RegistrarError>;
