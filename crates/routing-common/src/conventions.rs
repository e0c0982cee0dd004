//! 约定规范定义
//!
//! 提供包路径分词、匹配和命名的约定规范

/// 包路径分隔符集合（逗号、分号，空白另行处理）
pub const PACKAGE_DELIMITERS: &[char] = &[',', ';'];

/// 将配置的包路径字符串按标准分隔符分词
///
/// 逗号、分号和任意空白都视为分隔符，空片段被丢弃
pub fn tokenize_base_packages(base_package: &str) -> Vec<String> {
    base_package
        .split(|c: char| PACKAGE_DELIMITERS.contains(&c) || c.is_whitespace())
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// 检查包路径是否为合法的模块路径形式
///
/// 每个片段必须是合法标识符（字母、数字、下划线，不以数字开头），
/// 片段之间以 `::` 分隔
pub fn is_valid_package_path(package: &str) -> bool {
    if package.is_empty() {
        return false;
    }

    package.split("::").all(|segment| {
        let mut chars = segment.chars();
        match chars.next() {
            Some(first) if first.is_alphabetic() || first == '_' => {
                chars.all(|c| c.is_alphanumeric() || c == '_')
            }
            _ => false,
        }
    })
}

/// 检查模块路径是否位于给定包路径之下
///
/// 只在模块边界上匹配：`demo::routes` 匹配自身和
/// `demo::routes::orders`，但不匹配 `demo::routes_extra`
pub fn package_matches(package: &str, module_path: &str) -> bool {
    module_path == package
        || module_path
            .strip_prefix(package)
            .is_some_and(|rest| rest.starts_with("::"))
}

/// 将驼峰命名转换为蛇形命名
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch.is_uppercase() && !result.is_empty() {
            if let Some(&next_ch) = chars.peek() {
                if next_ch.is_lowercase() {
                    result.push('_');
                }
            }
        }
        result.push(ch.to_lowercase().next().unwrap_or(ch));
    }

    result
}
