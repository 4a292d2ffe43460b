use crate::error::ClassNameError;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_ELEMENT_SEPARATOR: &str = "-";
pub const DEFAULT_STATE_SEPARATOR: &str = "-";

/// 命名配置：决定 prefix、tail、state 之间用什么连接
///
/// 默认都是单个 `-`：
/// - element 名：`root` + `actions` → `root-actions`
/// - state 名：`root-actions` + `active` → `root-actions-active`
///
/// 分隔符不能为空，也不能包含空白（否则会破坏以空格分隔的输出）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawNamingConfig", rename_all = "camelCase")]
pub struct NamingConfig {
    element_separator: String,
    state_separator: String,
}

/// 未校验的配置，仅用于反序列化
#[derive(Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawNamingConfig {
    element_separator: String,
    state_separator: String,
}

impl Default for RawNamingConfig {
    fn default() -> Self {
        Self {
            element_separator: DEFAULT_ELEMENT_SEPARATOR.to_string(),
            state_separator: DEFAULT_STATE_SEPARATOR.to_string(),
        }
    }
}

impl TryFrom<RawNamingConfig> for NamingConfig {
    type Error = ClassNameError;

    fn try_from(raw: RawNamingConfig) -> Result<Self, Self::Error> {
        NamingConfig::new(raw.element_separator, raw.state_separator)
    }
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            element_separator: DEFAULT_ELEMENT_SEPARATOR.to_string(),
            state_separator: DEFAULT_STATE_SEPARATOR.to_string(),
        }
    }
}

impl NamingConfig {
    pub fn new(
        element_separator: impl Into<String>,
        state_separator: impl Into<String>,
    ) -> Result<Self, ClassNameError> {
        let element_separator = element_separator.into();
        let state_separator = state_separator.into();
        validate_separator("elementSeparator", &element_separator)?;
        validate_separator("stateSeparator", &state_separator)?;

        Ok(Self {
            element_separator,
            state_separator,
        })
    }

    /// 经典 BEM：`block__element--modifier`
    pub fn bem() -> Self {
        Self {
            element_separator: "__".to_string(),
            state_separator: "--".to_string(),
        }
    }

    /// 从 JSON 字符串加载，缺省字段取默认值
    ///
    /// ```
    /// use classnamer_core::NamingConfig;
    ///
    /// let config = NamingConfig::from_json(r#"{ "elementSeparator": "__" }"#).unwrap();
    /// assert_eq!(config.element_separator(), "__");
    /// assert_eq!(config.state_separator(), "-");
    /// ```
    pub fn from_json(json_str: &str) -> Result<Self, ClassNameError> {
        let raw: RawNamingConfig = serde_json::from_str(json_str)?;
        let config = Self::try_from(raw)?;
        debug!(?config, "loaded naming config");
        Ok(config)
    }

    /// 从已解析的 JSON 值加载；`null` 视为默认配置
    pub fn from_value(value: serde_json::Value) -> Result<Self, ClassNameError> {
        if value.is_null() {
            return Ok(Self::default());
        }
        let raw: RawNamingConfig = serde_json::from_value(value)?;
        let config = Self::try_from(raw)?;
        debug!(?config, "loaded naming config");
        Ok(config)
    }

    pub fn element_separator(&self) -> &str {
        &self.element_separator
    }

    pub fn state_separator(&self) -> &str {
        &self.state_separator
    }

    /// 组合 element 名：`[prefix, tail]` 中非空的部分用分隔符连接
    pub fn element_name(&self, prefix: &str, tail: &str) -> String {
        match (prefix.is_empty(), tail.is_empty()) {
            (_, true) => prefix.to_string(),
            (true, false) => tail.to_string(),
            (false, false) => format!("{}{}{}", prefix, self.element_separator, tail),
        }
    }

    /// 组合 state 名：element 名 + 分隔符 + state 名
    pub fn state_name(&self, element: &str, state: &str) -> String {
        format!("{}{}{}", element, self.state_separator, state)
    }
}

fn validate_separator(name: &str, separator: &str) -> Result<(), ClassNameError> {
    if separator.is_empty() {
        return Err(ClassNameError::InvalidConfig(format!("{} must not be empty", name)));
    }
    if separator.chars().any(char::is_whitespace) {
        return Err(ClassNameError::InvalidConfig(format!(
            "{} must not contain whitespace, got {:?}",
            name, separator
        )));
    }
    Ok(())
}
