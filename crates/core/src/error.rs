use thiserror::Error;

/// 类名构建错误
///
/// 强类型入口（`build`、`ClassNamer`）不会失败；
/// 只有动态输入（JSON / JS 值）与配置加载会返回该错误。
#[derive(Debug, Error)]
pub enum ClassNameError {
    /// 动态输入的形状不对（如 prefixes 不是数组、states 不是对象）
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: String,
    },

    /// 分隔符为空或包含空白
    #[error("invalid naming config: {0}")]
    InvalidConfig(String),

    /// 配置 JSON 语法错误
    #[error("failed to parse naming config: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClassNameError {
    pub fn invalid_argument(argument: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }
}
