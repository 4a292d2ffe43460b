//! 动态输入（JSON / JS 值）到强类型输入的转换
//!
//! - prefixes：`null` 视为空列表；数组元素只能是字符串或 `null`；单个字符串视为一个元素
//! - states：`null` 视为空；对象的值按 JavaScript 真值规则转为 bool
//! - 其他形状一律返回 [`ClassNameError::InvalidArgument`]

use crate::build::ClassNamer;
use crate::error::ClassNameError;
use crate::naming::NamingConfig;
use crate::types::StateFlags;
use serde_json::Value;
use tracing::warn;

/// JavaScript 真值规则
///
/// `false`、`0`、`-0`、`""`、`null` 为假，其余（包括 `[]`、`{}`）为真。
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub fn prefixes_from_json(value: &Value) -> Result<Vec<Option<String>>, ClassNameError> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::String(s) => Ok(vec![Some(s.clone())]),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::Null => Ok(None),
                Value::String(s) => Ok(Some(s.clone())),
                other => Err(reject(
                    "prefixes",
                    format!("entry {} must be a string or null, got {}", i, kind_of(other)),
                )),
            })
            .collect(),
        other => Err(reject(
            "prefixes",
            format!("expected an array of strings, got {}", kind_of(other)),
        )),
    }
}

impl StateFlags {
    /// 从 JSON 对象构造，值按 [`is_truthy`] 转换
    pub fn from_json(value: &Value) -> Result<Self, ClassNameError> {
        match value {
            Value::Null => Ok(StateFlags::new()),
            Value::Object(map) => Ok(map
                .iter()
                .map(|(name, flag)| (name.as_str(), is_truthy(flag)))
                .collect()),
            other => Err(reject(
                "states",
                format!("expected an object, got {}", kind_of(other)),
            )),
        }
    }
}

/// 动态输入版本的 build
pub fn build_from_json(
    prefixes: &Value,
    tail: Option<&str>,
    states: &Value,
    config: &NamingConfig,
) -> Result<String, ClassNameError> {
    let prefixes = prefixes_from_json(prefixes)?;
    let states = StateFlags::from_json(states)?;
    let namer = ClassNamer::with_config(prefixes, config.clone());
    Ok(namer.build_with(tail.unwrap_or_default(), &states))
}

fn reject(argument: &'static str, reason: String) -> ClassNameError {
    warn!(argument, %reason, "rejected dynamic input");
    ClassNameError::invalid_argument(argument, reason)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_truthiness() {
        for falsy in [json!(false), json!(0), json!(0.0), json!(-0.0), json!(""), Value::Null] {
            assert!(!is_truthy(&falsy), "{} should be falsy", falsy);
        }
        for truthy in [json!(true), json!(1), json!(-2.5), json!("no"), json!([]), json!({})] {
            assert!(is_truthy(&truthy), "{} should be truthy", truthy);
        }
    }

    #[test]
    fn test_prefixes_from_json() {
        let prefixes = prefixes_from_json(&json!(["root", null, "foo bar"])).unwrap();
        assert_eq!(
            prefixes,
            vec![Some("root".to_string()), None, Some("foo bar".to_string())]
        );
    }

    #[test]
    fn test_prefixes_from_json_null_and_string() {
        assert!(prefixes_from_json(&Value::Null).unwrap().is_empty());
        assert_eq!(
            prefixes_from_json(&json!("root")).unwrap(),
            vec![Some("root".to_string())]
        );
    }

    #[test]
    fn test_prefixes_from_json_rejects_number_entry() {
        let err = prefixes_from_json(&json!(["root", 42])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid argument `prefixes`: entry 1 must be a string or null, got number"
        );
    }

    #[test]
    fn test_prefixes_from_json_rejects_object() {
        let err = prefixes_from_json(&json!({ "root": true })).unwrap_err();
        assert!(matches!(
            err,
            ClassNameError::InvalidArgument {
                argument: "prefixes",
                ..
            }
        ));
    }

    #[test]
    fn test_states_from_json_coerces_values() {
        let states = StateFlags::from_json(&json!({
            "is-loading": 1,
            "is-empty": "",
            "is-open": true,
            "is-hidden": null
        }))
        .unwrap();
        let active: Vec<&str> = states.active().collect();
        assert_eq!(active, vec!["is-loading", "is-open"]);
    }

    #[test]
    fn test_states_from_json_rejects_array() {
        let err = StateFlags::from_json(&json!(["is-loading"])).unwrap_err();
        assert!(err.to_string().contains("expected an object, got array"));
    }

    #[test]
    fn test_build_from_json() {
        let classes = build_from_json(
            &json!(["root", "foo bar"]),
            None,
            &json!({ "is-loading": true }),
            &NamingConfig::default(),
        )
        .unwrap();
        assert_eq!(
            classes,
            "root root-is-loading foo foo-is-loading bar bar-is-loading"
        );
    }

    #[test]
    fn test_build_from_json_all_absent() {
        let classes =
            build_from_json(&Value::Null, None, &Value::Null, &NamingConfig::default()).unwrap();
        assert_eq!(classes, "");
    }
}
