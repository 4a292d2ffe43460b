use serde_json::Value;
use wasm_bindgen::prelude::*;

use classnamer_core::{
    build_from_json, json::prefixes_from_json, ClassNamer as RsClassNamer, NamingConfig,
    StateFlags,
};

// ── JS 值转换 ────────────────────────────────────────────────

/// `undefined` / `null` 统一视为 JSON `null`
fn to_json(value: JsValue, argument: &str) -> Result<Value, JsError> {
    if value.is_undefined() || value.is_null() {
        return Ok(Value::Null);
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsError::new(&format!("Invalid {}: {}", argument, e)))
}

fn parse_config(config: JsValue) -> Result<NamingConfig, JsError> {
    let value = to_json(config, "config")?;
    Ok(NamingConfig::from_value(value)?)
}

// ── WASM 导出函数 ─────────────────────────────────────────────

/// 初始化 panic hook（自动调用）
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// 生成类名
///
/// @param prefixes - 类名根数组，元素为字符串或 null
/// @param tail     - element 名，可选
/// @param states   - `{ [state]: boolean }`，可选，值按 JS 真值判断
/// @returns 以空格分隔的类名
#[wasm_bindgen(js_name = "build")]
pub fn build(prefixes: JsValue, tail: Option<String>, states: JsValue) -> Result<String, JsError> {
    let prefixes = to_json(prefixes, "prefixes")?;
    let states = to_json(states, "states")?;
    Ok(build_from_json(
        &prefixes,
        tail.as_deref(),
        &states,
        &NamingConfig::default(),
    )?)
}

/// 固定 prefix 的生成器，对应 `build(prefixes)` 的部分应用
///
/// ```js
/// const card = new ClassNamer(['Card', props.className]);
/// card.build('actions', { active: true });
/// ```
#[wasm_bindgen(js_name = "ClassNamer")]
pub struct JsClassNamer {
    inner: RsClassNamer,
}

#[wasm_bindgen(js_class = "ClassNamer")]
impl JsClassNamer {
    /// @param prefixes - 类名根数组
    /// @param config   - `{ elementSeparator?, stateSeparator? }`，可选
    #[wasm_bindgen(constructor)]
    pub fn new(prefixes: JsValue, config: JsValue) -> Result<JsClassNamer, JsError> {
        let prefixes = prefixes_from_json(&to_json(prefixes, "prefixes")?)?;
        let config = parse_config(config)?;
        Ok(JsClassNamer {
            inner: RsClassNamer::with_config(prefixes, config),
        })
    }

    /// 规范化后的 prefix
    #[wasm_bindgen(getter)]
    pub fn prefixes(&self) -> Vec<String> {
        self.inner.prefixes().to_vec()
    }

    pub fn build(&self, tail: Option<String>, states: JsValue) -> Result<String, JsError> {
        let states = StateFlags::from_json(&to_json(states, "states")?)?;
        Ok(self
            .inner
            .build_with(tail.as_deref().unwrap_or_default(), &states))
    }
}
