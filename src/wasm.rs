//! WebAssembly bindings.
//!
//! Exposes the process-wide registry to JavaScript hosts. Configurations are
//! plain JS objects shaped like the generated `IconConfig` TypeScript type.
//!
//! # Feature Flag
//!
//! Only available with the `tsify` feature enabled.
//!
//! # Example (JavaScript/TypeScript)
//!
//! ```javascript
//! import init, { renderIcon, iconKeys } from 'facility-icons';
//!
//! await init();
//!
//! for (const key of iconKeys()) {
//!     palette.innerHTML += renderIcon(key, { size: 24 });
//! }
//!
//! alarm.innerHTML = renderIcon('FireAlarm', { color: '#ff0000', size: 64 });
//! ```

use wasm_bindgen::prelude::*;

use crate::config::IconConfig;
use crate::registry;

/// Renders the icon registered under `key` to SVG markup.
///
/// `config` may be `undefined`/`null` for the defaults. Unknown keys render
/// the placeholder glyph.
#[wasm_bindgen(js_name = "renderIcon")]
pub fn render_icon(key: &str, config: JsValue) -> Result<String, JsError> {
    let config: IconConfig = if config.is_undefined() || config.is_null() {
        IconConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsError::new(&format!("Invalid icon config: {}", e)))?
    };

    let registry = registry::try_global()
        .map_err(|e| JsError::new(&format!("Icon catalog unavailable: {}", e)))?;
    let renderer = registry
        .lookup(key)
        .map_err(|e| JsError::new(&e.to_string()))?;

    Ok(renderer.render_svg(&config))
}

/// Returns every catalog key.
#[wasm_bindgen(js_name = "iconKeys")]
pub fn icon_keys() -> Result<Vec<String>, JsError> {
    let registry = registry::try_global()
        .map_err(|e| JsError::new(&format!("Icon catalog unavailable: {}", e)))?;
    Ok(registry.keys().map(str::to_string).collect())
}
