//! WASM bindings for gridfill
//!
//! This module provides JavaScript-accessible functions for filling grids
//! in the browser. The page supplies the decoded file text once; the fill
//! runs synchronously and hands the rendered text back.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use crate::{fill_text_with_diagnostics, FillOptions, UnfillablePolicy};

/// Fill options (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize, Default)]
pub struct FillTextOptions {
    /// Fail instead of keeping unfillable cells
    #[serde(default)]
    pub strict: bool,
    /// Sentinel value written for unfillable cells (overrides `strict`)
    #[serde(default)]
    pub sentinel: Option<i64>,
}

/// Fill result with additional metadata
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct FillResultJs {
    /// The filled grid text
    pub output: String,
    /// Whether the fill was successful
    pub success: bool,
    /// Error message if the fill failed
    pub error: Option<String>,
    /// Warnings produced during the fill
    pub warnings: Vec<String>,
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Fill a grid supplied as text
///
/// # Arguments
/// * `input` - grid text (lines of integers, each followed by a space or comma)
///
/// # Returns
/// The filled grid text; unfillable cells keep their original `0`
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "fillText")]
pub fn fill_text_wasm(input: &str) -> String {
    crate::fill_text(input)
}

/// Fill a grid with options, returning output plus metadata
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "fillTextChecked")]
pub fn fill_text_checked_wasm(input: &str, options: JsValue) -> JsValue {
    let opts: FillTextOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();

    let fill_opts = match (opts.sentinel, opts.strict) {
        (Some(value), _) => FillOptions {
            on_unfillable: UnfillablePolicy::Sentinel(value),
        },
        (None, true) => FillOptions::strict(),
        (None, false) => FillOptions::default(),
    };

    let result = match fill_text_with_diagnostics(input, &fill_opts) {
        Ok(out) => FillResultJs {
            output: out.content,
            success: true,
            error: None,
            warnings: out.warnings.iter().map(|w| w.to_string()).collect(),
        },
        Err(err) => FillResultJs {
            output: String::new(),
            success: false,
            error: Some(err.to_string()),
            warnings: vec![],
        },
    };

    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}
