//! WASM bindings for texfrag
//!
//! This module provides JavaScript-accessible functions for rendering LaTeX
//! fragments. Tables are passed as JSON arrays of records.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use crate::{FrameTableOptions, TabularData};

/// Frame table options (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct FrameConvertOptions {
    /// Emit the index as a leading column
    #[serde(default = "default_true")]
    pub include_index: bool,
    /// Use a full-width tabularx with X columns
    #[serde(default)]
    pub flex_cols: bool,
    /// Decimal places for float cells
    #[serde(default = "default_precision")]
    pub float_precision: usize,
}

#[cfg(feature = "wasm")]
impl Default for FrameConvertOptions {
    fn default() -> Self {
        Self {
            include_index: true,
            flex_cols: false,
            float_precision: default_precision(),
        }
    }
}

#[cfg(feature = "wasm")]
fn default_true() -> bool {
    true
}

#[cfg(feature = "wasm")]
fn default_precision() -> usize {
    5
}

/// Render result with additional metadata
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered LaTeX
    pub output: String,
    /// Whether rendering succeeded
    pub success: bool,
    /// Error message if rendering failed
    pub error: Option<String>,
}

#[cfg(feature = "wasm")]
impl RenderResult {
    fn from_result(result: crate::Result<String>) -> Self {
        match result {
            Ok(output) => RenderResult {
                output,
                success: true,
                error: None,
            },
            Err(e) => RenderResult {
                output: String::new(),
                success: false,
                error: Some(e.to_string()),
            },
        }
    }

    fn into_js(self) -> JsValue {
        serde_wasm_bindgen::to_value(&self).unwrap_or(JsValue::NULL)
    }
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Escape LaTeX special characters
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "escapeLatex")]
pub fn escape_latex_wasm(input: &str) -> String {
    crate::escape_latex(input)
}

/// Render a figure for an image path
///
/// # Arguments
/// * `image_path` - Path used verbatim in `\includegraphics`
/// * `width` - LaTeX width; empty for the full text width
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "renderFigure")]
pub fn render_figure_wasm(image_path: &str, width: &str) -> String {
    let width = if width.trim().is_empty() {
        crate::DEFAULT_IMAGE_WIDTH
    } else {
        width
    };
    crate::render_figure(image_path, width)
}

/// Render an explicit-column table from JSON records
///
/// # Arguments
/// * `records_json` - JSON array of objects
/// * `columns` - Column names, in output order
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "renderTable")]
pub fn render_table_wasm(
    records_json: &str,
    caption: &str,
    label: &str,
    columns: Vec<String>,
) -> JsValue {
    let result = TabularData::from_json_str(records_json)
        .and_then(|data| crate::render_table(&data, caption, label, columns.as_slice()));
    RenderResult::from_result(result).into_js()
}

/// Render a frame table from JSON records
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "renderTableFromFrame")]
pub fn render_table_from_frame_wasm(records_json: &str, caption: &str, options: JsValue) -> JsValue {
    let opts: FrameConvertOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();
    let frame_opts = FrameTableOptions {
        include_index: opts.include_index,
        flex_cols: opts.flex_cols,
        float_precision: opts.float_precision,
        ..Default::default()
    };

    let result = TabularData::from_json_str(records_json).map(|data| {
        crate::render_table_from_frame_with_options(&data, caption, &frame_opts)
    });
    RenderResult::from_result(result).into_js()
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
