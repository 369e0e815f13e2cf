//! WASM bindings for slot-engine.
//!
//! Exposes candidate filtering, merging and formatting to the scheduling UI via
//! `wasm-bindgen`. All complex values cross the boundary as JSON strings:
//!
//! - candidates: the service response (`{"comon_availability": [...]}`) or a
//!   bare array of `[start, end]` pairs
//! - settings: `{"minTime": "09:00", "maxTime": "18:00", "weekdays": ["月"], "locale": "ja"}`,
//!   every field optional (see `slot_engine::EngineConfig`)
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir web/wasm/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```

use serde::Serialize;
use slot_engine::format::format_raw;
use slot_engine::{
    candidates_from_json, export_text, filter_and_sort, process, to_pairs, EngineConfig, Locale,
    RawInterval,
};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Helpers: JSON in, JSON out, errors as plain strings
// ---------------------------------------------------------------------------

fn parse_candidates(json: &str) -> Result<Vec<RawInterval>, String> {
    candidates_from_json(json).map_err(|e| e.to_string())
}

/// An empty settings string means "use the form defaults".
fn parse_config(json: &str) -> Result<EngineConfig, String> {
    if json.trim().is_empty() {
        return Ok(EngineConfig::default());
    }
    EngineConfig::from_json(json).map_err(|e| format!("Invalid settings JSON: {}", e))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

fn filter_impl(candidates_json: &str, config_json: &str) -> Result<String, String> {
    let raw = parse_candidates(candidates_json)?;
    let constraint = parse_config(config_json)?
        .constraint()
        .map_err(|e| e.to_string())?;
    to_json(&to_pairs(&filter_and_sort(&raw, &constraint)))
}

fn merge_impl(candidates_json: &str, config_json: &str) -> Result<String, String> {
    let raw = parse_candidates(candidates_json)?;
    let constraint = parse_config(config_json)?
        .constraint()
        .map_err(|e| e.to_string())?;
    to_json(&process(&raw, &constraint))
}

fn format_impl(candidates_json: &str, locale: &str) -> Result<String, String> {
    let raw = parse_candidates(candidates_json)?;
    let locale: Locale = locale.parse()?;
    let lines: Vec<String> = raw.iter().map(|entry| format_raw(entry, locale)).collect();
    to_json(&lines)
}

fn export_impl(candidates_json: &str, config_json: &str) -> Result<String, String> {
    let raw = parse_candidates(candidates_json)?;
    let config = parse_config(config_json)?;
    let constraint = config.constraint().map_err(|e| e.to_string())?;
    let slots = if config.merge {
        process(&raw, &constraint).slots
    } else {
        filter_and_sort(&raw, &constraint)
    };
    Ok(export_text(&slots, config.locale))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Filter candidates against the settings, sorted but not merged.
///
/// Returns a JSON array of `[start, end]` pairs.
#[wasm_bindgen(js_name = "filterCandidates")]
pub fn filter_candidates(candidates_json: &str, settings_json: &str) -> Result<String, JsValue> {
    filter_impl(candidates_json, settings_json).map_err(|e| JsValue::from_str(&e))
}

/// Filter, merge per day, and sort.
///
/// Returns the JSON report `{slots, inputCount, rejected, mergedAway}`, where
/// `slots` is an array of `[start, end]` pairs.
#[wasm_bindgen(js_name = "mergeCandidates")]
pub fn merge_candidates(candidates_json: &str, settings_json: &str) -> Result<String, JsValue> {
    merge_impl(candidates_json, settings_json).map_err(|e| JsValue::from_str(&e))
}

/// Render each entry for display without filtering.
///
/// Returns a JSON array of strings; unparsable entries are shown verbatim.
/// `locale` is `"en"` or `"ja"`.
#[wasm_bindgen(js_name = "formatCandidates")]
pub fn format_candidates(candidates_json: &str, locale: &str) -> Result<String, JsValue> {
    format_impl(candidates_json, locale).map_err(|e| JsValue::from_str(&e))
}

/// Copy-button text: one line per resulting slot, empty when nothing passes.
#[wasm_bindgen(js_name = "exportCandidates")]
pub fn export_candidates(candidates_json: &str, settings_json: &str) -> Result<String, JsValue> {
    export_impl(candidates_json, settings_json).map_err(|e| JsValue::from_str(&e))
}
