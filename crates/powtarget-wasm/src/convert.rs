//! JS entry points for the conversions.

use log::debug;
use powtarget_core::{ConversionError, HexPrefix, Target};
use wasm_bindgen::prelude::*;

use crate::info::TargetInfo;

fn to_js_error(err: ConversionError) -> JsValue {
    debug!("conversion failed: {}", err);
    js_sys::Error::new(&err.to_string()).into()
}

/// Convert a difficulty to a 64-digit hex target.
#[wasm_bindgen(js_name = difficultyToTarget)]
pub fn difficulty_to_target(difficulty: f64, add_prefix: bool) -> Result<String, JsValue> {
    powtarget_core::difficulty_to_target(difficulty, HexPrefix::from(add_prefix)).map_err(to_js_error)
}

/// Estimate the difficulty of a hex target.
#[wasm_bindgen(js_name = targetToDifficultyEstimate)]
pub fn target_to_difficulty_estimate(target: &str) -> Result<f64, JsValue> {
    powtarget_core::target_to_difficulty_estimate(target).map_err(to_js_error)
}

/// Check a big-endian hex hash against a hex target.
#[wasm_bindgen(js_name = hashMeetsTarget)]
pub fn hash_meets_target(hash: &str, target: &str) -> Result<bool, JsValue> {
    let hash = Target::from_hex(hash).map_err(to_js_error)?;
    let target = Target::from_hex(target).map_err(to_js_error)?;
    Ok(target.is_met_by(&hash.to_be_bytes()))
}

/// Format a hash rate, e.g. `"12.35 Mh"`.
#[wasm_bindgen(js_name = formatHashrate)]
pub fn format_hashrate(rate: f64) -> String {
    powtarget_core::format_hashrate(rate)
}

/// Describe a difficulty as a `TargetInfo` object.
#[wasm_bindgen(js_name = describeDifficulty)]
pub fn describe_difficulty(difficulty: f64) -> Result<JsValue, JsValue> {
    TargetInfo::from_difficulty(difficulty)
        .map_err(to_js_error)?
        .to_js()
}
