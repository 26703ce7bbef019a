//! Summary records handed to JS.

use powtarget_core::{ConversionError, HexPrefix, Target};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// A difficulty together with its target, for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetInfo {
    /// Difficulty as given.
    pub difficulty: f64,
    /// Target, serialized as `0x`-prefixed hex.
    pub target: Target,
    /// Target without prefix.
    pub target_hex: String,
    /// Estimate recovered from the target. `None` for a zero target.
    pub estimate: Option<f64>,
}

impl TargetInfo {
    /// Build the record for `difficulty`.
    pub fn from_difficulty(difficulty: f64) -> Result<Self, ConversionError> {
        let target = Target::from_difficulty(difficulty)?;
        Ok(TargetInfo {
            difficulty,
            target_hex: target.to_hex(HexPrefix::Omit),
            estimate: target.difficulty_estimate().ok(),
            target,
        })
    }

    /// Convert to JS value.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
    }
}
