//! WebAssembly bindings for proof-of-work difficulty/target conversion.
//!
//! This crate provides JavaScript-accessible APIs for:
//! - Converting share difficulty to a hex target and back
//! - Checking hashes against a target
//! - Formatting hash rates for display

use wasm_bindgen::prelude::*;

pub mod convert;
pub mod info;
pub mod logger;

// Re-export main types for JS access
pub use convert::{difficulty_to_target, hash_meets_target, target_to_difficulty_estimate};
pub use info::TargetInfo;

/// Initialize the WASM module with better panic messages and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    logger::init(log::LevelFilter::Info);
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
