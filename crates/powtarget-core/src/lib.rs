//! Proof-of-work difficulty and target conversion.
//!
//! This crate provides pure Rust implementations of:
//! - Difficulty to 64-digit hex target conversion, exact to 256 bits
//! - Target to difficulty estimation
//! - Hash vs. target comparison
//! - Hex decoding of raw target bytes and escaping for log output
//! - Hash rate formatting

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod difficulty;
pub mod encoding;
pub mod error;
pub mod hashrate;
pub mod target;

pub use difficulty::{difficulty_to_target, target_to_difficulty_estimate};
pub use encoding::{escaped, from_hex, to_hex, WhenError};
pub use error::ConversionError;
pub use hashrate::format_hashrate;
pub use target::{hash_meets_target, HexPrefix, Target, BASE_TARGET, HASHES_DIVIDEND};
