//! Difficulty <-> target conversion.
//!
//! The forward direction never multiplies the 256-bit base by a float. The
//! reciprocal of the difficulty is rendered as a decimal string, and its integer
//! and fractional digits are applied to the base as an exact rational with a
//! single truncating division at the end.

use alloc::string::{String, ToString};

use log::{debug, trace};
use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::error::ConversionError;
use crate::target::{HexPrefix, Target, HASHES_DIVIDEND};

/// Convert a difficulty to its canonical 64-digit hex target.
///
/// A difficulty of zero yields the maximum target (every hash qualifies).
pub fn difficulty_to_target(difficulty: f64, prefix: HexPrefix) -> Result<String, ConversionError> {
    Target::from_difficulty(difficulty).map(|target| target.to_hex(prefix))
}

/// Estimate the difficulty a hex target corresponds to.
///
/// Computed as `HASHES_DIVIDEND / target` in integers, then converted to `f64`.
/// Because the dividend is the base target shifted up by 32 bits, the result
/// for `difficulty_to_target(d)` is roughly `d * 2^32`.
pub fn target_to_difficulty_estimate(target: &str) -> Result<f64, ConversionError> {
    Target::from_hex(target)?.difficulty_estimate()
}

impl Target {
    /// Compute the target for `difficulty`.
    pub fn from_difficulty(difficulty: f64) -> Result<Self, ConversionError> {
        if !difficulty.is_finite() || difficulty < 0.0 {
            debug!("rejecting difficulty {}", difficulty);
            return Err(ConversionError::InvalidDifficulty(difficulty));
        }

        if difficulty == 0.0 {
            return Ok(Target::max());
        }

        let reciprocal = 1.0 / difficulty;
        if !reciprocal.is_finite() {
            // Subnormal difficulties
            return Err(ConversionError::TargetOverflow(difficulty));
        }

        let rendered = reciprocal.to_string();
        trace!("difficulty {} -> reciprocal {}", difficulty, rendered);

        let value = scale_by_decimal(Target::base().as_biguint(), &rendered)
            .ok_or(ConversionError::InvalidDifficulty(difficulty))?;

        Target::from_biguint(value).ok_or_else(|| {
            debug!("difficulty {} gives a target wider than 256 bits", difficulty);
            ConversionError::TargetOverflow(difficulty)
        })
    }

    /// Estimate the difficulty of this target. Fails on a zero target.
    pub fn difficulty_estimate(&self) -> Result<f64, ConversionError> {
        if self.is_zero() {
            return Err(ConversionError::DivisionByZero);
        }

        let dividend = BigUint::from_bytes_be(&HASHES_DIVIDEND);
        let quotient = dividend / self.as_biguint();
        Ok(quotient.to_f64().unwrap_or(f64::INFINITY))
    }
}

/// Multiply `base` by the non-negative decimal numeral `decimal`, truncating.
///
/// `decimal` is `digits` or `digits.digits`. The fractional digits are read with
/// leading zeros stripped, but the scale `10^n` uses the unstripped count `n`,
/// so `"0.05"` contributes `base * 5 / 100`.
///
/// Returns `None` if either part is not made of decimal digits.
pub(crate) fn scale_by_decimal(base: &BigUint, decimal: &str) -> Option<BigUint> {
    let (integer_digits, fraction_digits) = match decimal.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (decimal, None),
    };

    let mut product = base * parse_decimal(integer_digits)?;

    if let Some(fraction) = fraction_digits {
        let precision = u32::try_from(fraction.len()).ok()?;
        // Strip for parsing only; the scale keeps the original digit count.
        let stripped = fraction.trim_start_matches('0');

        // An all-zero fraction adds nothing.
        if !stripped.is_empty() {
            let numerator = parse_decimal(stripped)?;
            let denominator = BigUint::from(10u32).pow(precision);
            product += base * numerator / denominator;
        }
    }

    Some(product)
}

fn parse_decimal(digits: &str) -> Option<BigUint> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    BigUint::parse_bytes(digits.as_bytes(), 10)
}
