//! 256-bit proof-of-work targets and their canonical hex form.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use log::debug;
use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ConversionError;

/// Number of hex digits in a rendered target.
pub const TARGET_HEX_DIGITS: usize = 64;

/// Width of a target in bits.
pub const TARGET_BITS: u64 = 256;

/// The difficulty-1 target, `0x00000000ffff0000...`.
///
/// Anchors the difficulty to target direction only.
pub const BASE_TARGET: [u8; 32] = [
    0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Dividend for the target to difficulty direction, `0xffff0000...`.
///
/// This is `BASE_TARGET << 32`, so estimates come out in units of the
/// 2^32 hashes a difficulty-1 share takes on average. Kept as its own literal.
pub const HASHES_DIVIDEND: [u8; 32] = [
    0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Whether rendered hex carries a `0x` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexPrefix {
    /// Prepend `0x`.
    Add,
    /// Bare digits.
    Omit,
}

impl HexPrefix {
    /// The literal prefix text.
    pub fn as_str(&self) -> &'static str {
        match self {
            HexPrefix::Add => "0x",
            HexPrefix::Omit => "",
        }
    }
}

impl From<bool> for HexPrefix {
    fn from(add_prefix: bool) -> Self {
        if add_prefix {
            HexPrefix::Add
        } else {
            HexPrefix::Omit
        }
    }
}

impl Default for HexPrefix {
    fn default() -> Self {
        HexPrefix::Omit
    }
}

/// A 256-bit unsigned target. A hash is a valid solution if it is <= the target.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Target(BigUint);

impl Target {
    /// The largest target (all bits set), which accepts any hash.
    pub fn max() -> Self {
        Target(BigUint::from_bytes_be(&[0xff; 32]))
    }

    /// The difficulty-1 target.
    pub fn base() -> Self {
        Target::from_be_bytes(BASE_TARGET)
    }

    /// Build from a 32-byte big-endian array.
    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        Target(BigUint::from_bytes_be(&bytes))
    }

    /// Wrap an arbitrary-precision value, or `None` if it needs more than 256 bits.
    pub fn from_biguint(value: BigUint) -> Option<Self> {
        if value.bits() > TARGET_BITS {
            None
        } else {
            Some(Target(value))
        }
    }

    /// Parse a hex numeral, optionally `0x`-prefixed.
    ///
    /// Digits may be upper or lower case and need not be padded, but the value
    /// must fit in 256 bits.
    pub fn from_hex(s: &str) -> Result<Self, ConversionError> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        // BigUint's parser tolerates `_` separators, so check the alphabet first.
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            debug!("rejecting target {:?}: not a hex numeral", s);
            return Err(ConversionError::InvalidTargetFormat(s.to_string()));
        }

        BigUint::parse_bytes(digits.as_bytes(), 16)
            .and_then(Target::from_biguint)
            .ok_or_else(|| {
                debug!("rejecting target {:?}: wider than 256 bits", s);
                ConversionError::InvalidTargetFormat(s.to_string())
            })
    }

    /// Render as exactly 64 lowercase hex digits, zero-padded on the left.
    pub fn to_hex(&self, prefix: HexPrefix) -> String {
        let digits = self.0.to_str_radix(16);
        alloc::format!("{}{:0>width$}", prefix.as_str(), digits, width = TARGET_HEX_DIGITS)
    }

    /// 32-byte big-endian representation.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        let bytes = self.0.to_bytes_be();
        let mut out = [0u8; 32];
        out[32 - bytes.len()..].copy_from_slice(&bytes);
        out
    }

    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check a big-endian hash against this target.
    pub fn is_met_by(&self, hash: &[u8; 32]) -> bool {
        hash_meets_target(hash, &self.to_be_bytes())
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex(HexPrefix::Add))
    }
}

impl FromStr for Target {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Target::from_hex(s)
    }
}

impl Serialize for Target {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex(HexPrefix::Add))
    }
}

impl<'de> Deserialize<'de> for Target {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Target::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Check if a hash meets the target.
///
/// Both are 32-byte big-endian numbers; equality counts as meeting it.
#[inline]
pub fn hash_meets_target(hash: &[u8; 32], target: &[u8; 32]) -> bool {
    hash <= target
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_target_hex() {
        let max = Target::max();
        assert_eq!(max.to_hex(HexPrefix::Omit), "f".repeat(64));
        assert_eq!(max.to_hex(HexPrefix::Add), alloc::format!("0x{}", "f".repeat(64)));
        assert_eq!(max.as_biguint().bits(), 256);
    }

    #[test]
    fn test_base_target_hex() {
        assert_eq!(
            Target::base().to_hex(HexPrefix::Omit),
            "00000000ffff0000000000000000000000000000000000000000000000000000"
        );
    }

    #[test]
    fn test_small_values_are_zero_padded() {
        let one = Target::from_hex("1").unwrap();
        let hex = one.to_hex(HexPrefix::Omit);
        assert_eq!(hex.len(), 64);
        assert!(hex.ends_with("01"));
        assert!(hex[..63].chars().all(|c| c == '0'));

        let zero = Target::from_hex("0x0").unwrap();
        assert!(zero.is_zero());
        assert_eq!(zero.to_hex(HexPrefix::Omit), "0".repeat(64));
    }

    #[test]
    fn test_from_hex_accepts_prefix_and_upper_case() {
        let lower = Target::from_hex("00000000ffff0000000000000000000000000000000000000000000000000000").unwrap();
        let upper = Target::from_hex("0X00000000FFFF0000000000000000000000000000000000000000000000000000").unwrap();
        assert_eq!(lower, Target::base());
        assert_eq!(upper, Target::base());
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        for bad in ["", "0x", "zz", "ff_ff", "0xg1", " ff"] {
            assert_eq!(
                Target::from_hex(bad),
                Err(ConversionError::InvalidTargetFormat(bad.to_string())),
                "{:?} should be rejected",
                bad
            );
        }

        // 65 significant digits is wider than 256 bits
        let wide = alloc::format!("1{}", "0".repeat(64));
        assert!(matches!(
            Target::from_hex(&wide),
            Err(ConversionError::InvalidTargetFormat(_))
        ));

        // Leading zeros beyond 64 digits are fine
        let padded = alloc::format!("00{}", "f".repeat(64));
        assert_eq!(Target::from_hex(&padded).unwrap(), Target::max());
    }

    #[test]
    fn test_from_biguint_checks_width() {
        assert!(Target::from_biguint(BigUint::from(1u8) << 255u32).is_some());
        assert!(Target::from_biguint(BigUint::from(1u8) << 256u32).is_none());
    }

    #[test]
    fn test_be_bytes_roundtrip() {
        let target = Target::base();
        let bytes = target.to_be_bytes();
        assert_eq!(bytes, BASE_TARGET);
        assert_eq!(Target::from_be_bytes(bytes), target);
        assert_eq!(Target::from_hex("0").unwrap().to_be_bytes(), [0u8; 32]);
    }

    #[test]
    fn test_hash_meets_target() {
        let target = Target::base();

        // A hash with 4 leading zero bytes passes the difficulty-1 target
        let mut good_hash = [0u8; 32];
        good_hash[4] = 0x12;
        good_hash[5] = 0x34;
        assert!(target.is_met_by(&good_hash));

        // Equal to the target still qualifies
        assert!(target.is_met_by(&BASE_TARGET));

        let mut bad_hash = [0u8; 32];
        bad_hash[3] = 0x01;
        assert!(!target.is_met_by(&bad_hash));

        // Anything meets the maximum target
        assert!(Target::max().is_met_by(&[0xff; 32]));
    }

    #[test]
    fn test_hex_prefix_from_flag() {
        assert_eq!(HexPrefix::from(true), HexPrefix::Add);
        assert_eq!(HexPrefix::from(false), HexPrefix::Omit);
        assert_eq!(HexPrefix::default(), HexPrefix::Omit);
    }

    #[test]
    fn test_display_and_from_str() {
        let target: Target = "ffff".parse().unwrap();
        assert_eq!(
            target.to_string(),
            "0x000000000000000000000000000000000000000000000000000000000000ffff"
        );
    }

    #[test]
    fn test_serde_json() {
        let json = serde_json::to_string(&Target::base()).unwrap();
        assert_eq!(
            json,
            "\"0x00000000ffff0000000000000000000000000000000000000000000000000000\""
        );
        let back: Target = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Target::base());

        assert!(serde_json::from_str::<Target>("\"0xnothex\"").is_err());
    }
}
