//! Hex decoding for raw target bytes and string escaping for log output.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use crate::error::ConversionError;
use crate::target::HexPrefix;

/// What `from_hex` does with malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhenError {
    /// Return the error.
    Fail,
    /// Return an empty buffer instead.
    ReturnEmpty,
}

/// Decode a hex string, optionally `0x`-prefixed, into bytes.
///
/// An odd number of digits is accepted: the first digit becomes a byte of its
/// own, so `"fff"` decodes to `[0x0f, 0xff]`.
pub fn from_hex(s: &str, on_error: WhenError) -> Result<Vec<u8>, ConversionError> {
    match decode_hex(s) {
        Ok(bytes) => Ok(bytes),
        Err(_) if on_error == WhenError::ReturnEmpty => Ok(Vec::new()),
        Err(e) => Err(e),
    }
}

fn decode_hex(s: &str) -> Result<Vec<u8>, ConversionError> {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    let mut out = Vec::with_capacity((digits.len() + 1) / 2);

    let rest = match digits.chars().next() {
        Some(first) if digits.len() % 2 == 1 => {
            let nibble = first
                .to_digit(16)
                .ok_or(ConversionError::BadHexCharacter(first))?;
            out.push(nibble as u8);
            &digits[first.len_utf8()..]
        }
        _ => digits,
    };

    let decoded = hex::decode(rest).map_err(ConversionError::InvalidHex)?;
    out.extend_from_slice(&decoded);
    Ok(out)
}

/// Encode bytes as lowercase hex.
pub fn to_hex(bytes: &[u8], prefix: HexPrefix) -> String {
    let mut out = String::with_capacity(prefix.as_str().len() + bytes.len() * 2);
    out.push_str(prefix.as_str());
    out.push_str(&hex::encode(bytes));
    out
}

/// Quote `s` for logging.
///
/// Quotes, backslashes and `\r \n \t \v` get C-style escapes; any other
/// control or non-ASCII byte becomes `\xNN`. With `all` set, every byte is
/// written as `\xNN`.
pub fn escaped(s: &str, all: bool) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for b in s.bytes() {
        match b {
            b'"' if !all => out.push_str("\\\""),
            b'\\' if !all => out.push_str("\\\\"),
            b'\r' if !all => out.push_str("\\r"),
            b'\n' if !all => out.push_str("\\n"),
            b'\t' if !all => out.push_str("\\t"),
            0x0b if !all => out.push_str("\\v"),
            b if all || b < b' ' || b >= 0x80 => {
                let _ = write!(out, "\\x{:02x}", b);
            }
            b => out.push(b as char),
        }
    }
    out.push('"');
    out
}
