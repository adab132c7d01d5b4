//! Field values: fixed-point numerics and packed text.
//!
//! The value word of a field is one of two things, and the wire does not
//! say which: a non-negative fixed-point number with one implied decimal
//! digit, or up to three characters packed exactly like a field name.
//! The field's *name* decides the interpretation, via configuration the
//! caller supplies out-of-band.

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_NUMERIC_VALUE, MAX_PACKED_CHARS, NUMERIC_SCALE};
use crate::error::{CodecError, CodecResult};
use crate::name::NameCode;

/// A decoded field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A numeric reading (tenths resolution, 0.0 to 6553.5).
    Numeric(f64),
    /// A short text value (0-3 characters).
    Text(String),
}

impl FieldValue {
    /// The numeric reading, if this is one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Numeric(v) => Some(*v),
            FieldValue::Text(_) => None,
        }
    }

    /// The text value, if this is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(v) => Some(v),
            FieldValue::Numeric(_) => None,
        }
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Numeric(v) => write!(f, "{}", v),
            FieldValue::Text(v) => write!(f, "{}", v),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Numeric(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

/// Decode a numeric value word.
///
/// Total: the full 16-bit range is valid.
pub fn decode_numeric(word: u16) -> f64 {
    word as f64 / NUMERIC_SCALE
}

/// Encode a numeric reading.
///
/// The value is rounded to the nearest tenth before packing; the wire
/// carries no finer resolution. Fails with [`CodecError::OutOfRange`]
/// below 0.0 or above 6553.5 (there is no sign bit; negative readings are
/// not representable).
pub fn encode_numeric(value: f64) -> CodecResult<u16> {
    if !(0.0..=MAX_NUMERIC_VALUE).contains(&value) {
        return Err(CodecError::OutOfRange { value });
    }
    Ok((value * NUMERIC_SCALE).round() as u16)
}

/// Decode a text value word. Same algorithm as name decoding.
pub fn decode_text(word: u16) -> String {
    NameCode::new(word).decode()
}

/// Encode a text value of up to three packable characters.
pub fn encode_text(text: &str) -> CodecResult<u16> {
    if text.chars().count() > MAX_PACKED_CHARS {
        return Err(CodecError::TextTooLong {
            text: text.to_string(),
        });
    }
    Ok(NameCode::encode(text)?.value())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_numeric_scale() {
        assert_eq!(decode_numeric(90), 9.0);
        assert_eq!(decode_numeric(334), 33.4);
        assert_eq!(decode_numeric(360), 36.0);
    }

    #[test]
    fn test_numeric_boundaries() {
        assert_eq!(decode_numeric(0), 0.0);
        assert_eq!(decode_numeric(65535), 6553.5);
        assert_eq!(encode_numeric(0.0).unwrap(), 0);
        assert_eq!(encode_numeric(6553.5).unwrap(), 65535);
    }

    #[test]
    fn test_encode_numeric() {
        assert_eq!(encode_numeric(33.4).unwrap(), 334);
        assert_eq!(encode_numeric(9.0).unwrap(), 90);
    }

    #[test]
    fn test_encode_numeric_rounds_to_tenths() {
        assert_eq!(encode_numeric(33.44).unwrap(), 334);
        assert_eq!(encode_numeric(33.46).unwrap(), 335);
        assert_eq!(encode_numeric(0.04).unwrap(), 0);
    }

    #[test]
    fn test_encode_numeric_out_of_range() {
        assert_eq!(
            encode_numeric(-0.1),
            Err(CodecError::OutOfRange { value: -0.1 })
        );
        assert!(encode_numeric(6553.6).is_err());
        assert!(encode_numeric(f64::NAN).is_err());
    }

    #[test]
    fn test_text_roundtrip() {
        let word = encode_text("up").unwrap();
        assert_eq!(word, (21 << 5) | 16);
        assert_eq!(decode_text(word), "up");
        assert_eq!(decode_text(encode_text("").unwrap()), "");
    }

    #[test]
    fn test_text_too_long() {
        assert_eq!(
            encode_text("down"),
            Err(CodecError::TextTooLong {
                text: "down".to_string()
            })
        );
    }

    #[test]
    fn test_field_value_accessors() {
        let num = FieldValue::Numeric(12.3);
        assert_eq!(num.as_f64(), Some(12.3));
        assert_eq!(num.as_str(), None);

        let text = FieldValue::from("on");
        assert_eq!(text.as_str(), Some("on"));
        assert_eq!(text.as_f64(), None);
    }

    #[test]
    fn test_field_value_serializes_untagged() {
        let num = serde_json::to_string(&FieldValue::Numeric(9.0)).unwrap();
        assert_eq!(num, "9.0");
        let text = serde_json::to_string(&FieldValue::Text("up".to_string())).unwrap();
        assert_eq!(text, "\"up\"");
    }
}
