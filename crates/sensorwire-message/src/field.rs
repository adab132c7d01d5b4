//! Single-field encode/decode.
//!
//! A field is eight hex characters: a 4-digit name word followed by a
//! 4-digit value word.

use crate::error::CodecResult;
use crate::name::NameCode;
use crate::value::{self, FieldValue};
use crate::wire;

/// Decode one field from its name and value hex halves.
///
/// The caller decides via `is_text` whether the value half is packed text
/// or a fixed-point numeric; the wire carries no type information. Fails
/// with [`CodecError::MalformedHex`](crate::CodecError::MalformedHex)
/// unless both halves are exactly four hex digits.
pub fn decode_field(
    name_hex: &str,
    value_hex: &str,
    is_text: bool,
) -> CodecResult<(String, FieldValue)> {
    let name = NameCode::new(wire::decode_word(name_hex)?).decode();
    let word = wire::decode_word(value_hex)?;
    let value = if is_text {
        FieldValue::Text(value::decode_text(word))
    } else {
        FieldValue::Numeric(value::decode_numeric(word))
    };
    Ok((name, value))
}

/// Encode one field to its eight-character hex form.
///
/// The value's variant selects the wire interpretation, so a text-typed
/// field must be handed a [`FieldValue::Text`]. Output is always exactly
/// eight lowercase hex characters.
pub fn encode_field(name: &str, value: &FieldValue) -> CodecResult<String> {
    let name_word = NameCode::encode(name)?.value();
    let value_word = match value {
        FieldValue::Numeric(v) => value::encode_numeric(*v)?,
        FieldValue::Text(v) => value::encode_text(v)?,
    };
    Ok(format!(
        "{}{}",
        wire::encode_word(name_word),
        wire::encode_word(value_word)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;

    #[test]
    fn test_decode_field_regression_vector() {
        // Fixed vector from a live device: 0x0e92 packs c/t/r and
        // 0x005a is the scaled counter value 90.
        let (name, value) = decode_field("920e", "5a00", false).unwrap();
        assert_eq!(name, "ctr");
        assert_eq!(value, FieldValue::Numeric(9.0));
    }

    #[test]
    fn test_encode_field_inverse_of_decode() {
        let hex = encode_field("ctr", &FieldValue::Numeric(9.0)).unwrap();
        assert_eq!(hex, "920e5a00");
    }

    #[test]
    fn test_decode_field_mixed_case() {
        let (name, value) = decode_field("920E", "5A00", false).unwrap();
        assert_eq!(name, "ctr");
        assert_eq!(value, FieldValue::Numeric(9.0));
    }

    #[test]
    fn test_text_field_roundtrip() {
        let hex = encode_field("d1", &FieldValue::Text("up".to_string())).unwrap();
        assert_eq!(hex, "9c00b002");
        let (name, value) = decode_field(&hex[..4], &hex[4..], true).unwrap();
        assert_eq!(name, "d1");
        assert_eq!(value, FieldValue::Text("up".to_string()));
    }

    #[test]
    fn test_text_word_decoded_as_numeric_without_flag() {
        // Without the text flag the same bytes read as a number; the wire
        // cannot distinguish the two kinds.
        let (_, value) = decode_field("9c00", "b002", false).unwrap();
        assert_eq!(value, FieldValue::Numeric(68.8));
    }

    #[test]
    fn test_malformed_hex_halves() {
        assert!(matches!(
            decode_field("92", "5a00", false),
            Err(CodecError::MalformedHex { .. })
        ));
        assert!(matches!(
            decode_field("920e", "5g00", false),
            Err(CodecError::MalformedHex { .. })
        ));
    }

    #[test]
    fn test_encode_errors_propagate() {
        assert!(matches!(
            encode_field("ctrl", &FieldValue::Numeric(1.0)),
            Err(CodecError::NameTooLong { .. })
        ));
        assert!(matches!(
            encode_field("ctr", &FieldValue::Numeric(-1.0)),
            Err(CodecError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_zero_field() {
        let (name, value) = decode_field("0000", "0000", false).unwrap();
        assert_eq!(name, "");
        assert_eq!(value, FieldValue::Numeric(0.0));
    }
}
