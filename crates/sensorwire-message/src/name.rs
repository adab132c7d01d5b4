//! Packed name/text composites.
//!
//! A field name (or a text value) is up to three alphabet characters
//! packed into the low 15 bits of a 16-bit word, five bits per character:
//!
//! ```text
//! bit 15  | bits 14-10 | bits 9-5 | bits 4-0
//! ignored | 1st char   | 2nd char | 3rd char
//! ```
//!
//! A zero group carries no character, so names shorter than three
//! characters leave their leading groups empty and the empty name encodes
//! to 0.

use crate::alphabet::AlphabetCode;
use crate::constants::*;
use crate::error::{CodecError, CodecResult};

/// A 15-bit composite packing up to three alphabet characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameCode(u16);

impl NameCode {
    /// Wrap a wire word. Bit 15 is not part of the composite and is
    /// masked off.
    pub fn new(word: u16) -> NameCode {
        NameCode(word & COMPOSITE_MASK)
    }

    /// Pack a name of up to three characters.
    ///
    /// The first character lands in the highest occupied group. Fails with
    /// [`CodecError::NameTooLong`] past three characters, and with
    /// [`CodecError::InvalidCharacter`] for anything that does not fit a
    /// 5-bit group (only `a`-`z` and `0`-`4` do).
    pub fn encode(name: &str) -> CodecResult<NameCode> {
        if name.chars().count() > MAX_PACKED_CHARS {
            return Err(CodecError::NameTooLong {
                name: name.to_string(),
            });
        }
        let mut composite: u16 = 0;
        for ch in name.chars() {
            let code = AlphabetCode::from_char(ch)?;
            if !code.is_packable() {
                return Err(CodecError::InvalidCharacter { ch });
            }
            composite = (composite << GROUP_BITS) | code.value() as u16;
        }
        Ok(NameCode(composite))
    }

    /// Unpack to a string of 0-3 characters.
    ///
    /// Groups are read highest-first so characters come out in their
    /// original order; empty groups are omitted rather than padded. Total:
    /// any 15-bit pattern decodes.
    pub fn decode(self) -> String {
        let mut out = String::with_capacity(MAX_PACKED_CHARS);
        for slot in (0..MAX_PACKED_CHARS).rev() {
            let code = AlphabetCode::from_group(self.0 >> (slot as u32 * GROUP_BITS));
            match code.to_char() {
                Some(ch) => out.push(ch),
                None if code.value() != 0 => {
                    // Unassigned codes drop out of the decoded name.
                    log::debug!(
                        "dropping unassigned character code {} in composite {:#06x}",
                        code.value(),
                        self.0
                    );
                }
                None => {}
            }
        }
        out
    }

    /// The wire word.
    pub fn value(self) -> u16 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_three_char_name() {
        // 'c' = 3, 't' = 20, 'r' = 18 -> (3 << 10) | (20 << 5) | 18
        assert_eq!(NameCode::encode("ctr").unwrap().value(), 0x0E92);
    }

    #[test]
    fn test_decode_three_char_name() {
        assert_eq!(NameCode::new(0x0E92).decode(), "ctr");
    }

    #[test]
    fn test_short_name_uses_low_groups() {
        // 'd' = 4, '1' = 28 -> (4 << 5) | 28 = 156
        let code = NameCode::encode("d1").unwrap();
        assert_eq!(code.value(), 156);
        assert_eq!(code.decode(), "d1");
    }

    #[test]
    fn test_single_char_name() {
        let code = NameCode::encode("z").unwrap();
        assert_eq!(code.value(), 26);
        assert_eq!(code.decode(), "z");
    }

    #[test]
    fn test_empty_name_is_zero() {
        assert_eq!(NameCode::encode("").unwrap().value(), 0);
        assert_eq!(NameCode::new(0).decode(), "");
    }

    #[test]
    fn test_bit_15_ignored() {
        assert_eq!(NameCode::new(0x8E92).decode(), "ctr");
        assert_eq!(NameCode::new(0x8E92), NameCode::new(0x0E92));
    }

    #[test]
    fn test_name_too_long() {
        assert_eq!(
            NameCode::encode("ctrl"),
            Err(CodecError::NameTooLong {
                name: "ctrl".to_string()
            })
        );
    }

    #[test]
    fn test_unpackable_digit_rejected() {
        // '7' is alphabet code 34, which overflows a 5-bit group.
        assert_eq!(
            NameCode::encode("d7"),
            Err(CodecError::InvalidCharacter { ch: '7' })
        );
    }

    #[test]
    fn test_invalid_character_rejected() {
        assert!(NameCode::encode("a_c").is_err());
        assert!(NameCode::encode("AB").is_err());
    }

    #[test]
    fn test_interior_zero_group_is_omitted() {
        // 'a' in the top group, nothing in the middle, 'b' at the bottom.
        let word = (1 << 10) | 2;
        assert_eq!(NameCode::new(word).decode(), "ab");
    }

    #[test]
    fn test_roundtrip_packable_names() {
        for name in ["ctr", "tmp", "vlt", "hmd", "sw1", "d1", "a", "x0", "404"] {
            let code = NameCode::encode(name).unwrap();
            assert_eq!(code.decode(), *name, "name {name:?} should survive packing");
        }
    }
}
