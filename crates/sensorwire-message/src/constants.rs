//! Wire-format constants.

// ============================================================================
// Character Alphabet
// ============================================================================

/// Alphabet code of 'a'; codes 1-26 are the lowercase letters.
pub const FIRST_LETTER_CODE: u8 = 1;
/// Alphabet code of '0'; codes 27-36 are the decimal digits.
pub const FIRST_DIGIT_CODE: u8 = 27;
/// Highest assigned alphabet code ('9').
pub const MAX_ALPHABET_CODE: u8 = 36;
/// Highest code a 5-bit wire group can carry.
pub const MAX_GROUP_CODE: u8 = 31;

// ============================================================================
// Name/Text Composites
// ============================================================================

/// Bits per packed character group.
pub const GROUP_BITS: u32 = 5;
/// Mask selecting one character group.
pub const GROUP_MASK: u16 = 0x1F;
/// Maximum characters in a packed name or text value.
pub const MAX_PACKED_CHARS: usize = 3;
/// Mask selecting the 15 composite bits of a name/text word (bit 15 is
/// not part of the composite).
pub const COMPOSITE_MASK: u16 = 0x7FFF;

// ============================================================================
// Wire Layout
// ============================================================================

/// Hex characters per 16-bit wire word.
pub const WORD_HEX_LEN: usize = 4;
/// Hex characters per encoded field (name word + value word).
pub const FIELD_HEX_LEN: usize = 8;

// ============================================================================
// Numeric Values
// ============================================================================

/// Scale factor between wire codes and numeric readings.
pub const NUMERIC_SCALE: f64 = 10.0;
/// Largest numeric reading representable on the wire (65535 / 10).
pub const MAX_NUMERIC_VALUE: f64 = 6553.5;
