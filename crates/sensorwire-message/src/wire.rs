//! 16-bit wire words.
//!
//! Devices transmit 16-bit words in little-endian byte order, and those
//! bytes reach the codec rendered as hexadecimal text, four digits per
//! word. `"920e"` is the byte sequence `0x92 0x0e` and therefore the word
//! `0x0e92`. Flattening the group to a big-endian integer instead would
//! silently corrupt every decoded value.

use crate::constants::WORD_HEX_LEN;
use crate::error::{CodecError, CodecResult};

/// Decode a 4-hex-digit group into the 16-bit word it carries.
///
/// Accepts upper- or lowercase digits. Fails with
/// [`CodecError::MalformedHex`] unless the group is exactly four valid hex
/// digits.
pub fn decode_word(group: &str) -> CodecResult<u16> {
    if group.len() != WORD_HEX_LEN {
        return Err(CodecError::MalformedHex {
            group: group.to_string(),
        });
    }
    let bytes = hex::decode(group).map_err(|_| CodecError::MalformedHex {
        group: group.to_string(),
    })?;
    Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
}

/// Encode a 16-bit word as its 4-digit lowercase hex group.
pub fn encode_word(word: u16) -> String {
    hex::encode(word.to_le_bytes())
}
