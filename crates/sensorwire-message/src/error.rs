//! Error types for the message codec.

use thiserror::Error;

/// Errors that can occur when decoding or encoding messages.
///
/// Decode errors (`InvalidLength`, `MalformedHex`) abort the whole message;
/// a malformed payload never yields a partial result. The remaining kinds
/// only arise when encoding, which is strict about its inputs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CodecError {
    /// Message hex length is not a whole number of fields.
    #[error("invalid message length: {len} hex chars (must be a multiple of 8)")]
    InvalidLength {
        /// Length of the offending message, in hex characters.
        len: usize,
    },

    /// A 4-character wire group is not valid hexadecimal.
    #[error("malformed hex group {group:?}")]
    MalformedHex {
        /// The offending group text.
        group: String,
    },

    /// A character that cannot be packed into a 5-bit group.
    #[error("invalid character {ch:?} (packable alphabet is a-z, 0-4)")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
    },

    /// A field name longer than three characters.
    #[error("name too long: {name:?} (max 3 characters)")]
    NameTooLong {
        /// The offending name.
        name: String,
    },

    /// A text value longer than three characters.
    #[error("text too long: {text:?} (max 3 characters)")]
    TextTooLong {
        /// The offending text.
        text: String,
    },

    /// A numeric value outside the representable fixed-point range.
    #[error("value out of range: {value} (representable range is 0.0 to 6553.5)")]
    OutOfRange {
        /// The offending value.
        value: f64,
    },
}

/// Result type alias for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;
