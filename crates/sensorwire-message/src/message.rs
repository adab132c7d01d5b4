//! Whole-message decode/encode.
//!
//! A message is a run of consecutive 8-hex-character fields. Decoding
//! walks the fields in order and accumulates named readings; if the same
//! name appears twice the later field wins (the earlier slot keeps its
//! position). Encoding is the straight concatenation of its fields.

use std::collections::HashSet;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::constants::{FIELD_HEX_LEN, WORD_HEX_LEN};
use crate::error::{CodecError, CodecResult};
use crate::field;
use crate::name::NameCode;
use crate::value::{self, FieldValue};
use crate::wire;

// ============================================================================
// Decoded Readings
// ============================================================================

/// An ordered set of decoded readings.
///
/// Iteration follows first-insertion order; inserting an existing name
/// replaces its value in place. Messages are at most a few fields, so
/// lookups walk the entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Readings {
    entries: Vec<(String, FieldValue)>,
}

impl Readings {
    /// Create an empty set.
    pub fn new() -> Readings {
        Readings::default()
    }

    /// Insert a reading, replacing any existing value under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Look up a reading by name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Number of distinct readings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no readings.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over readings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }
}

impl Serialize for Readings {
    /// Serializes as a map in insertion order, so a decoded message
    /// renders as the flat JSON object downstream consumers merge into
    /// device state.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

// ============================================================================
// Message Codec
// ============================================================================

/// Decoder for whole messages.
///
/// One codec value consolidates the per-deployment configuration: which
/// field names carry packed text rather than numerics, and whether a
/// message whose length is not a whole number of fields is rejected
/// (strict, the default) or has its trailing remainder dropped. The codec
/// holds no decode state and may be shared freely across threads.
#[derive(Debug, Clone)]
pub struct MessageCodec {
    text_fields: HashSet<String>,
    strict_length: bool,
}

impl Default for MessageCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageCodec {
    /// Create a codec with no text-typed fields and strict length checks.
    pub fn new() -> MessageCodec {
        MessageCodec {
            text_fields: HashSet::new(),
            strict_length: true,
        }
    }

    /// Declare which field names carry packed text rather than numerics.
    pub fn with_text_fields<I, S>(mut self, names: I) -> MessageCodec
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.text_fields = names.into_iter().map(Into::into).collect();
        self
    }

    /// Control length validation. A strict codec rejects messages that
    /// are not a whole number of fields; a lenient one decodes the whole
    /// fields and drops the remainder.
    pub fn with_strict_length(mut self, strict: bool) -> MessageCodec {
        self.strict_length = strict;
        self
    }

    /// Whether a field name decodes its value as text.
    pub fn is_text_field(&self, name: &str) -> bool {
        self.text_fields.contains(name)
    }

    /// Decode a hex message into named readings.
    ///
    /// An empty message decodes to an empty set: a device that sent no
    /// payload, not an error. Any failure aborts the whole message; a
    /// malformed payload never yields a partial result. Input hex may be
    /// upper- or lowercase.
    pub fn decode(&self, hex: &str) -> CodecResult<Readings> {
        let mut readings = Readings::new();
        if hex.is_empty() {
            return Ok(readings);
        }
        let whole = hex.len() - hex.len() % FIELD_HEX_LEN;
        if whole != hex.len() {
            if self.strict_length {
                return Err(CodecError::InvalidLength { len: hex.len() });
            }
            log::warn!(
                "dropping {} trailing hex chars of partial field",
                hex.len() - whole
            );
        }
        for chunk in hex.as_bytes()[..whole].chunks(FIELD_HEX_LEN) {
            let name_hex = group_str(&chunk[..WORD_HEX_LEN])?;
            let value_hex = group_str(&chunk[WORD_HEX_LEN..])?;
            // The name decides whether the value half is text, so it is
            // decoded first.
            let name = NameCode::new(wire::decode_word(name_hex)?).decode();
            let word = wire::decode_word(value_hex)?;
            let value = if self.is_text_field(&name) {
                FieldValue::Text(value::decode_text(word))
            } else {
                FieldValue::Numeric(value::decode_numeric(word))
            };
            readings.insert(name, value);
        }
        Ok(readings)
    }
}

/// View a group of raw bytes as hex text.
fn group_str(bytes: &[u8]) -> CodecResult<&str> {
    std::str::from_utf8(bytes).map_err(|_| CodecError::MalformedHex {
        group: String::from_utf8_lossy(bytes).into_owned(),
    })
}

// ============================================================================
// Convenience Entry Points
// ============================================================================

/// Decode a message with the given text-typed field names and strict
/// length checks.
pub fn decode_message<I, S>(hex: &str, text_fields: I) -> CodecResult<Readings>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    MessageCodec::new().with_text_fields(text_fields).decode(hex)
}

/// Encode an ordered sequence of named values into a hex message.
///
/// Fields are emitted in sequence order with no deduplication; feeding
/// the result back through decode applies last-write-wins. Any failure
/// aborts before partial output is produced.
pub fn encode_message<'a, I>(fields: I) -> CodecResult<String>
where
    I: IntoIterator<Item = (&'a str, &'a FieldValue)>,
{
    let mut hex = String::new();
    for (name, value) in fields {
        hex.push_str(&field::encode_field(name, value)?);
    }
    Ok(hex)
}
