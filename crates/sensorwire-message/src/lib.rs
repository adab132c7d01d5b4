//! Sensorwire Packed Message Codec
//!
//! This crate decodes and encodes the packed binary uplink messages sent by
//! bandwidth-constrained wireless sensor devices. A message is a short hex
//! string carrying up to a handful of named readings, each squeezed into
//! four bytes.
//!
//! # Wire Format
//!
//! A message is a sequence of 8-hex-character fields:
//!
//! | Half       | Size (hex chars) | Description                              |
//! |------------|------------------|------------------------------------------|
//! | name word  | 4                | up to 3 characters, 5 bits per character |
//! | value word | 4                | fixed-point numeric or 3-char text       |
//!
//! Each 4-digit group is a 16-bit word rendered from the device's native
//! little-endian byte order: `"920e"` is the bytes `0x92 0x0e`, i.e. the
//! word `0x0e92`. Field names pack up to three characters from a 5-bit
//! alphabet (`a`-`z`, `0`-`4`) into the low 15 bits of the name word.
//! Numeric values are unsigned fixed-point with one implied decimal digit
//! (`code / 10.0`, so `360` is `36.0`); text values reuse the name packing.
//! Which fields carry text is deployment configuration, not wire data.
//!
//! Decoding is deliberately permissive (any well-formed hex decodes, odd
//! codes degrade to omitted characters) while encoding is strict, since
//! devices may send anything but the host only encodes values it built
//! itself.
//!
//! # Example
//!
//! ```rust,ignore
//! use sensorwire_message::{FieldValue, MessageCodec};
//!
//! let codec = MessageCodec::new();
//! let readings = codec.decode("920e5a00b051680194597b00")?;
//! assert_eq!(readings.get("tmp"), Some(&FieldValue::Numeric(36.0)));
//! ```

mod alphabet;
mod constants;
mod error;
mod field;
mod message;
mod name;
mod value;
mod wire;

pub use alphabet::*;
pub use constants::*;
pub use error::*;
pub use field::*;
pub use message::*;
pub use name::*;
pub use value::*;
pub use wire::*;
