//! Base32 over a custom alphabet without padding.
//!
//! Bytes are packed most significant bit first into 5-bit symbols. A final partial symbol is
//! filled with zero bits, so `n` bytes always encode to `ceil(8n / 5)` characters.

pub mod decode;
pub mod encode;
pub mod validate;

pub use crate::base_common::Alphabet;

pub const ALPHABET: Alphabet<32> = match Alphabet::new("BCDFGHJKMNPQRSTVWXYZ23456789AE01") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

pub use decode::{decode, decode_into, Decoder, Error as DecodeError};
pub use encode::{encode, encode_into, Encoder, Error as EncodeError};
pub use validate::{check, validate, Diagnostic, Validator};
