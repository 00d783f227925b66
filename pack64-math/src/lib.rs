//! # pack64-math
//!
//! Low-level building blocks of the Pack64 vector encoding.
//!
//! - [`alphabet`]: the 64-symbol base64url digit set and its compile-time
//!   reverse lookup table.
//! - [`twos_complement`]: 18-bit two's complement integers split into three
//!   6-bit digits, plus the constants shared by encoder and decoder.
//!
//! Pure functions over integers and symbols; no allocation on the digit paths.

pub mod alphabet;
pub mod twos_complement;

pub use alphabet::{decode_byte, decode_symbol, encode_index, is_symbol, DigitError, ALPHABET};
pub use twos_complement::{
    decode_digits, decode_symbols, encode_digits, encode_symbols, EXPONENT_BIAS, MAGNITUDE_BITS,
    MAX_EXPONENT, MAX_QUANTIZED, MIN_EXPONENT, MIN_QUANTIZED, MODULUS, ROUND_MARGIN, SIGN_BIT,
};
