use thiserror::Error;

/// The 64 symbols of the encoding, in digit order (URL-safe base64).
pub const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Marker for bytes that are not part of the alphabet.
const INVALID: u8 = 0xFF;

/// Byte → digit lookup, built at compile time.
/// Every entry that is not one of the 64 symbols holds `INVALID`.
pub const DECODE_TABLE: [u8; 256] = build_decode_table();

const fn build_decode_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigitError {
    #[error("Invalid symbol {0:?}: not in the base64url alphabet")]
    InvalidSymbol(char),
    #[error("Integer out of range for 18-bit two's complement: {0}")]
    OutOfRange(i64),
    #[error("Expected {expected} symbols, got {got}")]
    WrongLength { expected: usize, got: usize },
}

/// Map a digit in `0..64` to its symbol.
///
/// # Panics
/// If `index >= 64`. Callers only ever pass masked 6-bit digits or biased
/// exponents that were range-checked beforehand.
#[inline]
pub fn encode_index(index: u8) -> char {
    ALPHABET[index as usize] as char
}

/// Map a symbol back to its digit.
#[inline]
pub fn decode_symbol(symbol: char) -> Result<u8, DigitError> {
    if !symbol.is_ascii() {
        return Err(DigitError::InvalidSymbol(symbol));
    }
    decode_byte(symbol as u8)
}

/// Byte-level variant of [`decode_symbol`], used on the hot decode path.
#[inline]
pub fn decode_byte(byte: u8) -> Result<u8, DigitError> {
    match DECODE_TABLE[byte as usize] {
        INVALID => Err(DigitError::InvalidSymbol(byte as char)),
        digit => Ok(digit),
    }
}

#[inline]
pub fn is_symbol(symbol: char) -> bool {
    decode_symbol(symbol).is_ok()
}
