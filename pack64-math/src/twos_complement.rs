use crate::alphabet::{decode_symbol, encode_index, DigitError};

/// 2^17: the value that carries the sign in an 18-bit two's complement integer.
/// The smallest representable integer is `-SIGN_BIT`, the largest `SIGN_BIT - 1`.
pub const SIGN_BIT: i32 = 1 << 17;

/// 2^18: added to negative values before they are split into digits.
pub const MODULUS: i32 = SIGN_BIT * 2;

pub const MIN_QUANTIZED: i32 = -SIGN_BIT;
pub const MAX_QUANTIZED: i32 = SIGN_BIT - 1;

/// Magnitude bits of an 18-bit signed integer.
pub const MAGNITUDE_BITS: i32 = 17;

/// Correction applied to the largest magnitude during exponent selection,
/// so that rounding cannot push a component up to the next power of two.
pub const ROUND_MARGIN: f64 = SIGN_BIT as f64 / (SIGN_BIT as f64 - 0.5);

/// The header symbol stores `exponent + EXPONENT_BIAS`.
pub const EXPONENT_BIAS: i32 = 40;
pub const MIN_EXPONENT: i32 = -EXPONENT_BIAS;
pub const MAX_EXPONENT: i32 = 23;

const DIGIT_MASK: i32 = 0x3F;

/// Split an integer in `[-131072, 131071]` into three 6-bit digits,
/// most significant first.
pub fn encode_digits(value: i64) -> Result<[u8; 3], DigitError> {
    if value < MIN_QUANTIZED as i64 || value > MAX_QUANTIZED as i64 {
        return Err(DigitError::OutOfRange(value));
    }
    let mut biased = value as i32;
    if biased < 0 {
        biased += MODULUS;
    }
    Ok([
        ((biased >> 12) & DIGIT_MASK) as u8,
        ((biased >> 6) & DIGIT_MASK) as u8,
        (biased & DIGIT_MASK) as u8,
    ])
}

/// Inverse of [`encode_digits`]. Digits are masked to 6 bits.
#[inline]
pub fn decode_digits(digits: [u8; 3]) -> i32 {
    let [d0, d1, d2] = digits.map(|d| d as i32 & DIGIT_MASK);
    let raw = d0 * 4096 + d1 * 64 + d2;
    if raw >= SIGN_BIT {
        raw - MODULUS
    } else {
        raw
    }
}

/// Three-symbol form of [`encode_digits`].
pub fn encode_symbols(value: i64) -> Result<[char; 3], DigitError> {
    Ok(encode_digits(value)?.map(encode_index))
}

/// Decode exactly three symbols into the signed integer they carry.
pub fn decode_symbols(symbols: &str) -> Result<i32, DigitError> {
    let mut digits = [0u8; 3];
    let mut count = 0;
    for symbol in symbols.chars() {
        if count < 3 {
            digits[count] = decode_symbol(symbol)?;
        }
        count += 1;
    }
    if count != 3 {
        return Err(DigitError::WrongLength { expected: 3, got: count });
    }
    Ok(decode_digits(digits))
}
