use pack64_math::{decode_byte, decode_digits, EXPONENT_BIAS};

use crate::encoder::scale_unit;
use crate::error::{Pack64Error, Result};

fn check_length(length: usize) -> Result<()> {
    if length % 3 != 1 {
        return Err(Pack64Error::MalformedInput { length });
    }
    Ok(())
}

/// Reject anything outside ASCII up front so byte positions equal
/// character positions for the byte-level decoder.
fn check_ascii(packed: &str) -> Result<()> {
    match packed.chars().enumerate().find(|(_, c)| !c.is_ascii()) {
        Some((position, symbol)) => Err(Pack64Error::InvalidSymbol { symbol, position }),
        None => Ok(()),
    }
}

#[inline]
fn digit_at(packed: &[u8], position: usize) -> Result<u8> {
    let byte = packed[position];
    decode_byte(byte).map_err(|_| Pack64Error::InvalidSymbol {
        symbol: byte as char,
        position,
    })
}

/// Decode a packed string into its components.
pub fn decode(packed: &str) -> Result<Vec<f64>> {
    check_length(packed.chars().count())?;
    check_ascii(packed)?;
    decode_bytes(packed.as_bytes())
}

/// Decode a packed vector given as raw ASCII bytes.
pub fn decode_bytes(packed: &[u8]) -> Result<Vec<f64>> {
    check_length(packed.len())?;

    let exponent = digit_at(packed, 0)? as i32 - EXPONENT_BIAS;
    let unit = scale_unit(exponent);

    let components = (packed.len() - 1) / 3;
    let mut vector = Vec::with_capacity(components);
    for i in 0..components {
        let base = 1 + 3 * i;
        let digits = [
            digit_at(packed, base)?,
            digit_at(packed, base + 1)?,
            digit_at(packed, base + 2)?,
        ];
        vector.push(decode_digits(digits) as f64 * unit);
    }

    tracing::trace!(components, exponent, "decoded packed vector");
    Ok(vector)
}

/// Single-precision variant of [`decode`].
pub fn decode_f32(packed: &str) -> Result<Vec<f32>> {
    Ok(decode(packed)?.into_iter().map(|x| x as f32).collect())
}

/// The shared exponent stored in the header symbol, without decoding the
/// components. The length must still be of the form `1 + 3k`; the component
/// symbols are not checked. The exponent is not range-checked beyond what
/// one symbol can hold.
pub fn header_exponent(packed: &str) -> Result<i32> {
    check_length(packed.chars().count())?;
    let symbol = packed
        .chars()
        .next()
        .ok_or(Pack64Error::MalformedInput { length: 0 })?;
    let digit = pack64_math::decode_symbol(symbol)
        .map_err(|_| Pack64Error::InvalidSymbol { symbol, position: 0 })?;
    Ok(digit as i32 - EXPONENT_BIAS)
}
