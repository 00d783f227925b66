use pack64_math::{
    encode_digits, encode_index, EXPONENT_BIAS, MAGNITUDE_BITS, MAX_EXPONENT, MIN_EXPONENT,
    ROUND_MARGIN,
};

use crate::config::{CodecConfig, Rounding};
use crate::error::{Pack64Error, Result};

const MANTISSA_BITS: u32 = 52;
const F64_EXPONENT_BIAS: i32 = 1023;

/// `2^exponent` built directly from its bit pattern.
/// Only valid for normal results, i.e. `-1022 <= exponent <= 1023`;
/// the header symbol confines exponents to `[-40, 23]`.
#[inline]
pub fn scale_unit(exponent: i32) -> f64 {
    debug_assert!((-1022..=1023).contains(&exponent));
    f64::from_bits(((exponent + F64_EXPONENT_BIAS) as u64) << MANTISSA_BITS)
}

/// `floor(log2(x))` for positive `x`, read off the IEEE-754 representation.
/// Exact at powers of two, where `f64::log2` is allowed to be off by an ulp.
fn floor_log2(x: f64) -> i32 {
    let bits = x.to_bits();
    let biased = ((bits >> MANTISSA_BITS) & 0x7FF) as i32;
    if biased == 0 {
        // Subnormal: value = mantissa * 2^-1074
        let mantissa = bits & ((1u64 << MANTISSA_BITS) - 1);
        -1074 + (63 - mantissa.leading_zeros() as i32)
    } else {
        biased - F64_EXPONENT_BIAS
    }
}

/// Pick the shared exponent for `vector`.
///
/// The largest magnitude (widened by `ROUND_MARGIN` when rounding to
/// nearest) must fit in 17 magnitude bits once divided by `2^exponent`.
/// Results below `-40` are clamped silently; results above `23` are an
/// [`Pack64Error::Overflow`]. An empty or all-zero vector gets `-40`.
pub fn select_exponent(vector: &[f64], rounding: Rounding) -> Result<i32> {
    let mut largest = 0.0f64;
    for (index, &value) in vector.iter().enumerate() {
        if !value.is_finite() {
            return Err(Pack64Error::InvalidValue { index, value });
        }
        largest = largest.max(value.abs());
    }

    let peak = match rounding {
        Rounding::Nearest => largest * ROUND_MARGIN,
        Rounding::Truncate => largest,
    };
    if peak == 0.0 {
        return Ok(MIN_EXPONENT);
    }

    let lowest_unused_power = floor_log2(peak) + 1;
    let exponent = (lowest_unused_power - MAGNITUDE_BITS).max(MIN_EXPONENT);
    if exponent > MAX_EXPONENT {
        return Err(Pack64Error::Overflow { exponent });
    }
    Ok(exponent)
}

/// Encode `vector` into a packed string using `config`.
pub fn encode_with(vector: &[f64], config: &CodecConfig) -> Result<String> {
    let exponent = select_exponent(vector, config.rounding)?;
    let unit = scale_unit(exponent);
    tracing::trace!(components = vector.len(), exponent, "selected shared exponent");

    let mut packed = String::with_capacity(1 + 3 * vector.len());
    packed.push(encode_index((exponent + EXPONENT_BIAS) as u8));

    for (index, &value) in vector.iter().enumerate() {
        // Integral and bounded by 2^41 / 2^-40, so the cast is lossless.
        let quantized = config.rounding.apply(value / unit) as i64;
        let digits = encode_digits(quantized).map_err(|_| Pack64Error::QuantizationOverflow {
            index,
            value: quantized,
        })?;
        packed.extend(digits.map(encode_index));
    }

    Ok(packed)
}
