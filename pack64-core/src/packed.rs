use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use pack64_math::alphabet::DECODE_TABLE;
use pack64_math::{decode_byte, decode_digits, EXPONENT_BIAS};

use crate::decoder;
use crate::encoder::scale_unit;
use crate::error::{Pack64Error, Result};

/// An owned packed vector whose length and symbols have been validated.
///
/// Serializes as the bare packed string; deserialization re-validates it,
/// so a `PackedVector` read from JSON always decodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PackedVector {
    packed: String,
    /// Read from the header once, on construction.
    exponent: i32,
}

impl PackedVector {
    pub fn encode(vector: &[f64]) -> Result<Self> {
        Self::try_from(crate::codec::encode(vector)?)
    }

    pub fn as_str(&self) -> &str {
        &self.packed
    }

    pub fn into_string(self) -> String {
        self.packed
    }

    /// Number of components.
    pub fn dimension(&self) -> usize {
        (self.packed.len() - 1) / 3
    }

    pub fn is_empty(&self) -> bool {
        self.dimension() == 0
    }

    /// Shared exponent stored in the header symbol.
    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Value of one quantization step, `2^exponent`.
    pub fn unit(&self) -> f64 {
        scale_unit(self.exponent)
    }

    /// Components of the vector. Every byte is a known alphabet symbol, so
    /// this reads the digit table directly.
    pub fn decode(&self) -> Vec<f64> {
        let unit = self.unit();
        self.packed.as_bytes()[1..]
            .chunks_exact(3)
            .map(|group| {
                let digits = [
                    DECODE_TABLE[group[0] as usize],
                    DECODE_TABLE[group[1] as usize],
                    DECODE_TABLE[group[2] as usize],
                ];
                decode_digits(digits) as f64 * unit
            })
            .collect()
    }
}

impl TryFrom<String> for PackedVector {
    type Error = Pack64Error;

    fn try_from(packed: String) -> Result<Self> {
        decoder::decode(&packed)?;
        let header = packed.as_bytes()[0];
        let digit = decode_byte(header).map_err(|_| Pack64Error::InvalidSymbol {
            symbol: header as char,
            position: 0,
        })?;
        Ok(Self {
            packed,
            exponent: digit as i32 - EXPONENT_BIAS,
        })
    }
}

impl FromStr for PackedVector {
    type Err = Pack64Error;

    fn from_str(packed: &str) -> Result<Self> {
        Self::try_from(packed.to_string())
    }
}

impl From<PackedVector> for String {
    fn from(packed: PackedVector) -> Self {
        packed.packed
    }
}

impl AsRef<str> for PackedVector {
    fn as_ref(&self) -> &str {
        &self.packed
    }
}

impl fmt::Display for PackedVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.packed)
    }
}
