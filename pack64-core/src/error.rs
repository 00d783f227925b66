use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Pack64Error {
    #[error("Vector contains an invalid value: component {index} is {value}")]
    InvalidValue { index: usize, value: f64 },

    #[error("Vector has an entry too large to encode: exponent {exponent} exceeds 23")]
    Overflow { exponent: i32 },

    #[error("Quantized component {index} out of 18-bit range: {value}")]
    QuantizationOverflow { index: usize, value: i64 },

    #[error("Invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("Malformed packed vector: length {length} is not of the form 1 + 3k")]
    MalformedInput { length: usize },
}

pub type Result<T> = std::result::Result<T, Pack64Error>;
