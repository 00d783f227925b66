use crate::config::{CodecConfig, Rounding};
use crate::error::Result;
use crate::{decoder, encoder};

/// Vector ↔ text codec interface.
///
/// Implementations are pure: the same input yields the same output on
/// every platform, and neither call keeps state between invocations.
pub trait VectorCodec {
    fn encode(&self, vector: &[f64]) -> Result<String>;
    fn decode(&self, packed: &str) -> Result<Vec<f64>>;
}

/// The Pack64 codec with a fixed encoder configuration.
///
/// # Example
/// ```
/// use pack64_core::{CodecConfig, Pack64Codec, Rounding, VectorCodec};
///
/// let codec = Pack64Codec::default();
/// let packed = codec.encode(&[-1.0, 1.0]).unwrap();
/// assert_eq!(packed, "YwAAQAA");
/// assert_eq!(codec.decode(&packed).unwrap(), vec![-1.0, 1.0]);
///
/// // Legacy truncating encoder: no rounding margin, so a smaller exponent
/// let legacy = Pack64Codec::new(CodecConfig::new().with_rounding(Rounding::Truncate));
/// assert_eq!(codec.encode(&[131071.8]).unwrap(), "pQAA");
/// assert_eq!(legacy.encode(&[131071.8]).unwrap(), "of__");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Pack64Codec {
    config: CodecConfig,
}

impl Pack64Codec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: CodecConfig) {
        self.config = config;
    }

    pub fn description(&self) -> String {
        match self.config.rounding {
            Rounding::Nearest => "Pack64 (round to nearest)".to_string(),
            Rounding::Truncate => "Pack64 (truncate)".to_string(),
        }
    }
}

impl VectorCodec for Pack64Codec {
    fn encode(&self, vector: &[f64]) -> Result<String> {
        encoder::encode_with(vector, &self.config)
    }

    fn decode(&self, packed: &str) -> Result<Vec<f64>> {
        decoder::decode(packed)
    }
}

/// Encode with the default (round to nearest) configuration.
pub fn encode(vector: &[f64]) -> Result<String> {
    encoder::encode_with(vector, &CodecConfig::default())
}

/// Encode any ordered sequence of values convertible to `f64`.
pub fn encode_iter<I>(values: I) -> Result<String>
where
    I: IntoIterator,
    I::Item: Into<f64>,
{
    let vector: Vec<f64> = values.into_iter().map(Into::into).collect();
    encode(&vector)
}

pub fn decode(packed: &str) -> Result<Vec<f64>> {
    decoder::decode(packed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_is_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Pack64Codec>();
    }

    #[test]
    fn test_set_config() {
        let mut codec = Pack64Codec::default();
        assert_eq!(codec.description(), "Pack64 (round to nearest)");
        codec.set_config(CodecConfig::new().with_rounding(Rounding::Truncate));
        assert_eq!(codec.config().rounding, Rounding::Truncate);
        assert_eq!(codec.description(), "Pack64 (truncate)");
    }

    #[test]
    fn test_encode_iter_accepts_f32_and_ints() {
        assert_eq!(encode_iter([1.0f32, 2.0, 3.0]).unwrap(), encode(&[1.0, 2.0, 3.0]).unwrap());
        assert_eq!(encode_iter(vec![1i32, -1]).unwrap(), encode(&[1.0, -1.0]).unwrap());
        assert_eq!(encode_iter(std::iter::empty::<f64>()).unwrap(), "A");
    }

    #[test]
    fn test_trait_object() {
        let codec: Box<dyn VectorCodec> = Box::new(Pack64Codec::default());
        let packed = codec.encode(&[0.5, 0.25]).unwrap();
        assert_eq!(codec.decode(&packed).unwrap(), vec![0.5, 0.25]);
    }
}
