//! # pack64-core
//!
//! Pack64: a lossy, self-describing text encoding for numeric vectors.
//!
//! A vector of N reals becomes `1 + 3N` URL-safe characters. The first
//! character holds a power-of-two exponent shared by every component; each
//! component is then an 18-bit two's complement integer spread over three
//! base64url symbols. Decoding multiplies each integer by `2^exponent`, so
//! every component comes back within half a quantization step.
//!
//! Entry points:
//! - [`encode`] / [`decode`]: free functions with the default configuration
//! - [`VectorCodec`] / [`Pack64Codec`]: configurable codec behind a trait
//! - [`PackedVector`]: validated, serde-friendly packed string
//! - [`PackExt`] / [`UnpackExt`]: `.pack64()` / `.unpack64()` method syntax

pub mod codec;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod ext;
pub mod packed;

pub use codec::{decode, encode, encode_iter, Pack64Codec, VectorCodec};
pub use config::{CodecConfig, Rounding};
pub use decoder::{decode_bytes, decode_f32, header_exponent};
pub use encoder::{encode_with, scale_unit, select_exponent};
pub use error::{Pack64Error, Result};
pub use ext::{PackExt, UnpackExt};
pub use packed::PackedVector;
