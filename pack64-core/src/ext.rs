//! Method-call sugar: `vector.pack64()` and `packed.unpack64()`.

use crate::codec::{decode, encode};
use crate::error::Result;

pub trait PackExt {
    fn pack64(&self) -> Result<String>;
}

impl PackExt for [f64] {
    fn pack64(&self) -> Result<String> {
        encode(self)
    }
}

impl PackExt for Vec<f64> {
    fn pack64(&self) -> Result<String> {
        encode(self)
    }
}

pub trait UnpackExt {
    fn unpack64(&self) -> Result<Vec<f64>>;
}

impl UnpackExt for str {
    fn unpack64(&self) -> Result<Vec<f64>> {
        decode(self)
    }
}

impl UnpackExt for String {
    fn unpack64(&self) -> Result<Vec<f64>> {
        decode(self)
    }
}
