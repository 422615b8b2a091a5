use crate::{Value, Error};

pub trait AbiType {
    /// Canonical type name, e.g. `u32[2]` or `(hash,string)`.
    fn name(&self) -> &str;
    fn is_dynamic(&self) -> bool;
    /// Words taken in the enclosing head region; 1 for dynamic types.
    fn head_width(&self) -> usize;
}

pub(crate) mod sealed {
    pub use super::AbiType;
    use super::{Value, Error};

    pub trait Encoder: AbiType {
        fn encode_frame(&self, value: &Value) -> Result<Vec<u64>, Error>;
    }

    pub trait Decoder: AbiType {
        fn decode_frame(&self, words: &[u64], offset: usize) -> Result<Value, Error>;
    }
}

pub trait Encoder: sealed::Encoder {
    fn encode(&self, value: &Value) -> Result<Vec<u64>, Error> {
        self.encode_frame(value)
    }
}

pub trait Decoder: sealed::Decoder {
    fn decode(&self, words: &[u64]) -> Result<Value, Error> {
        self.decode_frame(words, 0)
    }
}

pub trait Codec: Encoder + Decoder {}

impl<T: sealed::Decoder> Decoder for T {}
impl<T: sealed::Encoder> Encoder for T {}
impl<T: Encoder + Decoder> Codec for T {}
