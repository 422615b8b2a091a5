use crate::codec::{frame, sealed};
use crate::{Value, Error};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BooleanCodec;

impl sealed::AbiType for BooleanCodec {
    fn name(&self) -> &str { "bool" }
    fn is_dynamic(&self) -> bool { false }
    fn head_width(&self) -> usize { 1 }
}

impl sealed::Encoder for BooleanCodec {
    fn encode_frame(&self, value: &Value) -> Result<Vec<u64>, Error> {
        let boolean = value.as_boolean()?;
        Ok(vec![boolean as u64])
    }
}

impl sealed::Decoder for BooleanCodec {
    fn decode_frame(&self, words: &[u64], offset: usize) -> Result<Value, Error> {
        match frame::read_word(words, offset)? {
            0 => Ok(Value::Bool(false)),
            1 => Ok(Value::Bool(true)),
            word => Err(Error::InvalidWord { ty: "bool".to_string(), word }),
        }
    }
}
