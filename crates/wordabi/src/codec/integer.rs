use crate::codec::{frame, sealed};
use crate::{Value, Error};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct U32Codec;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FieldCodec;

impl sealed::AbiType for U32Codec {
    fn name(&self) -> &str { "u32" }
    fn is_dynamic(&self) -> bool { false }
    fn head_width(&self) -> usize { 1 }
}

impl sealed::AbiType for FieldCodec {
    fn name(&self) -> &str { "field" }
    fn is_dynamic(&self) -> bool { false }
    fn head_width(&self) -> usize { 1 }
}

impl sealed::Encoder for U32Codec {
    fn encode_frame(&self, value: &Value) -> Result<Vec<u64>, Error> {
        let value = value.as_u32()?;
        Ok(vec![value.into()])
    }
}

impl sealed::Decoder for U32Codec {
    fn decode_frame(&self, words: &[u64], offset: usize) -> Result<Value, Error> {
        let word = frame::read_word(words, offset)?;
        let value = u32::try_from(word).map_err(|_| Error::InvalidWord {
            ty: "u32".to_string(),
            word,
        })?;
        Ok(Value::U32(value))
    }
}

impl sealed::Encoder for FieldCodec {
    fn encode_frame(&self, value: &Value) -> Result<Vec<u64>, Error> {
        Ok(vec![value.as_field()?])
    }
}

impl sealed::Decoder for FieldCodec {
    fn decode_frame(&self, words: &[u64], offset: usize) -> Result<Value, Error> {
        frame::read_word(words, offset).map(Value::Field)
    }
}
