use crate::codec::{frame, sealed};
use crate::{Value, Error};

pub struct FieldsCodec;

impl sealed::AbiType for FieldsCodec {
    fn name(&self) -> &str { "fields" }
    fn is_dynamic(&self) -> bool { true }
    fn head_width(&self) -> usize { 1 }
}

impl sealed::Encoder for FieldsCodec {
    fn encode_frame(&self, value: &Value) -> Result<Vec<u64>, Error> {
        let fields = value.as_fields()?;

        let mut buff = Vec::with_capacity(1 + fields.len());
        buff.push(fields.len() as u64);
        buff.extend_from_slice(fields);

        Ok(buff)
    }
}

impl sealed::Decoder for FieldsCodec {
    fn decode_frame(&self, words: &[u64], offset: usize) -> Result<Value, Error> {
        let length = frame::read_length(words, offset)?;
        let fields = frame::read(words, offset + 1, length)?;
        Ok(Value::Fields(fields.to_vec()))
    }
}
