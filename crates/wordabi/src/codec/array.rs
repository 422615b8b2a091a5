use crate::codec::headtail::{self, Chunk};
use crate::codec::{frame, sealed, AbiType, Codec, Encoder};
use crate::{Value, Error};

pub struct FixedArrayCodec {
    name: String,
    size: usize,
    codec: Box<dyn Codec>,
}

impl FixedArrayCodec {
    pub fn new(size: usize, codec: Box<dyn Codec>) -> Self {
        let name = format!("{}[{}]", codec.name(), size);
        Self { name, size, codec }
    }

    fn inner_head_size(&self) -> usize {
        self.codec.head_width().saturating_mul(self.size)
    }
}

impl sealed::AbiType for FixedArrayCodec {
    fn name(&self) -> &str { &self.name }
    fn is_dynamic(&self) -> bool { self.codec.is_dynamic() }

    fn head_width(&self) -> usize {
        if self.is_dynamic() { 1 } else { self.inner_head_size() }
    }
}

impl sealed::Encoder for FixedArrayCodec {
    fn encode_frame(&self, value: &Value) -> Result<Vec<u64>, Error> {
        let values = value.as_fixed_array()?;

        if values.len() != self.size {
            return Err(Error::unexpected(&self.name, value));
        }

        let chunks = encode_elements(self.codec.as_ref(), values)?;
        Ok(headtail::encode(chunks))
    }
}

impl sealed::Decoder for FixedArrayCodec {
    fn decode_frame(&self, words: &[u64], offset: usize) -> Result<Value, Error> {
        let codecs = std::iter::repeat(&self.codec).take(self.size);
        let values = headtail::decode(codecs, self.inner_head_size(), words, offset)?;
        Ok(Value::FixedArray(values))
    }
}

/// A `T[]` whose element takes no head words, such as `()[]`, can only be
/// empty: its length could not be checked against the input.
pub struct DynamicArrayCodec {
    name: String,
    codec: Box<dyn Codec>,
}

impl DynamicArrayCodec {
    pub fn new(codec: Box<dyn Codec>) -> Self {
        let name = format!("{}[]", codec.name());
        Self { name, codec }
    }
}

impl sealed::AbiType for DynamicArrayCodec {
    fn name(&self) -> &str { &self.name }
    fn is_dynamic(&self) -> bool { true }
    fn head_width(&self) -> usize { 1 }
}

impl sealed::Encoder for DynamicArrayCodec {
    fn encode_frame(&self, value: &Value) -> Result<Vec<u64>, Error> {
        let values = value.as_array()?;
        if self.codec.head_width() == 0 && !values.is_empty() {
            return Err(Error::unexpected(&self.name, value));
        }
        let chunks = encode_elements(self.codec.as_ref(), values)?;

        let mut buff = vec![values.len() as u64];
        buff.extend(headtail::encode(chunks));
        Ok(buff)
    }
}

impl sealed::Decoder for DynamicArrayCodec {
    fn decode_frame(&self, words: &[u64], offset: usize) -> Result<Value, Error> {
        let length = frame::read_length(words, offset)?;
        if self.codec.head_width() == 0 && length != 0 {
            return Err(Error::InvalidWord {
                ty: self.name.clone(),
                word: length as u64,
            });
        }
        let head_size = frame::span(length, self.codec.head_width())?;

        let codecs = std::iter::repeat(&self.codec).take(length);
        let values = headtail::decode(codecs, head_size, words, offset + 1)?;
        Ok(Value::Array(values))
    }
}

fn encode_elements(codec: &dyn Codec, values: &[Value]) -> Result<Vec<Chunk>, Error> {
    values.iter()
        .map(|value| {
            let words = codec.encode(value)?;
            Ok(Chunk { dynamic: codec.is_dynamic(), words })
        })
        .collect()
}
