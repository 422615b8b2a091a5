use crate::codec::address::read_word256;
use crate::codec::sealed;
use crate::{FixedWord256, Value, Error};

pub struct HashCodec;

impl sealed::AbiType for HashCodec {
    fn name(&self) -> &str { "hash" }
    fn is_dynamic(&self) -> bool { false }
    fn head_width(&self) -> usize { FixedWord256::WORDS }
}

impl sealed::Encoder for HashCodec {
    fn encode_frame(&self, value: &Value) -> Result<Vec<u64>, Error> {
        let hash = value.as_hash()?;
        Ok(hash.words().to_vec())
    }
}

impl sealed::Decoder for HashCodec {
    fn decode_frame(&self, words: &[u64], offset: usize) -> Result<Value, Error> {
        read_word256(words, offset).map(Value::Hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{Encoder, Decoder};

    #[test]
    fn test_hash_codec() {
        let hash = Value::Hash(FixedWord256([1, 2, 3, 4]));
        assert_eq!(HashCodec.encode(&hash), Ok(vec![1, 2, 3, 4]));
        assert_eq!(HashCodec.decode(&[9, 1, 2, 3, 4][1..]), Ok(hash));
    }

    #[test]
    fn test_hash_decoder_at_offset() {
        let words = [7, 1, 2, 3, 4];
        let value = sealed::Decoder::decode_frame(&HashCodec, &words, 1).unwrap();
        assert_eq!(value, Value::Hash(FixedWord256([1, 2, 3, 4])));
    }
}
