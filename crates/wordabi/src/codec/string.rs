use crate::codec::{frame, sealed};
use crate::{Value, Error};

const BYTES_PER_WORD: usize = 8;

pub struct StringCodec;

impl sealed::AbiType for StringCodec {
    fn name(&self) -> &str { "string" }
    fn is_dynamic(&self) -> bool { true }
    fn head_width(&self) -> usize { 1 }
}

impl sealed::Encoder for StringCodec {
    fn encode_frame(&self, value: &Value) -> Result<Vec<u64>, Error> {
        let string = value.as_string()?;
        let bytes = string.as_bytes();

        let mut buff = Vec::with_capacity(1 + packed_len(bytes.len()));
        buff.push(bytes.len() as u64);
        buff.extend(pack(bytes));

        Ok(buff)
    }
}

impl sealed::Decoder for StringCodec {
    fn decode_frame(&self, words: &[u64], offset: usize) -> Result<Value, Error> {
        let length = frame::read_length(words, offset)?;
        let packed = frame::read(words, offset + 1, packed_len(length))?;

        let mut bytes = unpack(packed);
        if bytes[length..].iter().any(|&byte| byte != 0) {
            return Err(Error::InvalidWord {
                ty: "string".to_string(),
                word: packed[packed.len() - 1],
            });
        }
        bytes.truncate(length);

        Ok(Value::String(String::from_utf8(bytes)?))
    }
}

fn packed_len(length: usize) -> usize {
    length / BYTES_PER_WORD + usize::from(length % BYTES_PER_WORD != 0)
}

/// Packs bytes big-endian, eight to a word, zero-padding the last word on the right.
fn pack(bytes: &[u8]) -> impl Iterator<Item = u64> + '_ {
    bytes.chunks(BYTES_PER_WORD).map(|chunk| {
        let mut buff = [0u8; BYTES_PER_WORD];
        buff[..chunk.len()].copy_from_slice(chunk);
        u64::from_be_bytes(buff)
    })
}

fn unpack(words: &[u64]) -> Vec<u8> {
    words.iter().flat_map(|word| word.to_be_bytes()).collect()
}
