use crate::codec::{frame, sealed};
use crate::{FixedWord256, Value, Error};

pub struct AddressCodec;

impl sealed::AbiType for AddressCodec {
    fn name(&self) -> &str { "address" }
    fn is_dynamic(&self) -> bool { false }
    fn head_width(&self) -> usize { FixedWord256::WORDS }
}

impl sealed::Encoder for AddressCodec {
    fn encode_frame(&self, value: &Value) -> Result<Vec<u64>, Error> {
        let address = value.as_address()?;
        Ok(address.words().to_vec())
    }
}

impl sealed::Decoder for AddressCodec {
    fn decode_frame(&self, words: &[u64], offset: usize) -> Result<Value, Error> {
        read_word256(words, offset).map(Value::Address)
    }
}

/// Reads the four words of a 256-bit value, most significant first.
pub(crate) fn read_word256(words: &[u64], offset: usize) -> Result<FixedWord256, Error> {
    let slice = frame::read(words, offset, FixedWord256::WORDS)?;
    let mut value = [0u64; 4];
    value.copy_from_slice(slice);
    Ok(FixedWord256(value))
}
