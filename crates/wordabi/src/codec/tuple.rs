use crate::codec::headtail::{self, Chunk};
use crate::codec::{sealed, AbiType, Codec, Encoder};
use crate::{Type, Value, Error};

pub struct TupleCodec {
    name: String,
    codecs: Vec<Box<dyn Codec>>,
}

impl TupleCodec {
    pub fn new(codecs: Vec<Box<dyn Codec>>) -> Self {
        let names = codecs.iter().map(|codec| codec.name()).collect::<Vec<_>>();
        let name = format!("({})", names.join(","));
        Self { name, codecs }
    }

    pub fn from_types<'a, I>(types: I) -> Self
    where
        I: IntoIterator<Item = &'a Type>,
    {
        Self::new(types.into_iter().map(Type::codec).collect())
    }

    fn inner_head_size(&self) -> usize {
        self.codecs.iter().fold(0, |acc, codec| acc.saturating_add(codec.head_width()))
    }

    /// Encodes a parameter list, reporting mismatches with the parameter position.
    pub fn encode_values(&self, values: &[Value]) -> Result<Vec<u64>, Error> {
        if values.len() != self.codecs.len() {
            let index = values.len().min(self.codecs.len());
            return Err(Error::TypeMismatch {
                index,
                expected: self.codecs.get(index).map_or("nothing", |codec| codec.name()).to_string(),
                found: values.get(index).map_or_else(|| "nothing".to_string(), Value::kind),
            });
        }

        let chunks = self.codecs.iter()
            .zip(values)
            .enumerate()
            .map(|(index, (codec, value))| {
                let words = codec.encode(value).map_err(|err| err.at_parameter(index))?;
                Ok(Chunk { dynamic: codec.is_dynamic(), words })
            })
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(headtail::encode(chunks))
    }

    pub fn decode_values(&self, words: &[u64]) -> Result<Vec<Value>, Error> {
        headtail::decode(&self.codecs, self.inner_head_size(), words, 0)
    }
}

impl sealed::AbiType for TupleCodec {
    fn name(&self) -> &str { &self.name }

    fn is_dynamic(&self) -> bool {
        self.codecs.iter().any(|codec| codec.is_dynamic())
    }

    fn head_width(&self) -> usize {
        if self.is_dynamic() { 1 } else { self.inner_head_size() }
    }
}

impl sealed::Encoder for TupleCodec {
    fn encode_frame(&self, value: &Value) -> Result<Vec<u64>, Error> {
        let values = value.as_tuple()?;

        if values.len() != self.codecs.len() {
            return Err(Error::unexpected(&self.name, value));
        }

        let chunks = self.codecs.iter()
            .zip(values)
            .map(|(codec, value)| {
                let words = codec.encode(value)?;
                Ok(Chunk { dynamic: codec.is_dynamic(), words })
            })
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(headtail::encode(chunks))
    }
}

impl sealed::Decoder for TupleCodec {
    fn decode_frame(&self, words: &[u64], offset: usize) -> Result<Value, Error> {
        let values = headtail::decode(&self.codecs, self.inner_head_size(), words, offset)?;
        Ok(Value::Tuple(values))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use crate::codec::{Decoder, BooleanCodec, DynamicArrayCodec, FieldsCodec, HashCodec};
    use crate::codec::{U32Codec, StringCodec};
    use crate::FixedWord256;

    #[test]
    fn test_empty_tuple() {
        let codec = TupleCodec::new(vec![]);
        assert_eq!(codec.name(), "()");
        assert_eq!(codec.encode(&Value::Tuple(vec![])).unwrap(), Vec::<u64>::new());
        assert_eq!(codec.decode(&[]).unwrap(), Value::Tuple(vec![]));
    }

    #[test]
    fn test_static_tuple() {
        let codec = TupleCodec::new(vec![Box::new(BooleanCodec), Box::new(HashCodec), Box::new(U32Codec)]);
        assert!(!codec.is_dynamic());
        assert_eq!(codec.head_width(), 6);

        let value = Value::Tuple(vec![
            Value::Bool(true),
            Value::Hash(FixedWord256([9, 8, 7, 6])),
            Value::U32(0xFFFF),
        ]);
        let words = codec.encode(&value).unwrap();
        assert_eq!(words, vec![1, 9, 8, 7, 6, 0xFFFF]);
        assert_eq!(codec.decode(&words).unwrap(), value);
    }

    #[test]
    fn test_array_nesting_tuple() {
        let codec = TupleCodec::new(vec![
            Box::new(BooleanCodec),
            Box::new(DynamicArrayCodec::new(Box::new(U32Codec))),
        ]);

        let value = Value::Tuple(vec![
            Value::Bool(true),
            Value::Array(vec![Value::U32(3), Value::U32(4)]),
        ]);
        let words = codec.encode(&value).unwrap();
        assert_eq!(words, vec![1, 2, 2, 3, 4]);
        assert_eq!(codec.decode(&words).unwrap(), value);
    }

    #[test]
    fn test_complex_tuple() {
        // (u32, (u32, u32[]))
        let codec = TupleCodec::new(vec![
            Box::new(U32Codec),
            Box::new(TupleCodec::new(vec![
                Box::new(U32Codec),
                Box::new(DynamicArrayCodec::new(Box::new(U32Codec))),
            ])),
        ]);
        assert_eq!(codec.name(), "(u32,(u32,u32[]))");

        let value = Value::Tuple(vec![
            Value::U32(1),
            Value::Tuple(vec![
                Value::U32(2),
                Value::Array(vec![Value::U32(3), Value::U32(4)]),
            ]),
        ]);
        let words = codec.encode(&value).unwrap();
        assert_eq!(words, vec![1, 2, 2, 2, 2, 3, 4]);
        assert_eq!(codec.decode(&words).unwrap(), value);
    }

    #[test]
    fn test_more_complex_tuple() {
        // (u32, u32[], hash, fields, string)
        let codec = TupleCodec::new(vec![
            Box::new(U32Codec),
            Box::new(DynamicArrayCodec::new(Box::new(U32Codec))),
            Box::new(HashCodec),
            Box::new(FieldsCodec),
            Box::new(StringCodec),
        ]);

        let value = Value::Tuple(vec![
            Value::U32(0x123),
            Value::Array(vec![Value::U32(0x456), Value::U32(0x789)]),
            Value::Hash(FixedWord256([0, 0, 0, 0xabc])),
            Value::Fields(vec![]),
            Value::String("Hello, world!".to_string()),
        ]);

        let words = codec.encode(&value).unwrap();
        assert_eq!(
            words,
            vec![
                0x123,
                8,                      // u32[] offset
                0, 0, 0, 0xabc,
                11,                     // fields offset
                12,                     // string offset
                2, 0x456, 0x789,
                0,
                13, 0x48656c6c6f2c2077, 0x6f726c6421000000,
            ]
        );
        assert_eq!(codec.decode(&words).unwrap(), value);
    }

    #[test]
    fn test_tuple_arity_mismatch() {
        let codec = TupleCodec::new(vec![Box::new(U32Codec), Box::new(U32Codec)]);
        assert_eq!(
            codec.encode(&Value::Tuple(vec![Value::U32(1)])),
            Err(Error::UnexpectedValue { expected: "(u32,u32)".to_string(), found: "tuple of 1".to_string() }),
        );
    }

    #[test]
    fn test_encode_values_mismatch_index() {
        let codec = TupleCodec::from_types(&[Type::U32, Type::String, Type::Bool]);
        assert_eq!(
            codec.encode_values(&[Value::U32(1), Value::String("a".to_string()), Value::U32(0)]),
            Err(Error::TypeMismatch { index: 2, expected: "bool".to_string(), found: "u32".to_string() }),
        );
    }

    #[test]
    fn test_nested_offset_out_of_range() {
        // ((u32, string))
        let codec = TupleCodec::new(vec![
            Box::new(TupleCodec::new(vec![Box::new(U32Codec), Box::new(StringCodec)])),
        ]);

        let value = Value::Tuple(vec![Value::Tuple(vec![Value::U32(7), Value::from("a")])]);
        let words = codec.encode(&value).unwrap();
        assert_eq!(words, vec![1, 7, 2, 1, 0x6100000000000000]);

        let mut corrupted = words.clone();
        corrupted[2] = 9;
        assert_eq!(codec.decode(&corrupted), Err(Error::OffsetOutOfRange { offset: 9, len: 4 }));
    }

    #[test]
    fn test_zero_width_members() {
        // ((), u32[0], bool)
        let codec = TupleCodec::from_types(&[
            Type::Tuple(vec![]),
            Type::FixedArray(Box::new(Type::U32), 0),
            Type::Bool,
        ]);
        assert_eq!(codec.head_width(), 1);

        let value = Value::Tuple(vec![Value::Tuple(vec![]), Value::FixedArray(vec![]), Value::Bool(true)]);
        let words = codec.encode(&value).unwrap();
        assert_eq!(words, vec![1]);
        assert_eq!(codec.decode(&words).unwrap(), value);
    }
}
