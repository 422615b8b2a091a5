//! Word-oriented ABI codec.
//!
//! Values are laid out as a flat sequence of `u64` words using a head/tail
//! scheme: static values sit inline in the head, dynamic values are referenced
//! from the head by a word offset and appended to the tail.

extern crate hex;
extern crate num_bigint;
extern crate pest;
#[macro_use]
extern crate pest_derive;
extern crate serde;
#[macro_use]
extern crate thiserror;

pub use codec::{AbiType, Codec, Decoder, Encoder};
pub use error::Error;
pub use parser::{parse_signature, parse_type};
pub use types::Type;
pub use value::Value;
pub use word::FixedWord256;

use codec::TupleCodec;

mod codec;
mod error;
mod grammar;
mod parser;
mod types;
mod value;
mod word;

/// Encodes `values` as a parameter list of `types`.
///
/// A value that does not fit its declared type fails with
/// [`Error::TypeMismatch`] carrying the position of the offending parameter.
pub fn encode<'a, I>(types: I, values: &[Value]) -> Result<Vec<u64>, Error>
where
    I: IntoIterator<Item = &'a Type>,
{
    TupleCodec::from_types(types).encode_values(values)
}

/// Decodes a parameter list of `types` from `words`.
pub fn decode<'a, I>(types: I, words: &[u64]) -> Result<Vec<Value>, Error>
where
    I: IntoIterator<Item = &'a Type>,
{
    TupleCodec::from_types(types).decode_values(words)
}
