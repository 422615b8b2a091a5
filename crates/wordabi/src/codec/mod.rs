pub(crate) use codec::sealed;

pub use codec::{AbiType, Codec, Encoder, Decoder};
pub(crate) use address::AddressCodec;
pub(crate) use array::{FixedArrayCodec, DynamicArrayCodec};
pub(crate) use boolean::BooleanCodec;
pub(crate) use fields::FieldsCodec;
pub(crate) use hash::HashCodec;
pub(crate) use integer::{FieldCodec, U32Codec};
pub(crate) use string::StringCodec;
pub(crate) use tuple::TupleCodec;

mod codec;
mod frame;
mod headtail;
mod address;
mod array;
mod boolean;
mod fields;
mod hash;
mod integer;
mod string;
mod tuple;
