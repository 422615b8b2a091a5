use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::codec::{
    AddressCodec,
    BooleanCodec,
    Codec,
    DynamicArrayCodec,
    FieldCodec,
    FieldsCodec,
    FixedArrayCodec,
    HashCodec,
    StringCodec,
    TupleCodec,
    U32Codec,
};
use crate::Error;

/// Available ABI types.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    U32,
    /// Native field element, one word.
    Field,
    /// Four-word digest.
    Hash,
    /// Four-word address.
    Address,
    Bool,
    FixedArray(Box<Type>, usize),
    String,
    /// Variable-length list of field elements.
    Fields,
    Array(Box<Type>),
    Tuple(Vec<Type>),
}

impl Type {
    /// Whether the encoded size depends on the value rather than on the type alone.
    pub fn is_dynamic(&self) -> bool {
        match self {
            Type::U32 | Type::Field | Type::Hash | Type::Address | Type::Bool => false,
            Type::String | Type::Fields | Type::Array(_) => true,
            Type::FixedArray(ty, _) => ty.is_dynamic(),
            Type::Tuple(tys) => tys.iter().any(Type::is_dynamic),
        }
    }

    /// Number of words the type takes in a head region.
    ///
    /// Dynamic types take a single offset slot.
    pub fn head_width(&self) -> usize {
        if self.is_dynamic() {
            return 1;
        }

        match self {
            Type::U32 | Type::Field | Type::Bool => 1,
            Type::Hash | Type::Address => 4,
            Type::FixedArray(ty, size) => ty.head_width().saturating_mul(*size),
            Type::Tuple(tys) => tys.iter().fold(0, |acc, ty| acc.saturating_add(ty.head_width())),
            Type::String | Type::Fields | Type::Array(_) => 1,
        }
    }

    pub fn codec(&self) -> Box<dyn Codec> {
        match self {
            Type::U32 => Box::new(U32Codec),
            Type::Field => Box::new(FieldCodec),
            Type::Hash => Box::new(HashCodec),
            Type::Address => Box::new(AddressCodec),
            Type::Bool => Box::new(BooleanCodec),
            Type::FixedArray(ty, size) => Box::new(FixedArrayCodec::new(*size, ty.codec())),
            Type::String => Box::new(StringCodec),
            Type::Fields => Box::new(FieldsCodec),
            Type::Array(ty) => Box::new(DynamicArrayCodec::new(ty.codec())),
            Type::Tuple(tys) => Box::new(TupleCodec::from_types(tys)),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::U32 => write!(f, "u32"),
            Type::Field => write!(f, "field"),
            Type::Hash => write!(f, "hash"),
            Type::Address => write!(f, "address"),
            Type::Bool => write!(f, "bool"),
            Type::FixedArray(ty, size) => write!(f, "{}[{}]", ty, size),
            Type::String => write!(f, "string"),
            Type::Fields => write!(f, "fields"),
            Type::Array(ty) => write!(f, "{}[]", ty),
            Type::Tuple(tys) => {
                let names = tys.iter().map(Type::to_string).collect::<Vec<_>>();
                write!(f, "({})", names.join(","))
            }
        }
    }
}

impl FromStr for Type {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse_type(s)
    }
}
