use serde::{Deserialize, Serialize};
use crate::{Error, FixedWord256};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    U32(u32),
    Field(u64),
    Hash(FixedWord256),
    Address(FixedWord256),
    Bool(bool),
    FixedArray(Vec<Value>),
    String(String),
    Fields(Vec<u64>),
    Array(Vec<Value>),
    Tuple(Vec<Value>),
}

impl Value {
    pub fn address(hex: &str) -> Result<Self, Error> {
        FixedWord256::from_hex(hex).map(Value::Address)
    }

    pub fn hash(hex: &str) -> Result<Self, Error> {
        FixedWord256::from_hex(hex).map(Value::Hash)
    }

    /// Short description of the value's shape, used in mismatch reports.
    pub fn kind(&self) -> String {
        match self {
            Value::U32(_) => "u32".to_string(),
            Value::Field(_) => "field".to_string(),
            Value::Hash(_) => "hash".to_string(),
            Value::Address(_) => "address".to_string(),
            Value::Bool(_) => "bool".to_string(),
            Value::FixedArray(values) => format!("fixed array of {}", values.len()),
            Value::String(_) => "string".to_string(),
            Value::Fields(_) => "fields".to_string(),
            Value::Array(values) => format!("array of {}", values.len()),
            Value::Tuple(values) => format!("tuple of {}", values.len()),
        }
    }

    pub fn as_u32(&self) -> Result<u32, Error> {
        match self {
            Value::U32(value) => Ok(*value),
            _ => Err(Error::unexpected("u32", self)),
        }
    }

    pub fn as_field(&self) -> Result<u64, Error> {
        match self {
            Value::Field(value) => Ok(*value),
            _ => Err(Error::unexpected("field", self)),
        }
    }

    pub fn as_hash(&self) -> Result<&FixedWord256, Error> {
        match self {
            Value::Hash(hash) => Ok(hash),
            _ => Err(Error::unexpected("hash", self)),
        }
    }

    pub fn as_address(&self) -> Result<&FixedWord256, Error> {
        match self {
            Value::Address(address) => Ok(address),
            _ => Err(Error::unexpected("address", self)),
        }
    }

    pub fn as_boolean(&self) -> Result<bool, Error> {
        match self {
            Value::Bool(boolean) => Ok(*boolean),
            _ => Err(Error::unexpected("bool", self)),
        }
    }

    pub fn as_fixed_array(&self) -> Result<&[Value], Error> {
        match self {
            Value::FixedArray(values) => Ok(values),
            _ => Err(Error::unexpected("fixed array", self)),
        }
    }

    pub fn as_string(&self) -> Result<&str, Error> {
        match self {
            Value::String(string) => Ok(string),
            _ => Err(Error::unexpected("string", self)),
        }
    }

    pub fn as_fields(&self) -> Result<&[u64], Error> {
        match self {
            Value::Fields(fields) => Ok(fields),
            _ => Err(Error::unexpected("fields", self)),
        }
    }

    pub fn as_array(&self) -> Result<&[Value], Error> {
        match self {
            Value::Array(values) => Ok(values),
            _ => Err(Error::unexpected("array", self)),
        }
    }

    pub fn as_tuple(&self) -> Result<&[Value], Error> {
        match self {
            Value::Tuple(values) => Ok(values),
            _ => Err(Error::unexpected("tuple", self)),
        }
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::U32(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        assert_eq!(Value::U32(7).as_u32(), Ok(7));
        assert_eq!(Value::from("abc").as_string(), Ok("abc"));
        assert_eq!(
            Value::Field(7).as_u32(),
            Err(Error::UnexpectedValue { expected: "u32".to_string(), found: "field".to_string() }),
        );
        assert_eq!(
            Value::Array(vec![Value::U32(1)]).as_tuple(),
            Err(Error::UnexpectedValue { expected: "tuple".to_string(), found: "array of 1".to_string() }),
        );
    }

    #[test]
    fn test_address_from_hex() {
        let value = Value::address("0xff").unwrap();
        assert_eq!(value, Value::Address(FixedWord256([0, 0, 0, 0xff])));
        assert!(Value::hash("0xzz").is_err());
    }

    #[test]
    fn test_serde() {
        let value = Value::Tuple(vec![
            Value::U32(1),
            Value::Hash(FixedWord256([0, 0, 0, 2])),
            Value::Fields(vec![3, 4]),
        ]);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(
            json,
            r#"{"Tuple":[{"U32":1},{"Hash":"0x0000000000000000000000000000000000000000000000000000000000000002"},{"Fields":[3,4]}]}"#,
        );
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }
}
