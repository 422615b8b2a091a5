use std::fmt;
use std::str::FromStr;
use num_bigint::BigUint;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use crate::Error;

/// A 256-bit value held as four `u64` words, most significant word first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedWord256(pub [u64; 4]);

impl FixedWord256 {
    pub const ZERO: FixedWord256 = FixedWord256([0; 4]);
    pub const WORDS: usize = 4;

    /// Parses up to 64 hex digits, optionally `0x`-prefixed.
    ///
    /// Shorter inputs are zero-extended on the most significant side.
    pub fn from_hex(source: &str) -> Result<Self, Error> {
        let digits = source
            .strip_prefix("0x")
            .or_else(|| source.strip_prefix("0X"))
            .unwrap_or(source);

        if digits.is_empty() || digits.len() > 64 {
            return Err(Error::MalformedHex(source.to_string()));
        }

        let padded = format!("{:0>64}", digits);
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(padded, &mut bytes)
            .map_err(|_| Error::MalformedHex(source.to_string()))?;

        Ok(Self::from_be_bytes(bytes))
    }

    /// Canonical form: `0x` followed by exactly 64 lowercase digits.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.to_be_bytes()))
    }

    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        let mut words = [0u64; 4];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut buff = [0u8; 8];
            buff.copy_from_slice(chunk);
            *word = u64::from_be_bytes(buff);
        }
        Self(words)
    }

    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        for (chunk, word) in bytes.chunks_exact_mut(8).zip(self.0) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        bytes
    }

    pub fn words(&self) -> &[u64; 4] {
        &self.0
    }
}

impl From<[u64; 4]> for FixedWord256 {
    fn from(words: [u64; 4]) -> Self {
        Self(words)
    }
}

impl From<u64> for FixedWord256 {
    fn from(value: u64) -> Self {
        Self([0, 0, 0, value])
    }
}

impl From<FixedWord256> for BigUint {
    fn from(value: FixedWord256) -> Self {
        BigUint::from_bytes_be(&value.to_be_bytes())
    }
}

impl TryFrom<&BigUint> for FixedWord256 {
    type Error = Error;

    fn try_from(value: &BigUint) -> Result<Self, Self::Error> {
        let digits = value.to_bytes_be();
        if digits.len() > 32 {
            return Err(Error::Overflow);
        }

        let mut bytes = [0u8; 32];
        bytes[32 - digits.len()..].copy_from_slice(&digits);
        Ok(Self::from_be_bytes(bytes))
    }
}

impl FromStr for FixedWord256 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for FixedWord256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for FixedWord256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for FixedWord256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        Self::from_hex(&source).map_err(de::Error::custom)
    }
}
