use tiny_keccak::{Hasher, Keccak};
use wordabi::Type;
use crate::Error;

fn selector(signature: &str) -> [u8; 4] {
    let mut output = [0; 4];
    {
        let mut hasher = Keccak::v256();
        hasher.update(signature.as_bytes());
        hasher.finalize(&mut output);
    }
    output
}

/// Method id of a canonical signature: the first four digest bytes read as a
/// little-endian `u32`.
pub fn method_id(signature: &str) -> u64 {
    u32::from_le_bytes(selector(signature)) as u64
}

pub(crate) fn canonical<'a, I>(name: &str, types: I) -> String
where
    I: IntoIterator<Item = &'a Type>,
{
    let names = types.into_iter().map(Type::to_string).collect::<Vec<_>>();
    format!("{}({})", name, names.join(","))
}

/// Rewrites `signature` in canonical form, e.g. `f(u32, bool [2])` to `f(u32,bool[2])`.
pub fn normalize(signature: &str) -> Result<String, Error> {
    let (name, types) = wordabi::parse_signature(signature)?;
    Ok(canonical(&name, &types))
}
