use std::ops::Deref;
use serde::{Deserialize, Serialize};
use wordabi::{Type, Value};

/// A named function or event parameter. Serializes its type by canonical name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    #[serde(rename = "type", with = "type_name")]
    pub ty: Type,
    /// Event parameters only: the value is carried in a log topic rather
    /// than in the log data.
    #[serde(default, skip_serializing_if = "is_false")]
    pub indexed: bool,
}

impl Param {
    pub fn new(name: &str, ty: Type) -> Self {
        Self {
            name: name.to_string(),
            ty,
            indexed: false,
        }
    }

    pub fn new_indexed(name: &str, ty: Type) -> Self {
        Self {
            indexed: true,
            ..Self::new(name, ty)
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

mod type_name {
    use serde::{Deserialize, Deserializer, Serializer};
    use wordabi::Type;

    pub fn serialize<S: Serializer>(ty: &Type, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(ty)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Type, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Decoded values paired with the parameters they were decoded for, in
/// declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedParams(Vec<(Param, Value)>);

impl DecodedParams {
    /// Value of the first parameter called `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.iter()
            .find(|(param, _)| param.name == name)
            .map(|(_, value)| value)
    }

    pub fn into_values(self) -> Vec<Value> {
        self.0.into_iter().map(|(_, value)| value).collect()
    }
}

impl Deref for DecodedParams {
    type Target = [(Param, Value)];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<(Param, Value)>> for DecodedParams {
    fn from(params: Vec<(Param, Value)>) -> Self {
        Self(params)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn decoded() -> DecodedParams {
        DecodedParams::from(vec![
            (Param::new("to", Type::U32), Value::U32(7)),
            (Param::new("", Type::Array(Box::new(Type::Bool))), Value::Array(vec![Value::Bool(true)])),
        ])
    }

    #[test]
    fn test_lookup() {
        let params = decoded();
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("to"), Some(&Value::U32(7)));
        assert_eq!(params.get("from"), None);
        assert_eq!(params[1].1, Value::Array(vec![Value::Bool(true)]));
        assert_eq!(params.into_values(), vec![Value::U32(7), Value::Array(vec![Value::Bool(true)])]);
    }

    #[test]
    fn test_param_serde() {
        let param = Param::new("x", Type::FixedArray(Box::new(Type::U32), 2));
        let json = serde_json::to_string(&param).unwrap();
        assert_eq!(json, r#"{"name":"x","type":"u32[2]"}"#);
        assert_eq!(serde_json::from_str::<Param>(&json).unwrap(), param);

        assert!(serde_json::from_str::<Param>(r#"{"name":"x","type":"qbit"}"#).is_err());

        let indexed = Param::new_indexed("from", Type::Address);
        let json = serde_json::to_string(&indexed).unwrap();
        assert_eq!(json, r#"{"name":"from","type":"address","indexed":true}"#);
        assert_eq!(serde_json::from_str::<Param>(&json).unwrap(), indexed);
    }

    #[test]
    fn test_decoded_params_serde() {
        let json = serde_json::to_string(&decoded()).unwrap();
        assert_eq!(
            json,
            r#"[[{"name":"to","type":"u32"},{"U32":7}],[{"name":"","type":"bool[]"},{"Array":[{"Bool":true}]}]]"#,
        );
        assert_eq!(serde_json::from_str::<DecodedParams>(&json).unwrap(), decoded());
    }
}
