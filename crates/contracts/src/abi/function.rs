use wordabi::{Type, Value};
use crate::abi::params::{DecodedParams, Param};
use crate::abi::signature::{canonical, method_id};
use crate::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Function {
    name: String,
    inputs: Vec<Param>,
    outputs: Vec<Param>,
    method_id: u64,
}

impl Function {
    pub fn new(name: &str, inputs: Vec<Param>, outputs: Vec<Param>) -> Self {
        let signature = canonical(name, inputs.iter().map(|param| &param.ty));
        Self {
            name: name.to_string(),
            method_id: method_id(&signature),
            inputs,
            outputs,
        }
    }

    /// Builds a function with unnamed parameters from type names.
    pub fn parse(name: &str, args: &[&str], returns: &[&str]) -> Result<Self, Error> {
        let inputs = unnamed(args)?;
        let outputs = unnamed(returns)?;
        Ok(Self::new(name, inputs, outputs))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inputs(&self) -> &[Param] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[Param] {
        &self.outputs
    }

    pub fn method_id(&self) -> u64 {
        self.method_id
    }

    /// Canonical signature, e.g. `transfer(address,u32)`.
    pub fn signature(&self) -> String {
        canonical(&self.name, self.inputs.iter().map(|param| &param.ty))
    }

    /// Encodes a call: the argument region followed by the method id.
    pub fn encode(&self, values: &[Value]) -> Result<Vec<u64>, Error> {
        let mut words = wordabi::encode(self.inputs.iter().map(|param| &param.ty), values)?;
        words.push(self.method_id);
        Ok(words)
    }

    pub fn encode_output(&self, values: &[Value]) -> Result<Vec<u64>, Error> {
        let words = wordabi::encode(self.outputs.iter().map(|param| &param.ty), values)?;
        Ok(words)
    }

    /// Decodes the argument region of a call, without the trailing method id.
    pub fn decode_input(&self, words: &[u64]) -> Result<DecodedParams, Error> {
        decode_params(&self.inputs, words)
    }

    pub fn decode_output(&self, words: &[u64]) -> Result<DecodedParams, Error> {
        decode_params(&self.outputs, words)
    }

    #[cfg(test)]
    pub(crate) fn with_method_id(mut self, method_id: u64) -> Self {
        self.method_id = method_id;
        self
    }
}

fn unnamed(types: &[&str]) -> Result<Vec<Param>, Error> {
    types.iter()
        .map(|name| name.parse::<Type>().map(|ty| Param::new("", ty)).map_err(Error::from))
        .collect()
}

fn decode_params(params: &[Param], words: &[u64]) -> Result<DecodedParams, Error> {
    let values = wordabi::decode(params.iter().map(|param| &param.ty), words)?;
    let decoded = params.iter()
        .cloned()
        .zip(values)
        .collect::<Vec<_>>();
    Ok(DecodedParams::from(decoded))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use wordabi::FixedWord256;
    use super::*;

    fn test_function() -> Function {
        Function::new(
            "funname",
            vec![
                Param::new("", Type::Address),
                Param::new("x", Type::FixedArray(Box::new(Type::U32), 2)),
            ],
            vec![],
        )
    }

    #[test]
    fn test_function_signature() {
        let function = test_function();
        assert_eq!(function.name(), "funname");
        assert_eq!(function.signature(), "funname(address,u32[2])");
        assert_eq!(function.method_id(), 0xf146ff09);
    }

    #[test]
    fn test_parse() {
        let function = Function::parse("funname", &["address", "u32 [2]"], &["bool"]).unwrap();
        assert_eq!(function.signature(), "funname(address,u32[2])");
        assert_eq!(function.method_id(), test_function().method_id());
        assert_eq!(function.outputs(), &[Param::new("", Type::Bool)]);

        assert_eq!(
            Function::parse("f", &["uint256"], &[]),
            Err(Error::Abi(wordabi::Error::UnrecognizedType("uint256".to_string()))),
        );
    }

    #[test]
    fn test_encode() {
        let function = test_function();
        let values = vec![
            Value::Address(FixedWord256([1, 2, 3, 4])),
            Value::FixedArray(vec![Value::U32(37), Value::U32(109)]),
        ];

        let encoded = function.encode(&values).unwrap();
        assert_eq!(encoded, vec![1, 2, 3, 4, 37, 109, 0xf146ff09]);

        let decoded = function.decode_input(&encoded[..encoded.len() - 1]).unwrap();
        assert_eq!(decoded.get("x"), Some(&values[1]));
        assert_eq!(decoded.into_values(), values);
    }

    #[test]
    fn test_encode_type_mismatch() {
        let function = test_function();
        let err = function.encode(&[
            Value::Address(FixedWord256::ZERO),
            Value::FixedArray(vec![Value::U32(37)]),
        ]);
        assert_eq!(
            err,
            Err(Error::Abi(wordabi::Error::TypeMismatch {
                index: 1,
                expected: "u32[2]".to_string(),
                found: "fixed array of 1".to_string(),
            })),
        );
    }

    #[test]
    fn test_outputs() {
        let function = Function::parse("getName", &[], &["string", "u32"]).unwrap();
        let values = vec![Value::from("Tether USD"), Value::U32(6)];

        let encoded = function.encode_output(&values).unwrap();
        assert_eq!(encoded, vec![2, 6, 10, 0x5465746865722055, 0x5344000000000000]);

        let decoded = function.decode_output(&encoded).unwrap();
        assert_eq!(decoded.into_values(), values);
    }
}
