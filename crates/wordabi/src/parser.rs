use pest::iterators::Pair;
use pest::Parser;
use crate::grammar::{TypeGrammar, Rule};
use crate::{Type, Error};

struct TypeParser;

impl TypeParser {
    fn accept_type(&self, pair: Pair<Rule>) -> Result<Type, Error> {
        let mut inner = pair.into_inner();
        let base = match inner.next() {
            Some(pair) if pair.as_rule() == Rule::TupleType => self.accept_tuple_type(pair)?,
            Some(pair) if pair.as_rule() == Rule::BasicType => self.accept_basic_type(pair)?,
            other => return Err(unexpected_rule("Type", other)),
        };

        match inner.next() {
            None => Ok(base),
            Some(array) => self.accept_array(array, base),
        }
    }

    fn accept_tuple_type(&self, pair: Pair<Rule>) -> Result<Type, Error> {
        let types = pair.into_inner()
            .map(|pair| self.accept_type(pair))
            .collect::<Result<Vec<_>, Error>>()?;
        Ok(Type::Tuple(types))
    }

    /// Suffixes apply left to right: `u32[2][]` is a dynamic array of `u32[2]`.
    fn accept_array(&self, pair: Pair<Rule>, ty: Type) -> Result<Type, Error> {
        let mut ty = ty;
        for pair in pair.into_inner() {
            ty = match pair.as_rule() {
                Rule::DynamicArray => Type::Array(Box::new(ty)),
                Rule::ConstArray => {
                    let digits = pair.as_str().trim_matches(|c: char| !c.is_ascii_digit());
                    let size = digits.parse::<usize>()
                        .map_err(|_| Error::Syntax(format!("array size {} is out of range", digits)))?;
                    Type::FixedArray(Box::new(ty), size)
                }
                rule => return Err(Error::Syntax(format!("unexpected {:?} in array suffix", rule))),
            };
        }
        Ok(ty)
    }

    fn accept_basic_type(&self, pair: Pair<Rule>) -> Result<Type, Error> {
        let base_name = pair.as_str().to_lowercase();
        let ty = match base_name.as_str() {
            "u32" => Type::U32,
            "field" => Type::Field,
            "hash" => Type::Hash,
            "address" => Type::Address,
            "bool" => Type::Bool,
            "string" => Type::String,
            "fields" => Type::Fields,
            _ => return Err(Error::UnrecognizedType(base_name)),
        };
        Ok(ty)
    }

    fn parse(&self, input: &str) -> Result<Type, Error> {
        let mut pairs = TypeGrammar::parse(Rule::Signature, input)
            .map_err(|err| Error::Syntax(err.to_string()))?;
        match pairs.next() {
            Some(pair) => self.accept_type(pair),
            None => Err(Error::Syntax(format!("empty type: {:?}", input))),
        }
    }

    fn parse_function(&self, input: &str) -> Result<(String, Vec<Type>), Error> {
        let mut pairs = TypeGrammar::parse(Rule::FunctionSignature, input)
            .map_err(|err| Error::Syntax(err.to_string()))?;

        let name = match pairs.next() {
            Some(pair) if pair.as_rule() == Rule::Name => pair.as_str().to_string(),
            other => return Err(unexpected_rule("FunctionSignature", other)),
        };
        let params = match pairs.next() {
            Some(pair) if pair.as_rule() == Rule::TupleType => pair,
            other => return Err(unexpected_rule("FunctionSignature", other)),
        };

        match self.accept_tuple_type(params)? {
            Type::Tuple(types) => Ok((name, types)),
            ty => Err(Error::Syntax(format!("expected a parameter list, found {}", ty))),
        }
    }
}

fn unexpected_rule(parent: &str, pair: Option<Pair<Rule>>) -> Error {
    match pair {
        Some(pair) => Error::Syntax(format!("{} can not expand to {:?}", parent, pair.as_rule())),
        None => Error::Syntax(format!("{} is incomplete", parent)),
    }
}

/// Parses a canonical type name such as `(u32,string)[2][]`.
pub fn parse_type(input: &str) -> Result<Type, Error> {
    TypeParser.parse(input)
}

/// Parses a function signature such as `transfer(address,u32)` into its name
/// and parameter types.
pub fn parse_signature(input: &str) -> Result<(String, Vec<Type>), Error> {
    TypeParser.parse_function(input)
}
