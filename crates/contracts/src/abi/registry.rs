use std::collections::HashMap;
use wordabi::{FixedWord256, Value};
use crate::abi::event::Event;
use crate::abi::function::Function;
use crate::abi::options::AbiOptions;
use crate::abi::params::DecodedParams;
use crate::abi::signature::normalize;
use crate::Error;

/// Registry of the functions a contract exposes, indexed by method id, and
/// of the events it emits.
#[derive(Clone, Debug)]
pub struct Abi {
    functions: Vec<Function>,
    index: HashMap<u64, usize>,
    events: Vec<Event>,
}

impl Abi {
    /// Builds the registry. When two functions share a method id the first
    /// one declared is the one calls resolve to.
    pub fn new(functions: Vec<Function>) -> Self {
        let mut index = HashMap::with_capacity(functions.len());
        for (position, function) in functions.iter().enumerate() {
            if let Some(&first) = index.get(&function.method_id()) {
                let first: &Function = &functions[first];
                log::debug!(
                    "{} shadowed by {} (method id {:#x})",
                    function.signature(),
                    first.signature(),
                    function.method_id(),
                );
                continue;
            }
            index.insert(function.method_id(), position);
        }

        log::debug!("Registered {} functions", index.len());
        Self { functions, index, events: Vec::new() }
    }

    pub fn with_events(mut self, events: Vec<Event>) -> Self {
        log::debug!("Registered {} events", events.len());
        self.events = events;
        self
    }

    pub fn with_options(functions: Vec<Function>, options: &AbiOptions) -> Result<Self, Error> {
        if options.reject_duplicate_ids {
            let mut seen = HashMap::with_capacity(functions.len());
            for function in &functions {
                if let Some(first) = seen.insert(function.method_id(), function) {
                    return Err(Error::DuplicateIdentifier {
                        id: function.method_id(),
                        first: first.signature(),
                        second: function.signature(),
                    });
                }
            }
        }
        Ok(Self::new(functions))
    }

    pub fn functions(&self) -> &[Function] {
        &self.functions
    }

    /// First function declared with `name`.
    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.iter().find(|function| function.name() == name)
    }

    /// Looks a function up by signature. Whitespace and type name case are
    /// not significant.
    pub fn function_by_signature(&self, signature: &str) -> Result<&Function, Error> {
        let canonical = normalize(signature)?;
        self.functions.iter()
            .find(|function| function.signature() == canonical)
            .ok_or_else(|| {
                log::debug!("No function with signature {}", canonical);
                Error::UnknownSignature(signature.to_string())
            })
    }

    pub fn function_by_method_id(&self, method_id: u64) -> Result<&Function, Error> {
        log::trace!("Looking up method id {:#x}", method_id);
        match self.index.get(&method_id) {
            Some(&position) => Ok(&self.functions[position]),
            None => {
                log::debug!("No function with method id {:#x}", method_id);
                Err(Error::FunctionNotFound(method_id))
            }
        }
    }

    /// Resolves the function an encoded call targets from its trailing word.
    pub fn find_function_by_identifier(&self, words: &[u64]) -> Result<&Function, Error> {
        match words.last() {
            Some(&method_id) => self.function_by_method_id(method_id),
            None => Err(Error::Abi(wordabi::Error::TruncatedInput { needed: 1, available: 0 })),
        }
    }

    pub fn encode_input_with_signature(&self, signature: &str, values: &[Value]) -> Result<Vec<u64>, Error> {
        self.function_by_signature(signature)?.encode(values)
    }

    /// Decodes an encoded call into its target function and arguments.
    pub fn decode_input_from_slice(&self, words: &[u64]) -> Result<(&Function, DecodedParams), Error> {
        let function = self.find_function_by_identifier(words)?;
        let decoded = function.decode_input(&words[..words.len() - 1])?;
        Ok((function, decoded))
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// First event declared with `name`.
    pub fn event(&self, name: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.name() == name)
    }

    /// Decodes a log, resolving its event from the first topic.
    ///
    /// Only events registered with a topic can be resolved; anonymous events
    /// are decoded through [`Event::decode_data_from_slice`] directly.
    pub fn decode_log_from_slice(&self, topics: &[FixedWord256], data: &[u64]) -> Result<(&Event, DecodedParams), Error> {
        let topic = topics.first().ok_or(Error::MissingTopics { needed: 1, available: 0 })?;
        log::trace!("Looking up event topic {}", topic);

        let event = self.events.iter()
            .find(|event| !event.is_anonymous() && event.topic() == Some(topic))
            .ok_or_else(|| {
                log::debug!("No event with topic {}", topic);
                Error::EventNotFound(*topic)
            })?;

        let decoded = event.decode_data_from_slice(topics, data)?;
        Ok((event, decoded))
    }

    pub fn decode_output_from_slice(&self, signature: &str, words: &[u64]) -> Result<DecodedParams, Error> {
        self.function_by_signature(signature)?.decode_output(words)
    }
}

impl FromIterator<Function> for Abi {
    fn from_iter<I: IntoIterator<Item = Function>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
