use wordabi::{Decoder, FixedWord256, Type, Value};
use crate::abi::params::{DecodedParams, Param};
use crate::abi::signature::canonical;
use crate::Error;

/// An event a contract emits. Indexed inputs are read from the log topics,
/// the others from the log data.
///
/// Topic hashes are produced by the emitting runtime and are not computed
/// here. A topic given through [`Event::with_topic`] lets an [`Abi`](crate::Abi)
/// resolve logs of this event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    name: String,
    inputs: Vec<Param>,
    anonymous: bool,
    topic: Option<FixedWord256>,
}

impl Event {
    pub fn new(name: &str, inputs: Vec<Param>, anonymous: bool) -> Self {
        Self {
            name: name.to_string(),
            inputs,
            anonymous,
            topic: None,
        }
    }

    pub fn with_topic(mut self, topic: FixedWord256) -> Self {
        self.topic = Some(topic);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inputs(&self) -> &[Param] {
        &self.inputs
    }

    /// Anonymous events do not spend their first topic on the event topic.
    pub fn is_anonymous(&self) -> bool {
        self.anonymous
    }

    pub fn topic(&self) -> Option<&FixedWord256> {
        self.topic.as_ref()
    }

    pub fn signature(&self) -> String {
        canonical(&self.name, self.inputs.iter().map(|param| &param.ty))
    }

    /// Decodes a log's topics and data into the event's inputs, in declaration order.
    pub fn decode_data_from_slice(&self, topics: &[FixedWord256], data: &[u64]) -> Result<DecodedParams, Error> {
        let skip = usize::from(!self.anonymous);
        let needed = skip + self.inputs.iter().filter(|param| param.indexed).count();
        let missing = Error::MissingTopics { needed, available: topics.len() };
        if topics.len() < needed {
            return Err(missing);
        }

        let data_types = self.inputs.iter()
            .filter(|param| !param.indexed)
            .map(|param| &param.ty);
        let mut data_values = wordabi::decode(data_types, data)?.into_iter();
        let mut topics = topics[skip..].iter();

        let mut decoded = Vec::with_capacity(self.inputs.len());
        for param in &self.inputs {
            let value = if param.indexed {
                match topics.next() {
                    Some(topic) => decode_topic(&param.ty, topic)?,
                    None => return Err(missing),
                }
            } else {
                match data_values.next() {
                    Some(value) => value,
                    None => return Err(missing),
                }
            };
            decoded.push((param.clone(), value));
        }

        Ok(DecodedParams::from(decoded))
    }
}

/// One-word types sit in the last word of the topic and four-word types
/// take all of it. Any other type is logged as a hash of its value.
fn decode_topic(ty: &Type, topic: &FixedWord256) -> Result<Value, Error> {
    let value = match ty {
        Type::U32 | Type::Bool | Type::Field => ty.codec().decode(&topic.words()[3..])?,
        Type::Hash | Type::Address => ty.codec().decode(topic.words())?,
        _ => Value::Hash(*topic),
    };
    Ok(value)
}
