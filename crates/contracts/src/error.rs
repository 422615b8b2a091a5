#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("abi error: {0}")]
    Abi(#[from] wordabi::Error),

    #[error("No function with method id {0:#x}")]
    FunctionNotFound(u64),

    #[error("No function with signature {0}")]
    UnknownSignature(String),

    #[error("Method id {id:#x} is shared by {first} and {second}")]
    DuplicateIdentifier { id: u64, first: String, second: String },

    #[error("No event with topic {0}")]
    EventNotFound(wordabi::FixedWord256),

    #[error("Log has {available} topics, {needed} needed")]
    MissingTopics { needed: usize, available: usize },
}
