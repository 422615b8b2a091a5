#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Malformed hex string: {0:?}")]
    MalformedHex(String),

    #[error("Expected {expected}, found {found}")]
    UnexpectedValue { expected: String, found: String },

    #[error("Parameter {index}: expected {expected}, found {found}")]
    TypeMismatch { index: usize, expected: String, found: String },

    #[error("Truncated input: needed {needed} words, only {available} available")]
    TruncatedInput { needed: usize, available: usize },

    #[error("Offset {offset} is outside of a {len} word frame")]
    OffsetOutOfRange { offset: u64, len: usize },

    #[error("Word {word:#x} is not a valid {ty}")]
    InvalidWord { ty: String, word: u64 },

    #[error("Invalid UTF-8 string: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("Unrecognized type: {0}")]
    UnrecognizedType(String),

    #[error("Syntax error: {0}")]
    Syntax(String),

    #[error("Value does not fit in 256 bits")]
    Overflow,
}

impl Error {
    pub(crate) fn unexpected(expected: &str, found: &crate::Value) -> Self {
        Error::UnexpectedValue {
            expected: expected.to_string(),
            found: found.kind(),
        }
    }

    pub(crate) fn at_parameter(self, index: usize) -> Self {
        match self {
            Error::UnexpectedValue { expected, found } => Error::TypeMismatch { index, expected, found },
            error => error,
        }
    }
}
