use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LogicError {
    #[error("Unrecognized operation: {0:?}")]
    UnknownOperator(String),

    #[error("\"{operator}\" {reason}")]
    MalformedArguments { operator: String, reason: String },

    #[error("Logic tree nesting exceeds the maximum depth of {0}.")]
    DepthExceeded(usize),

    #[error("Invalid logic text: {0}")]
    Decode(String),
}

impl LogicError {
    pub(crate) fn malformed(operator: &str, reason: impl Into<String>) -> Self {
        LogicError::MalformedArguments {
            operator: operator.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for LogicError {
    fn from(err: serde_json::Error) -> Self {
        LogicError::Decode(err.to_string())
    }
}
