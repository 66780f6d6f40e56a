use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("Invalid card token: {0:?}")]
    InvalidCard(String),
    #[error("Missing argument '{name}' in {command:?}")]
    MissingArgument {
        command: &'static str,
        name: &'static str,
    },
    #[error("Invalid integer for '{name}': {value:?}")]
    InvalidInteger { name: &'static str, value: String },
    #[error("Unexpected trailing argument {0:?}")]
    TrailingArgument(String),
}
