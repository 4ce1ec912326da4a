//! Error types for the component state machines

/// Contract violations raised by the chat components.
///
/// Everything else in the library is infallible presentation logic; I/O
/// plumbing (terminal, config files) goes through `anyhow` instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    #[error("status ticker needs at least one phrase")]
    EmptyPhrases,

    #[error("option '{0}' is not in the current option list")]
    UnknownOption(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type ChatResult<T> = std::result::Result<T, ChatError>;
