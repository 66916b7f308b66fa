//! Error types for Endpoint Steps

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StepError>;

/// Boxed transport failure, so fake clients can fail without a `reqwest::Error`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Coarse classification of a [`StepError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A context field was read before the step that sets it ran.
    Precondition,
    /// The request could not be completed.
    Transport,
    /// The response did not match the expectation.
    Assertion,
    /// The HTTP client or its configuration could not be constructed.
    Setup,
}

#[derive(Error, Debug)]
pub enum StepError {
    #[error("No API endpoint set: add `I have the API endpoint \"<url>\"` before sending a request")]
    MissingUrl,

    #[error("No response recorded: add `I send a GET request` before checking the status code")]
    MissingResponse,

    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: BoxError,
    },

    #[error("Expected status code {expected}, got {actual}")]
    StatusMismatch { expected: u16, actual: u16 },

    #[error("HTTP client setup failed: {source}")]
    ClientSetup {
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: serde_json::Error,
    },
}

impl StepError {
    pub fn transport(url: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Transport {
            url: url.into(),
            source: source.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingUrl | Self::MissingResponse => ErrorKind::Precondition,
            Self::Transport { .. } => ErrorKind::Transport,
            Self::StatusMismatch { .. } => ErrorKind::Assertion,
            Self::ClientSetup { .. } | Self::Config { .. } => ErrorKind::Setup,
        }
    }
}
