// src/error.rs
use crate::health::Status;

#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("--example or CHECK_EXAMPLE environment variable is required")]
    MissingExample,

    #[error("duplicate service name in endpoint registry: {0}")]
    DuplicateService(String),

    #[error("invalid URL for service {service}: {source}")]
    InvalidUrl {
        service: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("failed to read event from stdin: {0}")]
    Stdin(#[from] std::io::Error),

    #[error("failed to parse event: {0}")]
    Event(#[from] serde_json::Error),

    #[error("event does not contain check")]
    EventMissingCheck,
}

impl CheckError {
    /// Check state reported when this error ends a run.
    pub fn status(&self) -> Status {
        match self {
            CheckError::MissingExample => Status::Warning,
            _ => Status::Unknown,
        }
    }
}
