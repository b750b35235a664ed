use thiserror::Error;

/// A selected file could not be turned into its transport encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not read {file_name}: {reason}")]
pub struct ReadError {
    pub file_name: String,
    pub reason: String,
}

impl ReadError {
    pub fn new(file_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            reason: reason.into(),
        }
    }
}

/// The request could not be sent or no response came back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("request failed: {0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// Everything that can turn a submission into `Outcome::Failed`.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Read(#[from] ReadError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A response arrived with a non-2xx status. The body is kept verbatim
    /// for diagnostics and never parsed.
    #[error("server rejected the request with status {status}")]
    ServerRejection { status: u16, body: String },

    #[error("could not serialize the request body: {0}")]
    Serialize(#[from] serde_json::Error),
}
