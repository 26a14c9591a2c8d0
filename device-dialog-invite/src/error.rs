use thiserror::Error;

/// Why a directory request was rejected.
///
/// Requests are one-shot: every variant is final, nothing is retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("request failed: {0}")]
    Request(String),

    #[error("service responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl DirectoryError {
    /// Rejection reason suitable for surfacing next to the failed action.
    pub fn reason(&self) -> String {
        self.to_string()
    }
}
