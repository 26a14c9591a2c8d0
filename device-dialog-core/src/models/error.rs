use thiserror::Error;

/// Errors raised around the dialog core: configuration, preference storage
/// and the rendering collaborator.
///
/// Classification and composition never fail; they have no variant here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DialogError {
    #[error("configuration failed: {0}")]
    ConfigurationFailed(String),

    #[error("storage error: {0}")]
    StorageError(String),

    #[error("render failed: {0}")]
    RenderFailed(String),
}
