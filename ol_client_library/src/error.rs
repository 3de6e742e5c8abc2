use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop an invocation before anything is sent.
#[derive(Error, Debug)]
pub enum InvokeError {
    #[error("Malformed header '{0}', expected 'Key: Value'")]
    MalformedHeader(String),

    #[error("Conflicting body sources: {used} is used, ignoring {ignored}")]
    ConflictingBodySource { used: &'static str, ignored: String },

    #[error("Unable to read body file '{}': {source}", path.display())]
    BodyFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl InvokeError {
    /// Errors caused by how the command was spelled, rather than by the environment
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            InvokeError::MalformedHeader(_) | InvokeError::ConflictingBodySource { .. }
        )
    }
}
