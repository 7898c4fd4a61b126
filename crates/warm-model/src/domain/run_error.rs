use thiserror::Error;

use crate::NO_LINKS_MESSAGE;

/// Reasons a run ends in `Failed`.
///
/// The `Display` output is the terminal message handed to the progress surface.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RunError {
    /// Run could not start; no request was issued.
    #[error("{0}")]
    Precondition(String),
    /// Unexpected fault in the scheduler's own control flow.
    #[error("internal error: {0}")]
    Internal(String),
    /// Run stopped at a batch boundary on request.
    #[error("run cancelled")]
    Cancelled,
}

impl RunError {
    pub fn no_links() -> Self {
        RunError::Precondition(NO_LINKS_MESSAGE.to_string())
    }
}
