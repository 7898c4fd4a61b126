use crate::RunError;

/// Terminal outcome of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// All batches settled. Per-item failures are counted in `processed`.
    Completed { processed: usize, batches: usize },
    Failed(RunError),
}

impl Outcome {
    #[inline]
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed { .. })
    }

    /// Failure message, `None` for a completed run.
    pub fn message(&self) -> Option<String> {
        match self {
            Outcome::Completed { .. } => None,
            Outcome::Failed(err) => Some(err.to_string()),
        }
    }

    pub fn error(&self) -> Option<&RunError> {
        match self {
            Outcome::Completed { .. } => None,
            Outcome::Failed(err) => Some(err),
        }
    }
}

impl From<RunError> for Outcome {
    fn from(err: RunError) -> Self {
        Outcome::Failed(err)
    }
}
