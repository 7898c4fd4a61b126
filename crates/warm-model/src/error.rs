use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid batch size: {0} (must be at least 1)")]
    InvalidBatchSize(usize),
}
