use thiserror::Error;

/// Errors raised while building a prober.
///
/// `Prober::probe` itself never fails; these only surface at construction time.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("invalid probe config: {0}")]
    InvalidConfig(String),
    #[error("invalid header value for {0}")]
    InvalidHeader(&'static str),
    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
}
