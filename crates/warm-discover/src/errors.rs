use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiscoverError {
    #[error("container not found: #{0}")]
    ContainerNotFound(String),

    #[error("{}", warm_model::NO_LINKS_MESSAGE)]
    NoLinks,

    #[error("invalid container id: {0}")]
    InvalidContainer(String),

    #[error("invalid base url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("failed to parse page: {0}")]
    Parse(String),

    #[error("page request failed: {0}")]
    Http(#[from] reqwest::Error),
}
