use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("missing capability: {0}")]
    MissingCapability(String),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("Could not parse problem slug from URL.")]
    InvalidUrl,
    #[error("request failed")]
    Transport(#[from] rquest::Error),
    #[error("Unexpected response.")]
    UnexpectedResponse,
}
