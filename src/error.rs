use thiserror::Error;

#[derive(Debug, Error)]
pub enum MuniError {
    #[error("missing API key; refusing to make a live request")]
    MissingApiKey,
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(#[from] chrono::ParseError),
    #[error("unexpected response shape: missing {0}")]
    Shape(&'static str),
    #[error("cache I/O error: {0}")]
    Io(#[from] std::io::Error),
}
