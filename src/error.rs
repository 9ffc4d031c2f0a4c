#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Invalid url: {0}")]
    InvalidUrl(String),
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Bad status: {0}")]
    Status(reqwest::StatusCode),
    #[error("Decode error: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
}
