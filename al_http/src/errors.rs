use al_core::ProviderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HttpError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("unexpected status: HTTP {0}")]
    BadStatus(u16),

    #[error("response is missing a USD price")]
    MissingPrice,
}

pub type Result<T> = std::result::Result<T, HttpError>;

impl From<HttpError> for ProviderError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::BadStatus(status) => ProviderError::Status(status),
            HttpError::MissingPrice => ProviderError::MissingPrice,
            HttpError::RequestFailed(err) => ProviderError::Transport(err.to_string()),
            HttpError::JsonError(err) => ProviderError::Transport(err.to_string()),
        }
    }
}
