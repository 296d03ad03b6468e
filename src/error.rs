use http::StatusCode;
use thiserror::Error;

use crate::response::ApiError;

#[derive(Debug, Error)]
pub enum AdyenError {
    #[error("Could not initialize client: {0}")]
    Initialization(String),
    #[error("HTTP error: {context}: {source}")]
    Http {
        context: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Could not serialize request: {0}")]
    Serialization(#[source] serde_json::Error),
    #[error("Could not deserialize response: {0}")]
    Deserialization(#[source] serde_json::Error),
    #[error("Response with status {status} has no body to deserialize")]
    EmptyBody { status: StatusCode },
    #[error("Adyen API error (HTTP {status}): {error}")]
    Api {
        status: StatusCode,
        error: ApiError,
    },
    #[error("Unexpected HTTP status {status}: {body}")]
    HttpStatus { status: StatusCode, body: String },
    #[error("No HMAC key configured. HPP requests must be signed")]
    MissingHmac,
    #[error("HMAC key is not valid hex: {0}")]
    InvalidHmacKey(#[from] hex::FromHexError),
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Unknown environment: {0}. Expected one of test, live")]
    InvalidEnvironment(String),
}

impl AdyenError {
    /// The HTTP status of the failed call, if the failure came from the server rather than the
    /// transport. This is always the status line of the response, never a value from its body.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AdyenError::Api { status, .. } => Some(*status),
            AdyenError::HttpStatus { status, .. } => Some(*status),
            AdyenError::EmptyBody { status } => Some(*status),
            AdyenError::Http { source, .. } => source.status(),
            _ => None,
        }
    }
}
