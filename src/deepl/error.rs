//! Error taxonomy of the DeepL client.

use std::fmt;

use thiserror::Error;

use crate::deepl::response::ApiStatus;

/// Errors produced by the DeepL client.
///
/// Every error is returned to the immediate caller; the client never
/// retries or recovers locally.
#[derive(Debug, Error)]
pub enum Error {
    /// Empty auth key or unparseable base URL. Raised at client
    /// construction, never at request time.
    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),

    /// Unrecognized target language code.
    #[error("unknown target language: '{0}'")]
    InvalidLanguage(String),

    /// Empty text passed to translate. No request is sent.
    #[error("empty text")]
    EmptyInput,

    /// Transport-level failure (DNS, connect, timeout, TLS).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body is not valid JSON of the expected shape.
    #[error("failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The service answered with a status other than 200.
    #[error("{0}")]
    Service(ServiceFailure),
}

/// A non-200 answer from the service.
///
/// Displays as the fixed description for the status code, with the
/// service-supplied message appended when one was present in the body.
#[derive(Debug, Clone)]
pub struct ServiceFailure {
    pub status: u16,
    pub message: Option<String>,
}

impl fmt::Display for ServiceFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = ApiStatus(self.status);
        match self.message.as_deref() {
            Some(message) if !message.is_empty() => {
                write!(f, "{description} ({message})")
            }
            _ => write!(f, "{description}"),
        }
    }
}
