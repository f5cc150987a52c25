mod client;
mod error;
mod language;
mod response;
mod transport;

pub use client::{Client, ClientConfig, TranslationApi};
pub use error::{Error, ServiceFailure};
pub use language::{SUPPORTED_TARGETS, SourceLang, TargetLang};
pub use response::{ApiStatus, TranslateResponse, Translation, UsageResponse};
pub use transport::default_http_client;
