//! DeepL v2 API response types.
//!
//! The service returns a JSON body on every status code; error payloads
//! carry a top-level `message` field alongside (or instead of) the regular
//! fields, so both shapes decode into the same structs.

use std::fmt;

use serde::Deserialize;

/// Response of the "Translate text" endpoint.
///
/// See: <https://www.deepl.com/docs-api/translating-text#response>
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranslateResponse {
    /// Error message supplied by the service on failure responses.
    #[serde(default)]
    pub message: Option<String>,
    /// Translations in the order the text fragments were submitted.
    #[serde(default)]
    pub translations: Vec<Translation>,
}

/// A single translated fragment.
#[derive(Debug, Clone, Deserialize)]
pub struct Translation {
    /// Language the service detected the input to be in.
    #[serde(default)]
    pub detected_source_language: String,
    /// The translated text.
    pub text: String,
}

/// Response of the "Monitoring usage" endpoint.
///
/// See: <https://www.deepl.com/docs-api/other-functions/monitoring-usage>
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UsageResponse {
    /// Error message supplied by the service on failure responses.
    #[serde(default)]
    pub message: Option<String>,
    /// Characters translated so far in the current billing period.
    #[serde(default)]
    pub character_count: u64,
    /// Character limit of the current billing period.
    #[serde(default)]
    pub character_limit: u64,
}

/// An HTTP status code returned by the API, rendered as the fixed
/// human-readable description the documentation assigns to it.
///
/// Codes the documentation does not list render as "Internal error" when
/// they are 5xx and as an empty string otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiStatus(pub u16);

impl fmt::Display for ApiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self.0 {
            400 => "Bad request. Please check error message and your parameters.",
            403 => "Authorization failed. Please supply a valid auth_key parameter.",
            404 => "The requested resource could not be found.",
            413 => "The request size exceeds the limit.",
            429 => "Too many requests. Please wait and resend your request.",
            456 => "Quota exceeded. The character limit has been reached.",
            503 => "Resource currently unavailable. Try again later.",
            code if code >= 500 => "Internal error",
            _ => "",
        };
        f.write_str(description)
    }
}
