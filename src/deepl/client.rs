//! DeepL v2 API client.
//!
//! One client instance issues single-shot requests: no retries, no
//! backoff. The JSON body is decoded before the status code is looked at,
//! because the service puts structured error payloads inside 4xx/5xx
//! bodies and the resulting error messages depend on them.

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::deepl::error::{Error, ServiceFailure};
use crate::deepl::language::{SourceLang, TargetLang};
use crate::deepl::response::{TranslateResponse, UsageResponse};

const TRANSLATE_PATH: &str = "/v2/translate";
const USAGE_PATH: &str = "/v2/usage";

/// Configuration of the DeepL API client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API, e.g. `https://api-free.deepl.com`.
    pub base_url: String,
    /// Authentication key for the `auth_key` request parameter.
    pub auth_key: String,
}

/// Capability set of the DeepL v2 endpoint.
///
/// See: <https://www.deepl.com/docs-api/>
#[async_trait]
pub trait TranslationApi: Send + Sync {
    /// Translates `text` into `target`, letting the service auto-detect
    /// the source language when `source` is unspecified.
    async fn translate(
        &self,
        source: SourceLang,
        target: TargetLang,
        text: &str,
    ) -> Result<TranslateResponse, Error>;

    /// Fetches character usage and quota for the current billing period.
    async fn usage(&self) -> Result<UsageResponse, Error>;
}

/// The concrete client talking to the DeepL service.
#[derive(Debug)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    auth_key: String,
}

impl Client {
    /// Creates a client from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the auth key is empty or the
    /// base URL does not parse, so a misconfigured client can never issue
    /// a request.
    pub fn new(config: ClientConfig, http: reqwest::Client) -> Result<Self, Error> {
        if Url::parse(&config.base_url).is_err() {
            return Err(Error::InvalidConfig(format!(
                "failed to parse url: {}",
                config.base_url
            )));
        }
        if config.auth_key.is_empty() {
            return Err(Error::InvalidConfig(
                "empty authentication key".to_string(),
            ));
        }

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_key: config.auth_key,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn post_form<T>(
        &self,
        path: &str,
        form: &[(&'static str, String)],
    ) -> Result<(StatusCode, T), Error>
    where
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(self.endpoint(path))
            .form(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        let decoded = serde_json::from_slice(&body)?;

        Ok((status, decoded))
    }
}

#[async_trait]
impl TranslationApi for Client {
    async fn translate(
        &self,
        source: SourceLang,
        target: TargetLang,
        text: &str,
    ) -> Result<TranslateResponse, Error> {
        if text.is_empty() {
            return Err(Error::EmptyInput);
        }

        let form = translate_form(&self.auth_key, source, target, text);
        let (status, response): (_, TranslateResponse) =
            self.post_form(TRANSLATE_PATH, &form).await?;

        if status != StatusCode::OK {
            return Err(Error::Service(ServiceFailure {
                status: status.as_u16(),
                message: response.message,
            }));
        }

        Ok(response)
    }

    async fn usage(&self) -> Result<UsageResponse, Error> {
        let form = base_form(&self.auth_key);
        let (status, response): (_, UsageResponse) = self.post_form(USAGE_PATH, &form).await?;

        if status != StatusCode::OK {
            return Err(Error::Service(ServiceFailure {
                status: status.as_u16(),
                message: response.message,
            }));
        }

        Ok(response)
    }
}

/// Builds the form body of a translate request.
///
/// `source_lang` is included only when a source language is set; omitting
/// the field entirely (rather than sending an empty value) is what makes
/// the service auto-detect the input language.
///
/// See: <https://www.deepl.com/docs-api/translating-text#request>
fn translate_form(
    auth_key: &str,
    source: SourceLang,
    target: TargetLang,
    text: &str,
) -> Vec<(&'static str, String)> {
    let mut form = base_form(auth_key);

    form.push(("text", text.to_string()));
    form.push(("target_lang", target.to_string()));

    if source.is_set() {
        form.push(("source_lang", source.to_string()));
    }

    form
}

fn base_form(auth_key: &str) -> Vec<(&'static str, String)> {
    vec![("auth_key", auth_key.to_string())]
}
