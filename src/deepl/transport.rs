//! Pre-configured HTTP transport.

use std::time::Duration;

use crate::deepl::error::Error;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const READ_TIMEOUT: Duration = Duration::from_secs(5);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(60);

/// Builds the HTTP client the DeepL client sends requests through.
///
/// Connection establishment, reads, and the request as a whole are each
/// bounded to 5 seconds; idle pooled connections are dropped after a
/// minute. Callers get no say in the pooling policy.
pub fn default_http_client() -> Result<reqwest::Client, Error> {
    reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .read_timeout(READ_TIMEOUT)
        .timeout(REQUEST_TIMEOUT)
        .pool_idle_timeout(POOL_IDLE_TIMEOUT)
        .build()
        .map_err(Error::from)
}
