#![allow(clippy::unwrap_used)]
//! Client contract tests against a local one-shot HTTP fixture.
//!
//! The fixture is a plain TCP listener answering a single request with a
//! canned response, so the tests cover the real request/response cycle
//! (form encoding, status classification, decode-before-status) without a
//! mocking framework or network access.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use dpl_cli::deepl::{
    Client, ClientConfig, Error, SourceLang, TargetLang, TranslationApi, default_http_client,
};

/// Starts a listener that serves one canned response and hands back the
/// raw request it received.
async fn serve_once(status_line: &str, body: &str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {status_line}\r\n\
         Content-Type: application/json\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\r\n{body}",
        body.len()
    );

    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut raw = Vec::new();
        let mut chunk = [0u8; 4096];
        while !request_complete(&raw) {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&chunk[..n]);
        }

        let _ = tx.send(String::from_utf8_lossy(&raw).into_owned());
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
    });

    (format!("http://{addr}"), rx)
}

fn request_complete(raw: &[u8]) -> bool {
    let text = String::from_utf8_lossy(raw);
    let Some(header_end) = text.find("\r\n\r\n") else {
        return false;
    };

    let content_length = text
        .lines()
        .take_while(|line| !line.is_empty())
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse::<usize>().ok()
            } else {
                None
            }
        })
        .unwrap_or(0);

    raw.len() >= header_end + 4 + content_length
}

fn make_client(base_url: &str) -> Client {
    let config = ClientConfig {
        base_url: base_url.to_string(),
        auth_key: "test_key".to_string(),
    };
    Client::new(config, default_http_client().unwrap()).unwrap()
}

fn request_body(raw: &str) -> &str {
    raw.split_once("\r\n\r\n").map_or("", |(_, body)| body)
}

#[tokio::test]
async fn test_translate_decodes_successful_response() {
    let body = r#"{"translations":[{"text":"こんにちは","detected_source_language":"EN"}]}"#;
    let (base_url, request) = serve_once("200 OK", body).await;

    let client = make_client(&base_url);
    let response = client
        .translate(SourceLang::En, TargetLang::Ja, "hello")
        .await
        .unwrap();

    assert_eq!(response.translations.len(), 1);
    assert_eq!(response.translations[0].text, "こんにちは");
    assert_eq!(response.translations[0].detected_source_language, "EN");

    let raw = request.await.unwrap();
    assert!(raw.starts_with("POST /v2/translate HTTP/1.1"));
    assert!(raw.to_lowercase().contains("application/x-www-form-urlencoded"));

    let form = request_body(&raw);
    assert!(form.contains("auth_key=test_key"));
    assert!(form.contains("text=hello"));
    assert!(form.contains("target_lang=JA"));
    assert!(form.contains("source_lang=EN"));
}

#[tokio::test]
async fn test_translate_omits_source_lang_for_auto_detection() {
    let body = r#"{"translations":[{"text":"hi","detected_source_language":"EN"}]}"#;
    let (base_url, request) = serve_once("200 OK", body).await;

    let client = make_client(&base_url);
    client
        .translate(SourceLang::Unspecified, TargetLang::Ja, "hi")
        .await
        .unwrap();

    let raw = request.await.unwrap();
    let form = request_body(&raw);
    assert!(!form.contains("source_lang"));
    assert!(form.contains("target_lang=JA"));
}

#[tokio::test]
async fn test_translate_forbidden_carries_both_messages() {
    let (base_url, _request) = serve_once("403 Forbidden", r#"{"message":"Wrong key"}"#).await;

    let client = make_client(&base_url);
    let err = client
        .translate(SourceLang::En, TargetLang::Ja, "hello")
        .await
        .unwrap_err();

    let text = err.to_string();
    assert!(matches!(err, Error::Service(_)));
    assert!(text.contains("Authorization failed. Please supply a valid auth_key parameter."));
    assert!(text.contains("Wrong key"));
}

#[tokio::test]
async fn test_translate_quota_exceeded_uses_static_description() {
    let (base_url, _request) = serve_once("456 Quota Exceeded", r#"{"translations":[]}"#).await;

    let client = make_client(&base_url);
    let err = client
        .translate(SourceLang::En, TargetLang::Ja, "hello")
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Quota exceeded. The character limit has been reached."
    );
}

#[tokio::test]
async fn test_translate_rejects_undecodable_body() {
    let (base_url, _request) = serve_once("200 OK", "not json").await;

    let client = make_client(&base_url);
    let err = client
        .translate(SourceLang::En, TargetLang::Ja, "hello")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn test_translate_decodes_body_before_looking_at_status() {
    // An undecodable 5xx body surfaces as a decode failure, not as the
    // status classification.
    let (base_url, _request) = serve_once("503 Service Unavailable", "<html>down</html>").await;

    let client = make_client(&base_url);
    let err = client
        .translate(SourceLang::En, TargetLang::Ja, "hello")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn test_usage_decodes_counts_and_sends_only_auth_key() {
    let body = r#"{"character_count":30315,"character_limit":1000000}"#;
    let (base_url, request) = serve_once("200 OK", body).await;

    let client = make_client(&base_url);
    let usage = client.usage().await.unwrap();

    assert_eq!(usage.character_count, 30315);
    assert_eq!(usage.character_limit, 1_000_000);

    let raw = request.await.unwrap();
    assert!(raw.starts_with("POST /v2/usage HTTP/1.1"));

    let form = request_body(&raw);
    assert_eq!(form, "auth_key=test_key");
}

#[tokio::test]
async fn test_usage_failure_carries_service_message() {
    let (base_url, _request) = serve_once("403 Forbidden", r#"{"message":"Wrong key"}"#).await;

    let client = make_client(&base_url);
    let err = client.usage().await.unwrap_err();

    let text = err.to_string();
    assert!(text.contains("Authorization failed"));
    assert!(text.contains("Wrong key"));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_a_request_error() {
    // Port 1 is never listening; the connection is refused immediately.
    let client = make_client("http://127.0.0.1:1");
    let err = client
        .translate(SourceLang::En, TargetLang::Ja, "hello")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Request(_)));
}
