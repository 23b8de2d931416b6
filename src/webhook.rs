use crate::APP_USER_AGENT;
use reqwest::{Client, StatusCode};
use serde_json::json;
use thiserror::Error;
use tracing::{Instrument, debug, info_span};

// Message delivered by the health check.
const PROBE_MESSAGE: &str = "Test";

#[derive(Debug, Error)]
pub enum Error {
    #[error("webhook URL must start with http:// or https://")]
    Scheme,
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response status: {status}")]
    Status { status: StatusCode },
}

/// Deliver `content` to a Discord webhook.
///
/// Discord answers 204 No Content on success; any success status is
/// accepted.
/// # Errors
/// Returns [`Error::Scheme`] for a non-HTTP URL before any request is made,
/// [`Error::Transport`] when the request cannot be completed, and
/// [`Error::Status`] on a non-success response.
pub async fn send(webhook_url: &str, content: &str) -> Result<(), Error> {
    if !webhook_url.starts_with("http://") && !webhook_url.starts_with("https://") {
        return Err(Error::Scheme);
    }

    let client = Client::builder().user_agent(APP_USER_AGENT).build()?;

    let payload = json!({
        "content": content
    });

    let span = info_span!(
        "webhook.send",
        http.method = "POST",
        url = %webhook_url
    );
    let response = client
        .post(webhook_url)
        .json(&payload)
        .send()
        .instrument(span)
        .await?;

    if !response.status().is_success() {
        return Err(Error::Status {
            status: response.status(),
        });
    }

    debug!("webhook accepted message: {}", response.status());

    Ok(())
}

/// Probe a webhook by delivering a short test message.
/// # Errors
/// Fails exactly when [`send`] fails.
pub async fn check(webhook_url: &str) -> Result<(), Error> {
    send(webhook_url, PROBE_MESSAGE).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, anyhow};
    use serde_json::json;
    use std::net::TcpListener;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    #[tokio::test]
    async fn check_sends_probe_message() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/webhooks/1/token"))
            .and(body_json(json!({ "content": "Test" })))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        check(&format!("{}/api/webhooks/1/token", server.uri())).await?;
        Ok(())
    }

    #[tokio::test]
    async fn send_errors_on_failure_status() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/webhooks/1/token"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let result = send(&format!("{}/api/webhooks/1/token", server.uri()), "hello").await;
        match result {
            Err(Error::Status { status }) => assert_eq!(status.as_u16(), 404),
            other => return Err(anyhow!("expected status error, got {other:?}")),
        }
        Ok(())
    }

    #[tokio::test]
    async fn send_rejects_non_http_url() -> Result<()> {
        let result = send("ur webhook", "hello").await;
        match result {
            Err(Error::Scheme) => Ok(()),
            other => Err(anyhow!("expected scheme error, got {other:?}")),
        }
    }
}
