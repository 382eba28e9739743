//! HTTP implementation of [`LightingBackend`] on top of `reqwest`.

use crate::client::LightingBackend;
use crate::domain::{ActionPayload, ConsoleError, Result, ResultSet};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response, Url};
use serde::Deserialize;
use std::time::Duration;

/// Error body returned by the service on failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Talks to the huelio service over HTTP.
///
/// No retries: a failed query is superseded by the next keystroke and a failed
/// submission is retried by the user.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    /// Creates a backend for the API rooted at `base_url`.
    ///
    /// `timeout` bounds each request; `None` leaves reqwest's default (no
    /// timeout).
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Config`] if `base_url` is not an absolute
    /// http(s) URL, or [`ConsoleError::Transport`] if the HTTP client cannot be
    /// built.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| ConsoleError::Config(format!("invalid base URL {base_url:?}: {e}")))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConsoleError::Config(format!(
                "base URL must be http or https, got {}",
                base_url.scheme()
            )));
        }

        let mut builder = Client::builder().user_agent(concat!("huelio-console/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Maps a non-success submission response to [`ConsoleError::SubmissionRejected`].
    async fn ensure_accepted(resp: Response) -> Result<Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body).map_or_else(
            |_| status.canonical_reason().unwrap_or("unknown status").to_string(),
            |b| b.message,
        );

        Err(ConsoleError::SubmissionRejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl LightingBackend for HttpBackend {
    async fn query(&self, term: &str) -> Result<ResultSet> {
        let resp = self
            .client
            .get(self.base_url.clone())
            .query(&[("query", term)])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ConsoleError::Transport(format!("query returned {status}")));
        }

        let body = resp.bytes().await?;
        ResultSet::from_json(&body)
    }

    async fn submit(&self, payload: &ActionPayload) -> Result<()> {
        let resp = self
            .client
            .post(self.base_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(payload.as_bytes().to_vec())
            .send()
            .await?;

        Self::ensure_accepted(resp).await.map(drop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_base_urls() {
        assert!(matches!(HttpBackend::new("not a url", None), Err(ConsoleError::Config(_))));
        assert!(matches!(HttpBackend::new("ftp://hub/api/", None), Err(ConsoleError::Config(_))));
        assert!(HttpBackend::new("http://localhost:8080/api/", Some(Duration::from_secs(2))).is_ok());
    }
}
