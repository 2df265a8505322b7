use crate::domain::model::{ScoringRequest, ScoringResponse};
use crate::domain::ports::ScoringBackend;
use crate::utils::error::{Result, ScreeningError};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;

/// JSON-over-HTTP scoring backend.
pub struct HttpScoringBackend {
    client: Client,
    timeout: Option<Duration>,
}

impl HttpScoringBackend {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Pulls `detail` out of an error body, falling back to the raw text.
    fn error_detail(body: &str) -> Option<String> {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return None;
        }

        match serde_json::from_str::<serde_json::Value>(trimmed) {
            Ok(value) => match value.get("detail") {
                Some(serde_json::Value::String(s)) => Some(s.clone()),
                Some(other) => Some(other.to_string()),
                None => Some(trimmed.to_string()),
            },
            Err(_) => Some(trimmed.to_string()),
        }
    }
}

impl Default for HttpScoringBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ScoringBackend for HttpScoringBackend {
    async fn score(&self, endpoint: &str, request: &ScoringRequest) -> Result<ScoringResponse> {
        tracing::debug!("POST {}", endpoint);

        let mut builder = self
            .client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(request);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;
        let status = response.status();
        tracing::debug!("Scoring response status: {}", status);

        let body = response.text().await?;

        if !status.is_success() {
            return Err(ScreeningError::StatusError {
                status: status.as_u16(),
                detail: Self::error_detail(&body),
            });
        }

        let scoring: ScoringResponse = serde_json::from_str(&body)?;
        tracing::debug!(
            "Decoded {} candidates from {}",
            scoring.top_candidates().len(),
            endpoint
        );
        Ok(scoring)
    }
}
