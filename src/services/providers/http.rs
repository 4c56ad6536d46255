//! HTTP recommendation provider
//!
//! Talks to the recommendation service with a single GET per seed:
//! `{api_url}/{identifier}`. No query string, no body, no custom headers.

use crate::{
    error::{AppError, AppResult},
    models::RecommendationResponse,
    services::providers::RecommendationProvider,
};
use reqwest::Client as HttpClient;
use std::time::Duration;

#[derive(Clone)]
pub struct HttpRecommendationProvider {
    http_client: HttpClient,
    api_url: String,
}

impl HttpRecommendationProvider {
    /// Creates a provider for the given base address.
    ///
    /// `timeout` of `None` keeps reqwest's default (no overall timeout).
    pub fn new(api_url: impl Into<String>, timeout: Option<Duration>) -> AppResult<Self> {
        let mut builder = HttpClient::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
            api_url: api_url.into(),
        })
    }

    /// Address queried for a seed. The identifier is used as-is
    fn endpoint(&self, identifier: &str) -> String {
        format!("{}/{}", self.api_url.trim_end_matches('/'), identifier)
    }
}

#[async_trait::async_trait]
impl RecommendationProvider for HttpRecommendationProvider {
    async fn fetch(&self, identifier: &str) -> AppResult<RecommendationResponse> {
        let url = self.endpoint(identifier);

        let response = self.http_client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Recommendation API returned status {}: {}",
                status, body
            )));
        }

        let response_text = response.text().await?;
        tracing::debug!(response = %response_text, "Raw recommendation API response");

        let parsed: RecommendationResponse =
            serde_json::from_str(&response_text).map_err(|e| {
                tracing::error!(
                    error = %e,
                    response = %response_text,
                    "Failed to deserialize recommendation response"
                );
                AppError::ExternalApi(format!("Failed to parse recommendation response: {}", e))
            })?;

        tracing::info!(
            identifier = %identifier,
            provider = self.name(),
            "Recommendations fetched"
        );

        Ok(parsed)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
