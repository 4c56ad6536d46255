//! Recommendation data provider abstraction
//!
//! A provider returns the raw, decoded answer of the recommendation service
//! for a seed. Interpretation of that answer lives in the client.

use crate::{error::AppResult, models::RecommendationResponse};

pub mod http;

pub use http::HttpRecommendationProvider;

/// Trait for recommendation sources
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommendationProvider: Send + Sync {
    /// Fetch recommendations for a seed identifier
    ///
    /// Issues exactly one request. Transport problems, non-2xx statuses and
    /// undecodable bodies are all reported as errors; interpreting the body is
    /// left to the caller.
    async fn fetch(&self, identifier: &str) -> AppResult<RecommendationResponse>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
