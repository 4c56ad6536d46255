use std::sync::Arc;

use crate::{
    config::Config,
    error::AppResult,
    models::Catalog,
    services::{
        providers::{HttpRecommendationProvider, RecommendationProvider},
        RecommendationClient, Session,
    },
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub client: RecommendationClient,
    pub session: Session,
}

impl AppState {
    /// Creates state around an arbitrary provider with the sample catalog
    pub fn new(provider: Arc<dyn RecommendationProvider>) -> Self {
        let client = RecommendationClient::new(provider);
        Self {
            catalog: Arc::new(Catalog::sample()),
            session: Session::new(client.clone()),
            client,
        }
    }

    /// Creates state talking to the configured recommendation service
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let provider = HttpRecommendationProvider::new(
            config.recommendation_api_url.clone(),
            config.request_timeout(),
        )?;
        Ok(Self::new(Arc::new(provider)))
    }
}
