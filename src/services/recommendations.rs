use std::sync::Arc;

use crate::{
    models::{FetchState, RecommendationResponse},
    services::providers::RecommendationProvider,
};

/// Fetches recommendations for a seed and turns the answer into a terminal
/// [`FetchState`].
///
/// Every call issues exactly one request through the provider. There is no
/// retry, no caching and no de-duplication of identical calls. Failures never
/// escape: they become [`FetchState::Failed`] with a generic message.
#[derive(Clone)]
pub struct RecommendationClient {
    provider: Arc<dyn RecommendationProvider>,
}

impl RecommendationClient {
    pub fn new(provider: Arc<dyn RecommendationProvider>) -> Self {
        Self { provider }
    }

    /// Runs one request for `identifier`. The identifier is not checked
    /// against the catalog; the service decides what to answer.
    pub async fn fetch_recommendations(&self, identifier: &str) -> FetchState {
        match self.provider.fetch(identifier).await {
            Ok(response) => {
                let state = interpret_response(response);
                tracing::info!(
                    identifier = %identifier,
                    provider = self.provider.name(),
                    status = state.status(),
                    records = state.records().len(),
                    "Recommendation request finished"
                );
                state
            }
            Err(e) => {
                tracing::warn!(
                    identifier = %identifier,
                    provider = self.provider.name(),
                    error = %e,
                    "Recommendation request failed"
                );
                FetchState::transport_failure()
            }
        }
    }
}

/// Maps a decoded response body to the state shown to the user
pub fn interpret_response(response: RecommendationResponse) -> FetchState {
    if let Some(message) = response.message() {
        return FetchState::empty(message);
    }

    match response {
        RecommendationResponse::Records(records) => FetchState::success(records),
        RecommendationResponse::Message(_) | RecommendationResponse::Unrecognized(_) => {
            FetchState::no_recommendations()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::AppError,
        models::{FETCH_ERROR_MESSAGE, NO_RECOMMENDATIONS_MESSAGE},
        services::providers::MockRecommendationProvider,
    };
    use mockall::predicate::function;
    use serde_json::{json, Value};

    fn response(value: Value) -> RecommendationResponse {
        serde_json::from_value(value).unwrap()
    }

    fn client_answering(value: Value) -> RecommendationClient {
        let mut provider = MockRecommendationProvider::new();
        provider
            .expect_fetch()
            .times(1)
            .returning(move |_| Ok(response(value.clone())));
        provider.expect_name().return_const("mock");
        RecommendationClient::new(Arc::new(provider))
    }

    #[tokio::test]
    async fn test_non_empty_sequence_is_success() {
        let client = client_answering(json!([
            { "BookName": "A", "Author": "a" },
            { "book_name": "B" },
            { "Book-Title": "C", "Year-Of-Publication": 1999 }
        ]));

        let state = client.fetch_recommendations("0061009059").await;

        assert_eq!(state.status(), "success");
        let cards = state.cards();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[2].title, "C");
        assert_eq!(cards[2].year, "1999");
        assert!(cards.iter().all(|c| !c.publisher.is_empty()));
    }

    #[tokio::test]
    async fn test_empty_sequence_matches_unexplained_mapping() {
        let from_empty = client_answering(json!([]))
            .fetch_recommendations("0061009059")
            .await;
        let from_mapping = client_answering(json!({ "detail": "nothing" }))
            .fetch_recommendations("0061009059")
            .await;

        assert_eq!(from_empty, from_mapping);
        assert_eq!(from_empty.message(), Some(NO_RECOMMENDATIONS_MESSAGE));
    }

    #[tokio::test]
    async fn test_message_is_passed_through_verbatim() {
        let state = client_answering(json!({ "data": "No match found" }))
            .fetch_recommendations("0061009059")
            .await;

        assert_eq!(state, FetchState::empty("No match found"));
        assert_eq!(state.message(), Some("No match found"));
    }

    #[tokio::test]
    async fn test_markup_in_message_is_kept_as_text() {
        let state = client_answering(json!({ "data": "<b>none</b> for Book:123" }))
            .fetch_recommendations("123")
            .await;
        assert_eq!(state.message(), Some("<b>none</b> for Book:123"));
    }

    #[tokio::test]
    async fn test_provider_error_gives_generic_failure() {
        for error in [
            AppError::ExternalApi("Recommendation API returned status 500".to_string()),
            AppError::Internal("boom".to_string()),
        ] {
            let mut provider = MockRecommendationProvider::new();
            let mut error = Some(error);
            provider
                .expect_fetch()
                .times(1)
                .returning(move |_| Err(error.take().unwrap()));
            provider.expect_name().return_const("mock");
            let client = RecommendationClient::new(Arc::new(provider));

            let state = client.fetch_recommendations("0316776963").await;

            assert_eq!(state.message(), Some(FETCH_ERROR_MESSAGE));
            assert!(matches!(state, FetchState::Failed { .. }));
        }
    }

    #[tokio::test]
    async fn test_identifier_is_passed_through_unchecked() {
        let mut provider = MockRecommendationProvider::new();
        provider
            .expect_fetch()
            .with(function(|id: &str| id == "not-a-seed"))
            .times(1)
            .returning(|_| Ok(response(json!({ "data": "we don't have Recommendations for Book:not-a-seed" }))));
        provider.expect_name().return_const("mock");
        let client = RecommendationClient::new(Arc::new(provider));

        let state = client.fetch_recommendations("not-a-seed").await;
        assert_eq!(
            state.message(),
            Some("we don't have Recommendations for Book:not-a-seed")
        );
    }

    #[test]
    fn test_repeated_fetch_is_idempotent() {
        let mut provider = MockRecommendationProvider::new();
        provider
            .expect_fetch()
            .times(2)
            .returning(|_| Ok(response(json!([{ "BookName": "Same" }]))));
        provider.expect_name().return_const("mock");
        let client = RecommendationClient::new(Arc::new(provider));

        let first = tokio_test::block_on(client.fetch_recommendations("0679731148"));
        let second = tokio_test::block_on(client.fetch_recommendations("0679731148"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_interpret_other_shapes() {
        assert_eq!(
            interpret_response(response(json!("just text"))),
            FetchState::no_recommendations()
        );
        assert_eq!(
            interpret_response(response(json!(null))),
            FetchState::no_recommendations()
        );
        assert_eq!(
            interpret_response(response(json!({ "data": 0 }))),
            FetchState::no_recommendations()
        );
        assert_eq!(
            interpret_response(response(json!({ "data": 42 }))),
            FetchState::empty("42")
        );
    }
}
