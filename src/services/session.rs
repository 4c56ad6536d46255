use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::{sync::RwLock, task::JoinHandle};

use crate::{
    models::{BookDisplay, BookSummary, FetchState},
    services::recommendations::RecommendationClient,
};

/// The page's only mutable state: which seed is selected and what its
/// request has produced so far.
///
/// Every selection bumps a generation counter. A fetch only writes its result
/// back if its generation is still the current one, so when requests overlap
/// the most recent selection wins regardless of which response lands last.
#[derive(Clone)]
pub struct Session {
    inner: Arc<RwLock<SessionInner>>,
    client: RecommendationClient,
}

struct SessionInner {
    selected: Option<BookSummary>,
    state: FetchState,
    generation: u64,
    updated_at: DateTime<Utc>,
}

/// Point-in-time view of the session for rendering
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub selected: Option<BookSummary>,
    pub generation: u64,
    pub state: FetchState,
    pub cards: Vec<BookDisplay>,
    pub updated_at: DateTime<Utc>,
}

/// Result of selecting a seed
pub struct Selection {
    /// Session as it was right after the reset, always `Loading`
    pub snapshot: SessionSnapshot,
    /// Background fetch; resolves to whether its result was applied
    pub task: JoinHandle<bool>,
}

impl Session {
    pub fn new(client: RecommendationClient) -> Self {
        Self {
            inner: Arc::new(RwLock::new(SessionInner {
                selected: None,
                state: FetchState::Idle,
                generation: 0,
                updated_at: Utc::now(),
            })),
            client,
        }
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        let inner = self.inner.read().await;
        inner.snapshot()
    }

    /// Selects a seed and starts fetching its recommendations.
    ///
    /// Previous results are cleared and the state is `Loading` before the
    /// request is issued.
    pub async fn select(&self, book: BookSummary) -> Selection {
        let identifier = book.isbn.clone();

        let (generation, snapshot) = {
            let mut inner = self.inner.write().await;
            inner.generation += 1;
            inner.selected = Some(book);
            inner.set_state(FetchState::Loading);
            (inner.generation, inner.snapshot())
        };

        tracing::info!(
            identifier = %identifier,
            generation = generation,
            "Seed selected, fetching recommendations"
        );

        let session = self.clone();
        let task = tokio::spawn(async move {
            let state = session.client.fetch_recommendations(&identifier).await;
            session.apply(generation, state).await
        });

        Selection { snapshot, task }
    }

    /// Stores a finished request's state unless a newer selection exists
    async fn apply(&self, generation: u64, state: FetchState) -> bool {
        let mut inner = self.inner.write().await;
        if inner.generation != generation {
            tracing::debug!(
                generation = generation,
                current = inner.generation,
                "Dropping stale recommendation result"
            );
            return false;
        }

        inner.set_state(state);
        true
    }
}

impl SessionInner {
    fn set_state(&mut self, state: FetchState) {
        self.state = state;
        self.updated_at = Utc::now();
    }

    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            selected: self.selected.clone(),
            generation: self.generation,
            state: self.state.clone(),
            cards: self.state.cards(),
            updated_at: self.updated_at,
        }
    }
}
