pub mod book;
pub mod fetch_state;
pub mod recommendation;

pub use book::{BookSummary, Catalog};
pub use fetch_state::{FetchState, FETCH_ERROR_MESSAGE, NO_RECOMMENDATIONS_MESSAGE};
pub use recommendation::{BookDisplay, RecommendationRecord, RecommendationResponse};
