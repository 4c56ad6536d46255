use serde::{Deserialize, Serialize};

use super::recommendation::{BookDisplay, RecommendationRecord};

/// Shown when the service returns nothing usable
pub const NO_RECOMMENDATIONS_MESSAGE: &str = "No recommendations found.";

/// Shown for any transport failure, whatever the cause
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching recommendations.";

/// Lifecycle of a single recommendation request.
///
/// One tagged value instead of independent loading/error/results flags, so a
/// state such as "loading with an error shown" cannot be represented.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    /// Always holds at least one record, see [`FetchState::success`]
    Success { records: Vec<RecommendationRecord> },
    /// Normal outcome with nothing to show; `message` comes from the service
    /// or is the generic fallback
    Empty { message: String },
    Failed { message: String },
}

impl FetchState {
    /// Builds the outcome for a record list, collapsing an empty list into
    /// the "no recommendations" result
    pub fn success(records: Vec<RecommendationRecord>) -> Self {
        if records.is_empty() {
            Self::no_recommendations()
        } else {
            FetchState::Success { records }
        }
    }

    pub fn empty(message: impl Into<String>) -> Self {
        FetchState::Empty {
            message: message.into(),
        }
    }

    pub fn no_recommendations() -> Self {
        Self::empty(NO_RECOMMENDATIONS_MESSAGE)
    }

    pub fn transport_failure() -> Self {
        FetchState::Failed {
            message: FETCH_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// Whether the request behind this state has finished
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            FetchState::Success { .. } | FetchState::Empty { .. } | FetchState::Failed { .. }
        )
    }

    /// Text for the message area, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            FetchState::Empty { message } | FetchState::Failed { message } => {
                Some(message.as_str())
            }
            _ => None,
        }
    }

    pub fn records(&self) -> &[RecommendationRecord] {
        match self {
            FetchState::Success { records } => records.as_slice(),
            _ => &[],
        }
    }

    /// Normalized cards for the current records
    pub fn cards(&self) -> Vec<BookDisplay> {
        self.records().iter().map(RecommendationRecord::display).collect()
    }

    pub fn status(&self) -> &'static str {
        match self {
            FetchState::Idle => "idle",
            FetchState::Loading => "loading",
            FetchState::Success { .. } => "success",
            FetchState::Empty { .. } => "empty",
            FetchState::Failed { .. } => "failed",
        }
    }
}
