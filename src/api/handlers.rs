use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Redirect},
    Extension, Json,
};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::{BookSummary, FetchState},
    services::SessionSnapshot,
};

use super::{render, AppState};

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// HTML page for the current session
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let snapshot = state.session.snapshot().await;
    Html(render::page(&state.catalog, &snapshot))
}

/// Sample books a user can pick from
pub async fn list_books(State(state): State<AppState>) -> Json<Vec<BookSummary>> {
    Json(state.catalog.books().to_vec())
}

/// Current session state with normalized cards
pub async fn get_state(State(state): State<AppState>) -> Json<SessionSnapshot> {
    Json(state.session.snapshot().await)
}

/// Select a seed and start fetching; answers immediately with the loading state
pub async fn select_book(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(isbn): Path<String>,
) -> AppResult<(StatusCode, Json<SessionSnapshot>)> {
    let snapshot = select(&state, request_id, &isbn).await?;
    Ok((StatusCode::ACCEPTED, Json(snapshot)))
}

/// Form variant of [`select_book`] used by the page
pub async fn select_book_form(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(isbn): Path<String>,
) -> AppResult<Redirect> {
    select(&state, request_id, &isbn).await?;
    Ok(Redirect::to("/"))
}

/// Run one request for any identifier and return its terminal state.
///
/// Does not touch the page session.
pub async fn fetch_recommendations(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(identifier): Path<String>,
) -> Json<FetchState> {
    tracing::info!(
        request_id = %request_id,
        identifier = %identifier,
        "Direct recommendation fetch"
    );
    Json(state.client.fetch_recommendations(&identifier).await)
}

async fn select(
    state: &AppState,
    request_id: RequestId,
    isbn: &str,
) -> AppResult<SessionSnapshot> {
    let book = state
        .catalog
        .find(isbn)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("No sample book with ISBN {}", isbn)))?;

    tracing::info!(
        request_id = %request_id,
        identifier = %isbn,
        "Processing seed selection"
    );

    let selection = state.session.select(book).await;
    Ok(selection.snapshot)
}
