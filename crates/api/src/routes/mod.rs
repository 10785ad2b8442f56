pub mod health;
pub mod templates;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /templates                                                      GET, POST
/// /templates/{id}                                                 GET
/// /templates/{id}/publish                                         POST
/// /templates/{id}/sections                                        POST
/// /templates/{id}/sections/{section_id}/questions                 POST
/// /templates/{id}/sections/{section_id}/questions/{question_id}   PUT
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(templates::router())
}
