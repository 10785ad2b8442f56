//! Route definitions for the template authoring endpoints.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::templates;
use crate::state::AppState;

/// Template routes mounted at `/templates`.
///
/// ```text
/// GET  /                                                     -> list_templates
/// POST /                                                     -> create_template
/// GET  /{id}                                                 -> get_template
/// POST /{id}/publish                                         -> publish_template
/// POST /{id}/sections                                        -> add_section
/// POST /{id}/sections/{section_id}/questions                 -> add_question
/// PUT  /{id}/sections/{section_id}/questions/{question_id}   -> edit_question
/// ```
pub fn router() -> Router<AppState> {
    Router::new().nest(
        "/templates",
        Router::new()
            .route(
                "/",
                get(templates::list_templates).post(templates::create_template),
            )
            .route("/{id}", get(templates::get_template))
            .route("/{id}/publish", post(templates::publish_template))
            .route("/{id}/sections", post(templates::add_section))
            .route(
                "/{id}/sections/{section_id}/questions",
                post(templates::add_question),
            )
            .route(
                "/{id}/sections/{section_id}/questions/{question_id}",
                put(templates::edit_question),
            ),
    )
}
