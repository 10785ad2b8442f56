//! Handlers for the template authoring endpoints.
//!
//! Each mutating handler translates its payload into one
//! [`TemplateCommand`], dispatches it, and returns the full updated
//! aggregate snapshot in the standard `{ "data": ... }` envelope.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use surveyforge_core::question::QuestionType;
use surveyforge_core::types::EntityId;

use crate::commands::{dispatch, TemplateCommand};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

/* --------------------------------------------------------------------------
   Request DTOs
   -------------------------------------------------------------------------- */

/// Payload for creating a template.
#[derive(Debug, Deserialize)]
pub struct CreateTemplateRequest {
    pub title: String,
    pub description: Option<String>,
}

/// Payload for adding a section.
#[derive(Debug, Deserialize)]
pub struct CreateSectionRequest {
    pub title: String,
    pub description: Option<String>,
}

/// Payload for adding or editing a question.
#[derive(Debug, Deserialize)]
pub struct QuestionRequest {
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub required: bool,
}

/// Reject empty or whitespace-only titles at the edge.
fn validate_title(title: &str, what: &str) -> AppResult<()> {
    if title.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{what} title must not be empty")));
    }
    Ok(())
}

/* --------------------------------------------------------------------------
   Handlers
   -------------------------------------------------------------------------- */

/// POST /templates
///
/// Create a new draft template.
pub async fn create_template(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateTemplateRequest>,
) -> AppResult<impl IntoResponse> {
    validate_title(&input.title, "Template")?;

    let template = dispatch(
        &state.store,
        TemplateCommand::CreateTemplate {
            title: input.title,
            description: input.description,
        },
    )
    .await?;

    let id = template.id.ok_or_else(|| {
        AppError::InternalError("Store returned a template without an id".into())
    })?;

    tracing::info!(template_id = %id, "Template created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/v1/templates/{id}"))],
        Json(DataResponse { data: template }),
    ))
}

/// GET /templates
///
/// List all templates, oldest first.
pub async fn list_templates(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let templates = state.store.list().await;
    Ok(Json(DataResponse { data: templates }))
}

/// GET /templates/{id}
///
/// Fetch a single template snapshot.
pub async fn get_template(
    State(state): State<AppState>,
    Path(template_id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let template = state.store.get(template_id).await?;
    Ok(Json(DataResponse { data: template }))
}

/// POST /templates/{id}/publish
///
/// Publish a draft template. Fails if already published, archived, or empty.
pub async fn publish_template(
    State(state): State<AppState>,
    Path(template_id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let template = dispatch(&state.store, TemplateCommand::PublishTemplate { template_id }).await?;

    tracing::info!(template_id = %template_id, "Template published");

    Ok(Json(DataResponse { data: template }))
}

/// POST /templates/{id}/sections
///
/// Add a section to a draft template.
pub async fn add_section(
    State(state): State<AppState>,
    Path(template_id): Path<EntityId>,
    AppJson(input): AppJson<CreateSectionRequest>,
) -> AppResult<impl IntoResponse> {
    validate_title(&input.title, "Section")?;

    let template = dispatch(
        &state.store,
        TemplateCommand::AddSection {
            template_id,
            title: input.title,
            description: input.description,
        },
    )
    .await?;

    tracing::info!(template_id = %template_id, "Section added");

    Ok((StatusCode::CREATED, Json(DataResponse { data: template })))
}

/// POST /templates/{id}/sections/{section_id}/questions
///
/// Add a question to a section of a draft template.
pub async fn add_question(
    State(state): State<AppState>,
    Path((template_id, section_id)): Path<(EntityId, EntityId)>,
    AppJson(input): AppJson<QuestionRequest>,
) -> AppResult<impl IntoResponse> {
    let template = dispatch(
        &state.store,
        TemplateCommand::AddQuestion {
            template_id,
            section_id,
            text: input.text,
            question_type: input.question_type,
            options: input.options,
            required: input.required,
        },
    )
    .await?;

    tracing::info!(
        template_id = %template_id,
        section_id = %section_id,
        "Question added"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: template })))
}

/// PUT /templates/{id}/sections/{section_id}/questions/{question_id}
///
/// Replace a question wholesale. The stored id stays the path id.
pub async fn edit_question(
    State(state): State<AppState>,
    Path((template_id, section_id, question_id)): Path<(EntityId, EntityId, EntityId)>,
    AppJson(input): AppJson<QuestionRequest>,
) -> AppResult<impl IntoResponse> {
    let template = dispatch(
        &state.store,
        TemplateCommand::EditQuestion {
            template_id,
            section_id,
            question_id,
            text: input.text,
            question_type: input.question_type,
            options: input.options,
            required: input.required,
        },
    )
    .await?;

    tracing::info!(
        template_id = %template_id,
        section_id = %section_id,
        question_id = %question_id,
        "Question updated"
    );

    Ok(Json(DataResponse { data: template }))
}
