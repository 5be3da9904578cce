//! Axum route handlers for the CV API.

use axum::{
    extract::{Path, Query, State},
    response::Response,
    Json,
};
use serde_json::Value;

use crate::cv::{assess_with, canonicalize, CanonicalCv};
use crate::errors::AppError;
use crate::skills::SkillAssessment;
use crate::state::AppState;
use crate::templates::handlers::{render_response, RenderParams};

const MAX_ID_LEN: usize = 128;

/// POST /api/v1/cv/canonicalize
///
/// Any JSON body is a valid raw record, including `null`.
pub async fn handle_canonicalize(Json(raw): Json<Value>) -> Json<CanonicalCv> {
    Json(canonicalize(&raw))
}

/// GET /api/v1/cv/:id
pub async fn handle_get_cv(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CanonicalCv>, AppError> {
    let raw = fetch_record(&state, &id).await?;
    Ok(Json(canonicalize(&raw)))
}

/// GET /api/v1/cv/:id/render/:template
pub async fn handle_render_cv(
    State(state): State<AppState>,
    Path((id, template)): Path<(String, String)>,
    Query(params): Query<RenderParams>,
) -> Result<Response, AppError> {
    let raw = fetch_record(&state, &id).await?;
    render_response(&canonicalize(&raw), &template, params.format.as_deref())
}

/// GET /api/v1/cv/:id/skills
///
/// Analysis-display view of the stored record's skills.
pub async fn handle_cv_skills(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SkillAssessment>, AppError> {
    let raw = fetch_record(&state, &id).await?;
    Ok(Json(assess_with(&raw, state.categorizer.as_ref())))
}

async fn fetch_record(state: &AppState, id: &str) -> Result<Value, AppError> {
    validate_id(id)?;
    let raw = state.records.fetch(id).await?;
    tracing::info!(cv_id = %id, "Fetched raw CV record");
    Ok(raw)
}

/// Ids are interpolated into the upstream URL path.
fn validate_id(id: &str) -> Result<(), AppError> {
    let valid = !id.is_empty()
        && id.len() <= MAX_ID_LEN
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(AppError::Validation(
            "CV id must be 1-128 characters of letters, digits, '-' or '_'".to_string(),
        ))
    }
}
