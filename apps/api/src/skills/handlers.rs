//! Axum route handlers for the Skills API.

use axum::{extract::State, Json};
use serde_json::Value;

use crate::errors::AppError;
use crate::skills::classifier::{classify_with, SkillAssessment};
use crate::skills::entry::{find_skill_entries, skill_entries};
use crate::state::AppState;

/// POST /api/v1/skills/assess
///
/// Accepts a bare skill list (array or comma-separated string) or a whole raw
/// record, in which case its skills collection is located first.
pub async fn handle_assess(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<SkillAssessment>, AppError> {
    let entries = match &body {
        Value::Array(_) | Value::String(_) => skill_entries(&body),
        record => find_skill_entries(record),
    };

    let assessment = classify_with(&entries, state.categorizer.as_ref());
    tracing::debug!(
        technical = assessment.technical_skills.len(),
        soft = assessment.soft_skills.len(),
        "Skills assessed"
    );

    Ok(Json(assessment))
}
