//! Axum route handlers for the Template API.

use axum::{
    extract::{Path, Query},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cv::{canonicalize, CanonicalCv};
use crate::errors::AppError;
use crate::templates::{render_with, TemplateKind};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct RenderParams {
    /// `json` (default) or `text`.
    pub format: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderFormat {
    Json,
    Text,
}

impl RenderFormat {
    pub fn parse(format: Option<&str>) -> Result<Self, AppError> {
        match format.map(|f| f.trim().to_lowercase()).as_deref() {
            None | Some("") | Some("json") => Ok(RenderFormat::Json),
            Some("text") | Some("txt") => Ok(RenderFormat::Text),
            Some(other) => Err(AppError::Validation(format!(
                "format must be 'json' or 'text', got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TemplateInfo {
    pub id: TemplateKind,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TemplateListResponse {
    pub templates: Vec<TemplateInfo>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<TemplateListResponse> {
    Json(TemplateListResponse {
        templates: TemplateKind::ALL
            .into_iter()
            .map(|kind| TemplateInfo {
                id: kind,
                description: kind.description(),
            })
            .collect(),
    })
}

/// POST /api/v1/cv/render/:template
///
/// Canonicalizes the raw record in the body and renders it with the named template.
pub async fn handle_render(
    Path(template): Path<String>,
    Query(params): Query<RenderParams>,
    Json(raw): Json<Value>,
) -> Result<Response, AppError> {
    render_response(&canonicalize(&raw), &template, params.format.as_deref())
}

/// Shared by the inline and the upstream-backed render routes.
pub fn render_response(
    cv: &CanonicalCv,
    template: &str,
    format: Option<&str>,
) -> Result<Response, AppError> {
    let kind: TemplateKind = template
        .parse()
        .map_err(|e| AppError::NotFound(format!("Template not found: {e}")))?;
    let format = RenderFormat::parse(format)?;

    let view = render_with(kind, cv);
    tracing::debug!(template = %kind, ?format, "Rendered CV");

    Ok(match format {
        RenderFormat::Json => Json(view).into_response(),
        RenderFormat::Text => (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            view.to_plain_text(),
        )
            .into_response(),
    })
}
