use std::sync::Arc;

use crate::skills::SkillCategorizer;
use crate::upstream::RecordSource;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; cloned per request.
#[derive(Clone)]
pub struct AppState {
    /// Raw CV records for the `/cv/:id` routes. Default: HttpRecordSource.
    pub records: Arc<dyn RecordSource>,
    /// Pluggable skill categorizer. Default: KeywordCategorizer, extended via
    /// EXTRA_TECHNICAL_KEYWORDS.
    pub categorizer: Arc<dyn SkillCategorizer>,
}
