// Template adapters.
// Each template is a pure function from `CanonicalCv` to a `View`. Templates never
// see raw records and never check for missing data: the canonical value is complete.

pub mod classic;
pub mod compact;
pub mod handlers;
pub mod modern;
pub mod sections;
pub mod view;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cv::models::CanonicalCv;
use crate::templates::view::View;

pub trait Template: Send + Sync {
    fn kind(&self) -> TemplateKind;
    fn render(&self, cv: &CanonicalCv) -> View;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Classic,
    Modern,
    Compact,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown template '{0}'")]
pub struct UnknownTemplate(pub String);

impl TemplateKind {
    pub const ALL: [TemplateKind; 3] = [
        TemplateKind::Classic,
        TemplateKind::Modern,
        TemplateKind::Compact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateKind::Classic => "classic",
            TemplateKind::Modern => "modern",
            TemplateKind::Compact => "compact",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            TemplateKind::Classic => "Single column with skill meters",
            TemplateKind::Modern => "Two columns with a contact and skills sidebar",
            TemplateKind::Compact => "Dense single column, skills as tags, no photo",
        }
    }

    pub fn template(self) -> &'static dyn Template {
        match self {
            TemplateKind::Classic => &classic::Classic,
            TemplateKind::Modern => &modern::Modern,
            TemplateKind::Compact => &compact::Compact,
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateKind {
    type Err = UnknownTemplate;

    /// Case-insensitive template id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().to_lowercase();
        TemplateKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == id)
            .ok_or_else(|| UnknownTemplate(s.to_string()))
    }
}

pub fn render_with(kind: TemplateKind, cv: &CanonicalCv) -> View {
    kind.template().render(cv)
}
