//! Compact: one dense column, no avatar, skills as tags. Reference details are
//! replaced by an "available on request" line.

use crate::cv::models::CanonicalCv;
use crate::templates::sections;
use crate::templates::view::{Column, ColumnRole, View};
use crate::templates::{Template, TemplateKind};

pub struct Compact;

impl Template for Compact {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Compact
    }

    fn render(&self, cv: &CanonicalCv) -> View {
        let sections = [
            sections::summary(cv),
            sections::skill_tags(cv),
            sections::experience(cv),
            sections::education(cv),
            sections::certifications(cv),
            sections::languages(cv),
            sections::interests(cv),
            sections::references_on_request(cv),
        ];
        View {
            template: self.kind(),
            header: sections::header(cv, false, true),
            columns: vec![Column {
                role: ColumnRole::Main,
                sections: sections.into_iter().flatten().collect(),
            }],
        }
    }
}
