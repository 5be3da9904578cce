//! Classic: one column, everything in reading order, skills as meters.

use crate::cv::models::CanonicalCv;
use crate::templates::sections;
use crate::templates::view::{Column, ColumnRole, View};
use crate::templates::{Template, TemplateKind};

pub struct Classic;

impl Template for Classic {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Classic
    }

    fn render(&self, cv: &CanonicalCv) -> View {
        let sections = [
            sections::summary(cv),
            sections::experience(cv),
            sections::education(cv),
            sections::skill_meters(cv),
            sections::certifications(cv),
            sections::languages(cv),
            sections::interests(cv),
            sections::references(cv),
        ];
        View {
            template: self.kind(),
            header: sections::header(cv, true, true),
            columns: vec![Column {
                role: ColumnRole::Main,
                sections: sections.into_iter().flatten().collect(),
            }],
        }
    }
}
