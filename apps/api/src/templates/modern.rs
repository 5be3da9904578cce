//! Modern: sidebar with contact details, skills, languages and interests; main
//! column with the narrative sections.

use crate::cv::models::CanonicalCv;
use crate::templates::sections;
use crate::templates::view::{Column, ColumnRole, View};
use crate::templates::{Template, TemplateKind};

pub struct Modern;

impl Template for Modern {
    fn kind(&self) -> TemplateKind {
        TemplateKind::Modern
    }

    fn render(&self, cv: &CanonicalCv) -> View {
        let sidebar = [
            sections::contacts(cv),
            sections::skill_meters(cv),
            sections::languages(cv),
            sections::interests(cv),
        ];
        let main = [
            sections::summary(cv),
            sections::experience(cv),
            sections::education(cv),
            sections::certifications(cv),
            sections::references(cv),
        ];
        View {
            template: self.kind(),
            header: sections::header(cv, true, false),
            columns: vec![
                Column {
                    role: ColumnRole::Sidebar,
                    sections: sidebar.into_iter().flatten().collect(),
                },
                Column {
                    role: ColumnRole::Main,
                    sections: main.into_iter().flatten().collect(),
                },
            ],
        }
    }
}
