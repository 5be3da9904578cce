//! Rendered layout tree.
//!
//! A `View` is what a template produces: a header plus one or more columns of
//! titled sections, each a list of typed blocks. The client maps blocks to widgets;
//! `to_plain_text` gives a deterministic text rendering of the same tree.

use serde::{Deserialize, Serialize};

use crate::templates::TemplateKind;

// ────────────────────────────────────────────────────────────────────────────
// Layout types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct View {
    pub template: TemplateKind,
    pub header: Header,
    pub columns: Vec<Column>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub name: String,
    pub headline: String,
    /// `""` when the template shows no avatar.
    pub avatar_url: String,
    pub links: Vec<Block>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRole {
    Main,
    Sidebar,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub role: ColumnRole,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Contacts,
    Summary,
    Experience,
    Education,
    Skills,
    Certifications,
    Languages,
    Interests,
    References,
}

impl SectionKind {
    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Contacts => "Contact",
            SectionKind::Summary => "Profile",
            SectionKind::Experience => "Experience",
            SectionKind::Education => "Education",
            SectionKind::Skills => "Skills",
            SectionKind::Certifications => "Certifications",
            SectionKind::Languages => "Languages",
            SectionKind::Interests => "Interests",
            SectionKind::References => "References",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub kind: SectionKind,
    pub title: String,
    pub blocks: Vec<Block>,
}

impl Section {
    pub fn new(kind: SectionKind, blocks: Vec<Block>) -> Self {
        Section {
            kind,
            title: kind.title().to_string(),
            blocks,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Paragraph {
        text: String,
    },
    Entry {
        title: String,
        subtitle: String,
        period: String,
        bullets: Vec<String>,
    },
    /// Proficiency bar, 0 – 100.
    Meter {
        label: String,
        percent: u8,
    },
    Tag {
        label: String,
    },
    /// `url` is `""` for non-actionable values (e.g. a location).
    Link {
        label: String,
        url: String,
    },
}

// ────────────────────────────────────────────────────────────────────────────
// Plain-text rendering
// ────────────────────────────────────────────────────────────────────────────

const METER_WIDTH: usize = 10;
const TAG_SEPARATOR: &str = " · ";

impl View {
    /// Header, then every column's sections in order. Same view, same text.
    pub fn to_plain_text(&self) -> String {
        let mut lines: Vec<String> = Vec::new();

        push_non_empty(&mut lines, &self.header.name.to_uppercase());
        push_non_empty(&mut lines, &self.header.headline);
        let links: Vec<String> = self.header.links.iter().filter_map(inline_text).collect();
        push_non_empty(&mut lines, &links.join(" | "));

        for section in self.columns.iter().flat_map(|c| &c.sections) {
            if !lines.is_empty() {
                lines.push(String::new());
            }
            lines.push(section.title.to_uppercase());
            render_blocks(&section.blocks, &mut lines);
        }

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }
}

fn render_blocks(blocks: &[Block], lines: &mut Vec<String>) {
    let mut tags: Vec<&str> = Vec::new();
    for block in blocks {
        if let Block::Tag { label } = block {
            tags.push(label);
            continue;
        }
        if !tags.is_empty() {
            lines.push(tags.join(TAG_SEPARATOR));
            tags.clear();
        }
        match block {
            Block::Paragraph { text } => lines.push(text.clone()),
            Block::Entry {
                title,
                subtitle,
                period,
                bullets,
            } => {
                let heading = [title.as_str(), subtitle.as_str()]
                    .into_iter()
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
                    .join(", ");
                if period.is_empty() {
                    lines.push(heading);
                } else {
                    lines.push(format!("{heading} ({period})"));
                }
                lines.extend(bullets.iter().map(|b| format!("  - {b}")));
            }
            Block::Meter { label, percent } => lines.push(meter_line(label, *percent)),
            Block::Link { .. } => lines.extend(inline_text(block)),
            Block::Tag { .. } => {}
        }
    }
    if !tags.is_empty() {
        lines.push(tags.join(TAG_SEPARATOR));
    }
}

fn meter_line(label: &str, percent: u8) -> String {
    let filled = (usize::from(percent.min(100)) * METER_WIDTH + 50) / 100;
    format!(
        "{label} [{}{}] {percent}%",
        "#".repeat(filled),
        "-".repeat(METER_WIDTH - filled)
    )
}

fn inline_text(block: &Block) -> Option<String> {
    match block {
        Block::Link { label, url } if url.is_empty() || url.ends_with(label.as_str()) => {
            Some(label.clone())
        }
        Block::Link { label, url } => Some(format!("{label} <{url}>")),
        _ => None,
    }
}

fn push_non_empty(lines: &mut Vec<String>, text: &str) {
    if !text.is_empty() {
        lines.push(text.to_string());
    }
}
