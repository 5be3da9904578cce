//! Raw skill entries — locating a skills collection and reading one entry.

use serde_json::{Map, Value};

use crate::cv::field_map::{lookup, resolve_text, Source, SKILLS_SECTION};
use crate::cv::list_normalizer::normalize_terms;
use crate::skills::proficiency::Level;

const SKILL_NAME: &[Source] = &[
    Source::Path("name"),
    Source::Path("skill"),
    Source::Path("skill_name"),
    Source::Path("title"),
];
/// Fields that always hold a percent.
const PERCENT_FIELDS: &[&str] = &["level_percent", "levelPercent", "percentage", "percent"];
/// Numeric score fields, read before labels.
const SCORE_FIELDS: &[&str] = &["score", "rating"];
const LEVEL_FIELDS: &[&str] = &["level", "skill_level", "proficiency"];

/// One raw skill entry, read but not yet projected onto a scale.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSkill {
    pub name: Option<String>,
    pub level: Level,
}

/// Reads a raw entry. Strings are names; objects contribute a name and a level;
/// anything else is nameless with an unknown level.
pub fn read_skill(entry: &Value) -> RawSkill {
    match entry {
        Value::String(s) => RawSkill {
            name: Some(s.trim().to_string()).filter(|s| !s.is_empty()),
            level: Level::Unknown,
        },
        Value::Object(_) => RawSkill {
            name: resolve_text(entry, SKILL_NAME),
            level: read_level(entry),
        },
        _ => RawSkill {
            name: None,
            level: Level::Unknown,
        },
    }
}

fn read_level(entry: &Value) -> Level {
    let first_known = |fields: &[&str], read: fn(&Value) -> Level| {
        fields
            .iter()
            .filter_map(|field| lookup(entry, field))
            .map(read)
            .find(|level| level.is_known())
    };
    first_known(PERCENT_FIELDS, Level::read_percent)
        .or_else(|| first_known(SCORE_FIELDS, Level::read))
        .or_else(|| first_known(LEVEL_FIELDS, Level::read))
        .unwrap_or(Level::Unknown)
}

/// Flattens a raw `skills` field into entries.
///
/// - arrays are taken as-is;
/// - strings are split into terms (`"Python, SQL"`);
/// - an object with a name field is a single entry;
/// - other objects are grouped collections: array values are concatenated
///   (`{"technical": [...], "soft": [...]}`), scalar values become
///   `{name: key, level: value}` (`{"Python": "Expert"}`).
pub fn skill_entries(value: &Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items.clone(),
        Value::String(_) => normalize_terms(value)
            .into_iter()
            .map(Value::String)
            .collect(),
        Value::Object(_) if resolve_text(value, SKILL_NAME).is_some() => vec![value.clone()],
        Value::Object(map) => map
            .iter()
            .flat_map(|(key, inner)| grouped_entries(key, inner))
            .collect(),
        _ => Vec::new(),
    }
}

fn grouped_entries(key: &str, inner: &Value) -> Vec<Value> {
    match inner {
        Value::Array(items) => items.clone(),
        Value::Object(fields) => {
            let mut entry = fields.clone();
            if resolve_text(inner, SKILL_NAME).is_none() {
                entry.insert("name".to_string(), Value::String(key.to_string()));
            }
            vec![Value::Object(entry)]
        }
        Value::Null => Vec::new(),
        scalar => {
            let mut entry = Map::new();
            entry.insert("name".to_string(), Value::String(key.to_string()));
            entry.insert("level".to_string(), scalar.clone());
            vec![Value::Object(entry)]
        }
    }
}

/// Skill entries of a whole raw record: the first skills source that yields any.
pub fn find_skill_entries(raw: &Value) -> Vec<Value> {
    SKILLS_SECTION
        .iter()
        .filter_map(|path| lookup(raw, path))
        .map(skill_entries)
        .find(|entries| !entries.is_empty())
        .unwrap_or_default()
}
