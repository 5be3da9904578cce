//! List Normalizer — turns free text or loosely typed arrays into ordered list items.
//!
//! # Grammar (strings)
//! 1. Inline emphasis markup (`**`, `__`) is removed until none remains.
//! 2. The text is split on newlines, on the literal two-character `\n` sequence the
//!    analysis dialect leaves inside joined sentences, and on the inline bullet `•`.
//! 3. Each item is trimmed and loses any run of leading bullet or numbered markers.
//! 4. Empty items are dropped.
//!
//! Arrays push every element through the same grammar and flatten the result, so
//! `normalize_list(normalize_list(x).join("\n")) == normalize_list(x)` for any input.

use serde_json::Value;

const LITERAL_NEWLINE: &str = "\\n";
const INLINE_BULLET: char = '•';
const BULLET_MARKERS: &[char] = &['-', '*', '•', '·', '–', '—', '‣', '◦', '▪', '>'];
const EMPHASIS_MARKERS: &[&str] = &["**", "__"];
/// Keys read from object elements of an array (`[{"text": "..."}]`).
const OBJECT_TEXT_KEYS: &[&str] = &["text", "description", "value"];
/// Longest numeric prefix treated as a list number (`12.`), so years survive.
const MAX_LIST_NUMBER_DIGITS: usize = 2;

/// Normalizes a raw list-like field. `null`, booleans and shapeless objects yield `[]`.
pub fn normalize_list(raw: &Value) -> Vec<String> {
    match raw {
        Value::Array(items) => items.iter().flat_map(normalize_element).collect(),
        other => normalize_element(other),
    }
}

/// Normalizes a single free-text block.
pub fn normalize_str(text: &str) -> Vec<String> {
    strip_emphasis(text)
        .replace(LITERAL_NEWLINE, "\n")
        .split(|c: char| c == '\n' || c == '\r' || c == INLINE_BULLET)
        .map(clean_item)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// List grammar followed by a split on `,` and `;`, for term lists such as
/// `"English, French"` or `"Chess; Hiking"`.
pub fn normalize_terms(raw: &Value) -> Vec<String> {
    normalize_list(raw)
        .iter()
        .flat_map(|item| item.split([',', ';']))
        .map(clean_item)
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect()
}

fn normalize_element(item: &Value) -> Vec<String> {
    match item {
        Value::String(s) => normalize_str(s),
        Value::Number(n) => normalize_str(&n.to_string()),
        Value::Array(_) => normalize_list(item),
        Value::Object(map) => OBJECT_TEXT_KEYS
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str))
            .map(normalize_str)
            .unwrap_or_default(),
        Value::Null | Value::Bool(_) => Vec::new(),
    }
}

fn strip_emphasis(text: &str) -> String {
    let mut out = text.to_string();
    while let Some(marker) = EMPHASIS_MARKERS.iter().find(|m| out.contains(**m)) {
        out = out.replace(marker, "");
    }
    out
}

/// Trims and strips leading markers until the item stops changing.
fn clean_item(item: &str) -> &str {
    let mut current = item.trim();
    loop {
        let next = strip_leading_marker(current).trim_start();
        if next.len() == current.len() {
            return current;
        }
        current = next;
    }
}

fn strip_leading_marker(item: &str) -> &str {
    let mut chars = item.chars();
    match chars.next() {
        Some(c) if BULLET_MARKERS.contains(&c) => chars.as_str(),
        Some(c) if c.is_ascii_digit() => strip_list_number(item),
        _ => item,
    }
}

/// Strips `1.` / `2)` when followed by whitespace. `1.5x faster` is left alone.
fn strip_list_number(item: &str) -> &str {
    let digits = item.chars().take_while(char::is_ascii_digit).count();
    if digits > MAX_LIST_NUMBER_DIGITS {
        return item;
    }
    let rest = &item[digits..];
    let mut chars = rest.chars();
    match (chars.next(), chars.next()) {
        (Some('.' | ')'), Some(ws)) if ws.is_whitespace() => &rest[1..],
        _ => item,
    }
}
