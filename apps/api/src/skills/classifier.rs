//! Skill Classifier — partitions a flat raw skill list into technical and soft skills.
//!
//! Categorization is a pluggable strategy (`SkillCategorizer`). Default:
//! `KeywordCategorizer`, a case-insensitive substring match against
//! [`TECHNICAL_KEYWORDS`]. Two named policies sit on top of any strategy:
//!
//! - **Positional split**: non-empty input that yields no technical skill is split by
//!   position, first `ceil(n/2)` technical, the rest soft.
//! - **Fallback assessment**: empty input returns [`fallback_assessment`], a constant
//!   canned skill set. This fabricates content for display and is kept as an explicit
//!   product decision; revisit before relying on it for anything but presentation.
//!
//! `AppState` holds an `Arc<dyn SkillCategorizer>`, extended at startup via config.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::skills::entry::read_skill;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// 0 – 10
    pub score: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillAssessment {
    pub technical_skills: Vec<Skill>,
    pub soft_skills: Vec<Skill>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Technical,
    Soft,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Decides the category of a single skill name. Implement this to swap the
/// vocabulary or the matching rule without touching the classification policies.
pub trait SkillCategorizer: Send + Sync {
    fn categorize(&self, skill_name: &str) -> SkillCategory;
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordCategorizer — default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Technical vocabulary, lowercase. A skill is technical when one of these starts a
/// word of its lowercased name ("PostgreSQL", "JavaScript" and "Pythonic" all hit).
///
/// Short tokens that occur inside everyday words (`go`, `c`, `r`, `ai`, `api`, `git`,
/// `rust`, `excel`) are not listed: "Digital marketing", "Rapid prototyping",
/// "Building trust" and "Excellent communication" must stay soft.
pub const TECHNICAL_KEYWORDS: &[&str] = &[
    // programming languages
    "python", "java", "typescript", "golang", "c++", "c#", "php", "ruby", "swift", "kotlin",
    "scala", "perl", "matlab", "html", "css", "sql", "bash", "powershell", "solidity",
    // frameworks and runtimes
    "react", "angular", "vue", "node", "django", "flask", "spring", "laravel", ".net",
    "ruby on rails", "flutter", "android", "ios development", "tensorflow", "pytorch",
    "pandas",
    // data and platforms
    "mysql", "postgres", "mongodb", "redis", "oracle", "nosql", "database", "hadoop",
    "spark", "kafka", "tableau", "power bi", "data analysis", "data science",
    "machine learning", "deep learning", "statistics", "sap", "salesforce", "wordpress",
    "shopify", "seo",
    // infrastructure and tooling
    "docker", "kubernetes", "aws", "azure", "gcp", "google cloud", "cloud", "linux", "unix",
    "terraform", "ansible", "jenkins", "ci/cd", "devops", "github", "gitlab", "jira",
    "network engineering", "computer networking", "cybersecurity", "server", "programming",
    "software", "microsoft office",
    // creative software
    "photoshop", "illustrator", "figma", "sketch", "indesign", "premiere", "after effects",
    "blender", "autocad", "solidworks", "unity", "unreal", "canva", "final cut",
];

/// Keywords that must also end a word: "escalation", "canvassing", "reactive" and
/// "Community" stay soft.
const WHOLE_WORD_KEYWORDS: &[&str] = &["scala", "canva", "unity", "react"];

/// Finds `keyword` in `name` starting at a word boundary, and ending at one when
/// `whole_word` is set. Keywords that open with punctuation (`.net`) match anywhere.
fn contains_keyword(name: &str, keyword: &str, whole_word: bool) -> bool {
    let is_word_char = |c: char| c.is_alphanumeric();
    name.match_indices(keyword).any(|(start, _)| {
        let end = start + keyword.len();
        let opens = !keyword.starts_with(is_word_char)
            || !name[..start].chars().next_back().is_some_and(is_word_char);
        let closes = !whole_word
            || !keyword.ends_with(is_word_char)
            || !name[end..].chars().next().is_some_and(is_word_char);
        opens && closes
    })
}

/// Word-prefix matcher over [`TECHNICAL_KEYWORDS`] plus optional extra keywords.
#[derive(Debug, Clone, Default)]
pub struct KeywordCategorizer {
    extra_keywords: Vec<String>,
}

impl KeywordCategorizer {
    /// Extends the built-in vocabulary. Blank keywords are ignored.
    pub fn with_extra_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extra_keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }
}

impl SkillCategorizer for KeywordCategorizer {
    fn categorize(&self, skill_name: &str) -> SkillCategory {
        let name = skill_name.to_lowercase();
        let technical = TECHNICAL_KEYWORDS
            .iter()
            .any(|kw| contains_keyword(&name, kw, WHOLE_WORD_KEYWORDS.contains(kw)))
            || self
                .extra_keywords
                .iter()
                .any(|kw| contains_keyword(&name, kw, false));
        if technical {
            SkillCategory::Technical
        } else {
            SkillCategory::Soft
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Classification
// ────────────────────────────────────────────────────────────────────────────

const FALLBACK_TECHNICAL: &[(&str, u8)] = &[
    ("Data Analysis", 7),
    ("Project Management", 6),
    ("Microsoft Office", 8),
];
const FALLBACK_SOFT: &[(&str, u8)] = &[
    ("Communication", 8),
    ("Teamwork", 8),
    ("Problem Solving", 7),
];

/// The constant assessment returned for empty or absent skill input.
pub fn fallback_assessment() -> SkillAssessment {
    let to_skills = |table: &[(&str, u8)]| -> Vec<Skill> {
        table
            .iter()
            .map(|(name, score)| Skill {
                name: name.to_string(),
                score: *score,
            })
            .collect()
    };
    SkillAssessment {
        technical_skills: to_skills(FALLBACK_TECHNICAL),
        soft_skills: to_skills(FALLBACK_SOFT),
    }
}

/// Classifies with the default keyword vocabulary.
#[cfg_attr(not(test), allow(dead_code))]
pub fn classify(raw_skills: &[Value]) -> SkillAssessment {
    classify_with(raw_skills, &KeywordCategorizer::default())
}

/// Coerces, categorizes, then applies the positional-split and fallback policies.
pub fn classify_with(raw_skills: &[Value], categorizer: &dyn SkillCategorizer) -> SkillAssessment {
    if raw_skills.is_empty() {
        debug!("No skills supplied; returning fallback assessment");
        return fallback_assessment();
    }

    let skills: Vec<Skill> = raw_skills.iter().enumerate().map(coerce).collect();
    let (technical_skills, soft_skills): (Vec<Skill>, Vec<Skill>) = skills
        .iter()
        .cloned()
        .partition(|skill| categorizer.categorize(&skill.name) == SkillCategory::Technical);

    if technical_skills.is_empty() {
        debug!(
            count = skills.len(),
            "No technical skills matched; applying positional split"
        );
        return positional_split(skills);
    }

    SkillAssessment {
        technical_skills,
        soft_skills,
    }
}

/// First `ceil(n/2)` skills technical, the rest soft. Deterministic.
pub fn positional_split(mut skills: Vec<Skill>) -> SkillAssessment {
    let soft_skills = skills.split_off(skills.len().div_ceil(2));
    SkillAssessment {
        technical_skills: skills,
        soft_skills,
    }
}

/// One raw entry to a scored skill. Nameless entries become `Skill <index+1>`.
fn coerce((index, entry): (usize, &Value)) -> Skill {
    let raw = read_skill(entry);
    Skill {
        name: raw.name.unwrap_or_else(|| format!("Skill {}", index + 1)),
        score: raw.level.score(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::proficiency::MAX_SCORE;
    use serde_json::json;

    fn skill(name: &str, score: u8) -> Skill {
        Skill {
            name: name.to_string(),
            score,
        }
    }

    fn names(skills: &[Skill]) -> Vec<&str> {
        skills.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_python_technical_leadership_soft() {
        let result = classify(&[json!("Python"), json!("Leadership")]);
        assert!(result.technical_skills.contains(&skill("Python", 5)));
        assert!(result.soft_skills.contains(&skill("Leadership", 5)));
    }

    #[test]
    fn test_empty_input_returns_fallback() {
        let result = classify(&[]);
        assert_eq!(result, fallback_assessment());
        assert!(!result.technical_skills.is_empty());
        assert!(!result.soft_skills.is_empty());
    }

    #[test]
    fn test_fallback_is_stable_across_calls() {
        assert_eq!(classify(&[]), classify(&[]));
    }

    #[test]
    fn test_label_levels_become_scores() {
        let result = classify(&[
            json!({"name": "Docker", "level": "Expert"}),
            json!({"name": "Kubernetes", "level": "Beginner"}),
            json!({"name": "Terraform", "level": "Guru"}),
        ]);
        assert_eq!(
            result.technical_skills,
            vec![skill("Docker", 9), skill("Kubernetes", 3), skill("Terraform", 5)]
        );
    }

    #[test]
    fn test_numeric_scores_are_kept_and_bounded() {
        let result = classify(&[
            json!({"name": "SQL", "score": 8}),
            json!({"name": "AWS", "rating": 95}),
            json!({"name": "Linux", "score": 42.0e3}),
        ]);
        let scores: Vec<u8> = result.technical_skills.iter().map(|s| s.score).collect();
        assert_eq!(scores, vec![8, 10, 10]);
    }

    #[test]
    fn test_case_insensitive_word_prefix_match() {
        let result = classify(&[json!("ADVANCED PYTHONIC IDIOMS"), json!("Adobe Photoshop CC")]);
        assert_eq!(result.technical_skills.len(), 2);
        assert!(result.soft_skills.is_empty());
    }

    #[test]
    fn test_keywords_match_at_word_boundaries() {
        let categorizer = KeywordCategorizer::default();
        for technical in [
            "Scala",
            "Canva",
            "Unity",
            "React.js",
            "Ruby on Rails",
            "Computer networking",
            "MySQL",
            "ASP.NET",
            "JavaScript",
        ] {
            assert_eq!(
                categorizer.categorize(technical),
                SkillCategory::Technical,
                "{technical} should be technical"
            );
        }
    }

    #[test]
    fn test_soft_words_do_not_hit_short_tokens() {
        let categorizer = KeywordCategorizer::default();
        for soft in [
            "Digital marketing",
            "Rapid prototyping",
            "Building trust",
            "Excellent communication",
            "Negotiation",
            "Good judgement",
            "Community engagement",
            "Conflict escalation",
            "Door-to-door canvassing",
            "Professional networking",
            "Guardrails for teams",
            "Opportunity spotting",
            "Reactive problem solving",
        ] {
            assert_eq!(
                categorizer.categorize(soft),
                SkillCategory::Soft,
                "{soft} should be soft"
            );
        }
    }

    #[test]
    fn test_positional_split_when_no_technical() {
        let result = classify(&[
            json!("Leadership"),
            json!("Empathy"),
            json!("Teamwork"),
            json!("Patience"),
            json!("Humour"),
        ]);
        assert_eq!(
            names(&result.technical_skills),
            vec!["Leadership", "Empathy", "Teamwork"]
        );
        assert_eq!(names(&result.soft_skills), vec!["Patience", "Humour"]);
    }

    #[test]
    fn test_positional_split_single_entry_is_technical() {
        let result = classify(&[json!("Leadership")]);
        assert_eq!(names(&result.technical_skills), vec!["Leadership"]);
        assert!(result.soft_skills.is_empty());
    }

    #[test]
    fn test_unexpected_shapes_get_numbered_defaults() {
        let result = classify(&[json!(42), json!(null), json!({"level": "Expert"}), json!("Python")]);
        assert_eq!(names(&result.technical_skills), vec!["Python"]);
        assert_eq!(
            result.soft_skills,
            vec![skill("Skill 1", 5), skill("Skill 2", 5), skill("Skill 3", 9)]
        );
    }

    #[test]
    fn test_never_both_empty_and_scores_bounded() {
        let inputs = vec![
            vec![json!(null)],
            vec![json!([]), json!({})],
            vec![json!(""), json!("   ")],
            vec![json!({"name": "X", "score": -100})],
            vec![json!({"name": "Y", "level": "9999%"})],
            vec![json!(true), json!(1.5)],
        ];
        for input in inputs {
            let result = classify(&input);
            assert!(
                !(result.technical_skills.is_empty() && result.soft_skills.is_empty()),
                "degenerate for {input:?}"
            );
            for s in result.technical_skills.iter().chain(&result.soft_skills) {
                assert!(s.score <= MAX_SCORE);
            }
        }
    }

    #[test]
    fn test_extra_keywords_extend_vocabulary() {
        let categorizer = KeywordCategorizer::with_extra_keywords([" Rust ", ""]);
        let result = classify_with(&[json!("Rust"), json!("Mentoring")], &categorizer);
        assert_eq!(names(&result.technical_skills), vec!["Rust"]);
        assert_eq!(names(&result.soft_skills), vec!["Mentoring"]);
    }

    #[test]
    fn test_custom_strategy_is_respected() {
        struct EverythingSoft;
        impl SkillCategorizer for EverythingSoft {
            fn categorize(&self, _skill_name: &str) -> SkillCategory {
                SkillCategory::Soft
            }
        }
        let result = classify_with(&[json!("Python"), json!("Java")], &EverythingSoft);
        assert_eq!(names(&result.technical_skills), vec!["Python"]);
        assert_eq!(names(&result.soft_skills), vec!["Java"]);
    }

    #[test]
    fn test_assessment_serializes_camel_case() {
        let value = serde_json::to_value(classify(&[json!("SQL")])).unwrap();
        assert_eq!(
            value,
            json!({"technicalSkills": [{"name": "SQL", "score": 5}], "softSkills": []})
        );
    }
}
