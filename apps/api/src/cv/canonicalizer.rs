//! Canonicalizer — one raw record in, one render-safe `CanonicalCv` out.
//!
//! Total over every JSON value. Missing data becomes defaults, unrecognized shapes
//! are skipped, and the result is re-checked against the template contract.

use serde_json::Value;
use tracing::warn;

use crate::cv::contract;
use crate::cv::field_map::{self, map_section};
use crate::cv::models::{CanonicalCv, SkillLevel};
use crate::skills::classifier::{classify_with, SkillAssessment, SkillCategorizer};
use crate::skills::entry::{find_skill_entries, read_skill};

pub fn canonicalize(raw: &Value) -> CanonicalCv {
    let fields = field_map::map(raw);

    let cv = CanonicalCv {
        profile: fields.profile,
        contacts: fields.contacts,
        professional_summary: fields.professional_summary,
        education: map_section(raw),
        work_experience: map_section(raw),
        certifications: map_section(raw),
        languages: map_section(raw),
        interests: map_section(raw),
        references: map_section(raw),
        skills: preview_skills(raw),
    };

    for violation in contract::check(&cv) {
        warn!("Canonical CV breaks template contract: {violation}");
    }

    cv
}

/// Analysis-display path: the record's skills, partitioned and scored 0–10.
pub fn assess_with(raw: &Value, categorizer: &dyn SkillCategorizer) -> SkillAssessment {
    classify_with(&find_skill_entries(raw), categorizer)
}

/// Preview path: every named skill with a 0–100 bar. Nameless entries are dropped.
fn preview_skills(raw: &Value) -> Vec<SkillLevel> {
    find_skill_entries(raw)
        .iter()
        .map(read_skill)
        .filter_map(|skill| {
            let level_percent = skill.level.percent();
            skill.name.map(|name| SkillLevel {
                name,
                level_percent,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cv::models::ContactKind;
    use crate::skills::classifier::{fallback_assessment, KeywordCategorizer, Skill};
    use serde_json::json;

    #[test]
    fn test_first_and_last_name_with_email_link() {
        let cv = canonicalize(&json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@x.com"
        }));
        assert_eq!(cv.profile.name, "Ada Lovelace");
        let email = cv
            .contacts
            .iter()
            .find(|c| c.kind == ContactKind::Email)
            .unwrap();
        assert_eq!(email.url, "mailto:ada@x.com");
    }

    #[test]
    fn test_open_ended_experience_is_present() {
        let cv = canonicalize(&json!({
            "experience": [{
                "job_title": "Engineer",
                "company_name": "Acme",
                "start_date": "2020-01-01",
                "end_date": null
            }]
        }));
        let work = &cv.work_experience[0];
        assert!(work.period.ends_with("Present"));
        assert_eq!(work.period, "Jan 2020 - Present");
        assert_eq!(work.title, "Engineer");
        assert_eq!(work.company, "Acme");
    }

    #[test]
    fn test_expert_skill_is_ninety_percent() {
        let cv = canonicalize(&json!({
            "skills": [{"skill_name": "SQL", "skill_level": "Expert"}]
        }));
        assert_eq!(
            cv.skills,
            vec![SkillLevel {
                name: "SQL".to_string(),
                level_percent: 90
            }]
        );
    }

    #[test]
    fn test_preview_skill_mapping() {
        let cv = canonicalize(&json!({
            "skills": [
                "Figma",
                {"name": "Go", "level": 7},
                {"name": "SQL", "level": 85},
                {"name": "C", "level": 400},
                {"name": "Lisp", "level": "Sorcerer"},
                {"level": "Expert"},
                17
            ]
        }));
        let bars: Vec<(&str, u8)> = cv
            .skills
            .iter()
            .map(|s| (s.name.as_str(), s.level_percent))
            .collect();
        assert_eq!(
            bars,
            vec![("Figma", 50), ("Go", 70), ("SQL", 85), ("C", 100), ("Lisp", 50)]
        );
    }

    #[test]
    fn test_null_record_has_empty_sequences() {
        let cv = canonicalize(&Value::Null);
        assert!(cv.skills.is_empty());
        assert!(cv.education.is_empty());
        assert!(cv.work_experience.is_empty());
        assert!(cv.certifications.is_empty());
        assert!(cv.languages.is_empty());
        assert!(cv.interests.is_empty());
        assert!(cv.references.is_empty());
        assert_eq!(cv, CanonicalCv::default());
    }

    #[test]
    fn test_serialized_cv_has_no_nulls() {
        fn assert_no_null(value: &Value) {
            match value {
                Value::Null => panic!("null in serialized CV"),
                Value::Array(items) => items.iter().for_each(assert_no_null),
                Value::Object(map) => map.values().for_each(assert_no_null),
                _ => {}
            }
        }
        let cv = canonicalize(&json!({"name": "X", "experience": [{"title": "Dev"}]}));
        let value = serde_json::to_value(&cv).unwrap();
        assert_no_null(&value);
        assert!(value["workExperience"][0]["responsibilities"].is_array());
        assert_eq!(value["professionalSummary"], json!(""));
    }

    #[test]
    fn test_totality_over_garbage() {
        let garbage = vec![
            json!(null),
            json!({}),
            json!([]),
            json!([1, "two", null, {"three": 3}]),
            json!(42),
            json!(-0.5),
            json!("just a string"),
            json!(true),
            json!({"profile": [], "personal_info": "nope", "contact": 7}),
            json!({"experience": "Engineer at Acme\n- Intern at Foo"}),
            json!({"experience": {"a": {"title": []}, "b": {"company": {"x": 1}}}}),
            json!({"education": [null, 3, [], {}, {"degree": {"nested": true}}]}),
            json!({"skills": {"a": null, "b": [[]], "c": {"d": {}}}}),
            json!({"skills": [{"name": "X", "level": "1e999"}, {"name": "Y", "score": -1}]}),
            json!({"certifications": [{"name": "AWS", "issue_date": "whenever"}]}),
            json!({"social_links": [42, null, {"url": 5}], "linkedin": {"deep": []}}),
            json!({"phone": "n/a", "email": "   ", "location": {"city": "", "country": null}}),
            json!({"analysis": {"work_experience": [{"start_date": "2020-13-45"}]}}),
        ];
        for raw in garbage {
            let cv = canonicalize(&raw);
            let violations = contract::check(&cv);
            assert!(violations.is_empty(), "{raw}: {violations:?}");
            assert!(cv.skills.iter().all(|s| s.level_percent <= 100));
        }
    }

    #[test]
    fn test_assess_locates_skills() {
        let raw = json!({"analysis": {"skills": ["Python", "Leadership"]}});
        let assessment = assess_with(&raw, &KeywordCategorizer::default());
        assert_eq!(
            assessment.technical_skills,
            vec![Skill {
                name: "Python".to_string(),
                score: 5
            }]
        );
        assert_eq!(assessment.soft_skills.len(), 1);
    }

    #[test]
    fn test_assess_without_skills_is_fallback() {
        let assessment = assess_with(&json!({"name": "Ada"}), &KeywordCategorizer::default());
        assert_eq!(assessment, fallback_assessment());
    }

    #[test]
    fn test_canonicalize_is_deterministic() {
        let raw = json!({
            "full_name": "Grace Hopper",
            "summary": "**Rear admiral**\\nCompiler pioneer",
            "skills": "COBOL, Leadership"
        });
        assert_eq!(canonicalize(&raw), canonicalize(&raw));
    }
}
