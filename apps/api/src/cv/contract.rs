//! Template Contract checker.
//!
//! Templates render whatever `CanonicalCv` they are handed, without guards. This
//! module states what they are allowed to assume and checks it. A violation is a
//! canonicalizer bug, never an input problem.

use std::fmt;

use crate::cv::field_map::SectionEntry;
use crate::cv::models::{CanonicalCv, ContactEntry, ContactKind};
use crate::skills::proficiency::MAX_PERCENT;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    SkillPercentOutOfRange { name: String, level_percent: u8 },
    ContactUrlMalformed { kind: ContactKind, url: String },
    ContactsOutOfOrder,
    BlankEntry { section: &'static str, index: usize },
    MissingPeriod { section: &'static str, index: usize },
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractViolation::SkillPercentOutOfRange {
                name,
                level_percent,
            } => write!(f, "skill '{name}' has levelPercent {level_percent} > {MAX_PERCENT}"),
            ContractViolation::ContactUrlMalformed { kind, url } => {
                write!(f, "{} contact has malformed url '{url}'", kind.label())
            }
            ContractViolation::ContactsOutOfOrder => {
                write!(f, "contacts are not in phone, email, location order")
            }
            ContractViolation::BlankEntry { section, index } => {
                write!(f, "{section}[{index}] has no visible content")
            }
            ContractViolation::MissingPeriod { section, index } => {
                write!(f, "{section}[{index}] has a start date but no period")
            }
        }
    }
}

/// Every violation found, in document order. Empty means render-safe.
pub fn check(cv: &CanonicalCv) -> Vec<ContractViolation> {
    let mut violations = Vec::new();

    for skill in &cv.skills {
        if skill.level_percent > MAX_PERCENT {
            violations.push(ContractViolation::SkillPercentOutOfRange {
                name: skill.name.clone(),
                level_percent: skill.level_percent,
            });
        }
    }
    check_blank(
        "skills",
        cv.skills.iter().map(|s| s.name.trim().is_empty()),
        &mut violations,
    );

    violations.extend(cv.contacts.iter().filter_map(check_contact_url));
    if !cv.contacts.windows(2).all(|pair| pair[0].kind < pair[1].kind) {
        violations.push(ContractViolation::ContactsOutOfOrder);
    }

    check_entries("workExperience", &cv.work_experience, &mut violations);
    check_entries("education", &cv.education, &mut violations);
    check_entries("certifications", &cv.certifications, &mut violations);
    check_entries("languages", &cv.languages, &mut violations);
    check_entries("interests", &cv.interests, &mut violations);
    check_entries("references", &cv.references, &mut violations);

    check_periods(
        "workExperience",
        cv.work_experience.iter().map(|e| (&e.start_date, &e.period)),
        &mut violations,
    );
    check_periods(
        "education",
        cv.education.iter().map(|e| (&e.start_date, &e.period)),
        &mut violations,
    );
    check_periods(
        "certifications",
        cv.certifications.iter().map(|e| (&e.start_date, &e.period)),
        &mut violations,
    );

    violations
}

fn check_contact_url(contact: &ContactEntry) -> Option<ContractViolation> {
    let well_formed = match contact.kind.scheme() {
        Some(scheme) => contact.url.is_empty() || contact.url.starts_with(scheme),
        None => contact.url.is_empty(),
    };
    (!well_formed).then(|| ContractViolation::ContactUrlMalformed {
        kind: contact.kind,
        url: contact.url.clone(),
    })
}

fn check_entries<E: SectionEntry>(
    section: &'static str,
    entries: &[E],
    violations: &mut Vec<ContractViolation>,
) {
    check_blank(section, entries.iter().map(E::is_blank), violations);
}

fn check_blank(
    section: &'static str,
    blanks: impl Iterator<Item = bool>,
    violations: &mut Vec<ContractViolation>,
) {
    violations.extend(
        blanks
            .enumerate()
            .filter(|(_, blank)| *blank)
            .map(|(index, _)| ContractViolation::BlankEntry { section, index }),
    );
}

fn check_periods<'a>(
    section: &'static str,
    dated: impl Iterator<Item = (&'a String, &'a String)>,
    violations: &mut Vec<ContractViolation>,
) {
    violations.extend(
        dated
            .enumerate()
            .filter(|(_, (start, period))| !start.is_empty() && period.is_empty())
            .map(|(index, _)| ContractViolation::MissingPeriod { section, index }),
    );
}
