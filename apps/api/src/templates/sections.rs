//! Section builders shared by all templates.
//!
//! Each builder returns `None` exactly when the backing canonical data is empty, so
//! templates never decide visibility themselves.

use crate::cv::models::CanonicalCv;
use crate::templates::view::{Block, Header, Section, SectionKind};

pub const REFERENCES_ON_REQUEST: &str = "References available on request.";

fn join_present(parts: &[&str], separator: &str) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(separator)
}

fn labelled(label: &str, value: &str) -> Option<String> {
    (!value.is_empty()).then(|| format!("{label}: {value}"))
}

/// Contact values first, then social links.
pub fn contact_links(cv: &CanonicalCv) -> Vec<Block> {
    let contacts = cv.contacts.iter().map(|c| Block::Link {
        label: c.value.clone(),
        url: c.url.clone(),
    });
    let socials = cv.profile.social_links.iter().map(|l| Block::Link {
        label: if l.handle.is_empty() {
            l.platform.clone()
        } else {
            format!("{}: {}", l.platform, l.handle)
        },
        url: l.url.clone(),
    });
    contacts.chain(socials).collect()
}

pub fn header(cv: &CanonicalCv, with_avatar: bool, with_links: bool) -> Header {
    Header {
        name: cv.profile.name.clone(),
        headline: cv.profile.headline.clone(),
        avatar_url: if with_avatar {
            cv.profile.avatar_url.clone()
        } else {
            String::new()
        },
        links: if with_links {
            contact_links(cv)
        } else {
            Vec::new()
        },
    }
}

pub fn contacts(cv: &CanonicalCv) -> Option<Section> {
    if cv.contacts.is_empty() && cv.profile.social_links.is_empty() {
        return None;
    }
    Some(Section::new(SectionKind::Contacts, contact_links(cv)))
}

pub fn summary(cv: &CanonicalCv) -> Option<Section> {
    if cv.professional_summary.is_empty() {
        return None;
    }
    Some(Section::new(
        SectionKind::Summary,
        vec![Block::Paragraph {
            text: cv.professional_summary.clone(),
        }],
    ))
}

pub fn experience(cv: &CanonicalCv) -> Option<Section> {
    if cv.work_experience.is_empty() {
        return None;
    }
    let blocks = cv
        .work_experience
        .iter()
        .map(|work| Block::Entry {
            title: work.title.clone(),
            subtitle: join_present(&[&work.company, &work.location], ", "),
            period: work.period.clone(),
            bullets: work
                .description
                .iter()
                .chain(&work.responsibilities)
                .chain(&work.achievements)
                .cloned()
                .collect(),
        })
        .collect();
    Some(Section::new(SectionKind::Experience, blocks))
}

pub fn education(cv: &CanonicalCv) -> Option<Section> {
    if cv.education.is_empty() {
        return None;
    }
    let blocks = cv
        .education
        .iter()
        .map(|edu| Block::Entry {
            title: join_present(&[&edu.degree, &edu.field_of_study], " in "),
            subtitle: edu.institution.clone(),
            period: edu.period.clone(),
            bullets: labelled("Grade", &edu.grade)
                .into_iter()
                .chain(edu.description.iter().cloned())
                .collect(),
        })
        .collect();
    Some(Section::new(SectionKind::Education, blocks))
}

pub fn skill_meters(cv: &CanonicalCv) -> Option<Section> {
    if cv.skills.is_empty() {
        return None;
    }
    let blocks = cv
        .skills
        .iter()
        .map(|s| Block::Meter {
            label: s.name.clone(),
            percent: s.level_percent,
        })
        .collect();
    Some(Section::new(SectionKind::Skills, blocks))
}

pub fn skill_tags(cv: &CanonicalCv) -> Option<Section> {
    if cv.skills.is_empty() {
        return None;
    }
    let blocks = cv
        .skills
        .iter()
        .map(|s| Block::Tag {
            label: s.name.clone(),
        })
        .collect();
    Some(Section::new(SectionKind::Skills, blocks))
}

pub fn certifications(cv: &CanonicalCv) -> Option<Section> {
    if cv.certifications.is_empty() {
        return None;
    }
    let blocks = cv
        .certifications
        .iter()
        .map(|cert| Block::Entry {
            title: cert.name.clone(),
            subtitle: cert.issuer.clone(),
            period: cert.period.clone(),
            bullets: labelled("Credential ID", &cert.credential_id)
                .into_iter()
                .chain((!cert.url.is_empty()).then(|| cert.url.clone()))
                .collect(),
        })
        .collect();
    Some(Section::new(SectionKind::Certifications, blocks))
}

pub fn languages(cv: &CanonicalCv) -> Option<Section> {
    if cv.languages.is_empty() {
        return None;
    }
    let blocks = cv
        .languages
        .iter()
        .map(|lang| Block::Paragraph {
            text: join_present(&[&lang.name, &lang.proficiency], " - "),
        })
        .collect();
    Some(Section::new(SectionKind::Languages, blocks))
}

pub fn interests(cv: &CanonicalCv) -> Option<Section> {
    if cv.interests.is_empty() {
        return None;
    }
    let blocks = cv
        .interests
        .iter()
        .map(|i| Block::Tag {
            label: i.name.clone(),
        })
        .collect();
    Some(Section::new(SectionKind::Interests, blocks))
}

pub fn references(cv: &CanonicalCv) -> Option<Section> {
    if cv.references.is_empty() {
        return None;
    }
    let blocks = cv
        .references
        .iter()
        .map(|r| Block::Entry {
            title: r.name.clone(),
            subtitle: join_present(&[&r.position, &r.company], ", "),
            period: String::new(),
            bullets: [
                labelled("Relationship", &r.relationship),
                labelled("Email", &r.email),
                labelled("Phone", &r.phone),
            ]
            .into_iter()
            .flatten()
            .collect(),
        })
        .collect();
    Some(Section::new(SectionKind::References, blocks))
}

/// A single line in place of the reference details; only when references exist.
pub fn references_on_request(cv: &CanonicalCv) -> Option<Section> {
    if cv.references.is_empty() {
        return None;
    }
    Some(Section::new(
        SectionKind::References,
        vec![Block::Paragraph {
            text: REFERENCES_ON_REQUEST.to_string(),
        }],
    ))
}
