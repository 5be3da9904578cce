//! Field Mapper — resolves canonical fields out of raw records of any producer dialect.
//!
//! Every canonical field owns a priority-ordered candidate table. The first candidate
//! that resolves to visible text wins; when none does the field keeps its default.
//! New producer dialects are supported by adding rows to the tables, never by adding
//! branches.

use serde_json::{Map, Value};

use crate::cv::dates::{point_period, ranged_period};
use crate::cv::list_normalizer::{normalize_list, normalize_terms};
use crate::cv::models::{
    CertificationEntry, ContactEntry, ContactKind, EducationEntry, InterestEntry, LanguageEntry,
    Profile, ReferenceEntry, SocialLink, WorkEntry,
};

use Source::{Join, Path};

// ────────────────────────────────────────────────────────────────────────────
// Candidate sources
// ────────────────────────────────────────────────────────────────────────────

/// One candidate location for a canonical field.
#[derive(Debug, Clone, Copy)]
pub enum Source {
    /// Dotted path, e.g. `profile.name`.
    Path(&'static str),
    /// Several paths joined with a separator over the parts that are present.
    Join(&'static [&'static str], &'static str),
}

pub const NAME: &[Source] = &[
    Path("profile.name"),
    Path("profile.full_name"),
    Path("personal_info.full_name"),
    Path("personal_info.name"),
    Path("full_name"),
    Path("name"),
    Join(&["first_name", "last_name"], " "),
    Join(&["personal_info.first_name", "personal_info.last_name"], " "),
    Join(&["profile.first_name", "profile.last_name"], " "),
];

pub const HEADLINE: &[Source] = &[
    Path("profile.headline"),
    Path("profile.profession"),
    Path("profile.title"),
    Path("headline"),
    Path("profession"),
    Path("job_title"),
    Path("title"),
    Path("personal_info.profession"),
    Path("personal_info.job_title"),
    Path("personal_info.title"),
    Path("analysis.current_role"),
    Path("analysis.job_title"),
];

pub const AVATAR: &[Source] = &[
    Path("profile.avatar"),
    Path("profile.avatar_url"),
    Path("profile.photo"),
    Path("avatar"),
    Path("avatar_url"),
    Path("photo"),
    Path("photo_url"),
    Path("profile_picture"),
    Path("image"),
    Path("personal_info.photo"),
];

pub const SUMMARY: &[Source] = &[
    Path("professional_summary"),
    Path("summary"),
    Path("profile.summary"),
    Path("about"),
    Path("bio"),
    Path("objective"),
    Path("personal_info.summary"),
    Path("analysis.summary"),
    Path("parsed_data.summary"),
];

pub const PHONE: &[Source] = &[
    Path("phone"),
    Path("phone_number"),
    Path("mobile"),
    Path("contact.phone"),
    Path("contact_info.phone"),
    Path("personal_info.phone"),
    Path("personal_info.phone_number"),
    Path("profile.phone"),
];

pub const EMAIL: &[Source] = &[
    Path("email"),
    Path("email_address"),
    Path("contact.email"),
    Path("contact_info.email"),
    Path("personal_info.email"),
    Path("profile.email"),
];

pub const LOCATION: &[Source] = &[
    Path("location"),
    Path("address"),
    Join(&["location.city", "location.region", "location.country"], ", "),
    Path("contact.location"),
    Path("contact_info.location"),
    Path("personal_info.location"),
    Path("personal_info.address"),
    Path("profile.location"),
    Join(&["city", "country"], ", "),
    Join(&["personal_info.city", "personal_info.country"], ", "),
];

pub const SOCIAL_LISTS: &[&str] = &[
    "social_links",
    "socials",
    "links",
    "profile.social_links",
    "profile.links",
    "personal_info.social_links",
];

pub const SKILLS_SECTION: &[&str] = &[
    "skills",
    "skill_set",
    "skillset",
    "profile.skills",
    "analysis.skills",
    "parsed_data.skills",
];

const SOCIAL_PLATFORM: &[Source] = &[
    Path("platform"),
    Path("network"),
    Path("name"),
    Path("type"),
    Path("label"),
];
const SOCIAL_URL: &[Source] = &[Path("url"), Path("link"), Path("href")];
const SOCIAL_HANDLE: &[Source] = &[Path("handle"), Path("username"), Path("user")];

/// Prefixes under which flat social keys (`linkedin`, `github_url`, ...) appear.
const SOCIAL_KEY_PREFIXES: &[&str] = &["", "profile.", "personal_info.", "contact."];
const SOCIAL_KEY_SUFFIXES: &[&str] = &["", "_url"];
const GENERIC_LINK_KEYS: &[(&str, &str)] = &[("website", "Website"), ("portfolio", "Portfolio")];

const CURRENT_FLAGS: &[&str] = &[
    "is_current",
    "current",
    "currently_working",
    "currently_studying",
    "is_present",
];

// ────────────────────────────────────────────────────────────────────────────
// Resolution primitives
// ────────────────────────────────────────────────────────────────────────────

/// Follows a dotted path. `null` at the end counts as absent.
pub fn lookup<'a>(raw: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(raw, |node, key| node.get(key))
        .filter(|v| !v.is_null())
}

/// Visible text of a scalar. Strings are trimmed; numbers are rendered.
pub fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub fn resolve_text(raw: &Value, sources: &[Source]) -> Option<String> {
    sources.iter().find_map(|source| match source {
        Path(path) => lookup(raw, path).and_then(text_of),
        Join(paths, separator) => {
            let parts: Vec<String> = paths
                .iter()
                .filter_map(|p| lookup(raw, p).and_then(text_of))
                .collect();
            (!parts.is_empty()).then(|| parts.join(separator))
        }
    })
}

pub fn text_or_default(raw: &Value, sources: &[Source]) -> String {
    resolve_text(raw, sources).unwrap_or_default()
}

/// First candidate that normalizes to a non-empty list.
pub fn resolve_list(raw: &Value, sources: &[Source]) -> Vec<String> {
    sources
        .iter()
        .filter_map(|source| match source {
            Path(path) => lookup(raw, path),
            Join(..) => None,
        })
        .map(normalize_list)
        .find(|items| !items.is_empty())
        .unwrap_or_default()
}

/// True when any flag is `true`, `"true"`, `"yes"` or `1`.
pub fn resolve_flag(raw: &Value, paths: &[&str]) -> bool {
    paths.iter().any(|path| match lookup(raw, path) {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_i64() == Some(1),
        Some(Value::String(s)) => matches!(s.trim().to_lowercase().as_str(), "true" | "yes" | "1"),
        _ => false,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Scalar fields
// ────────────────────────────────────────────────────────────────────────────

/// The scalar and nested-object part of a canonical CV.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanonicalFields {
    pub profile: Profile,
    pub contacts: Vec<ContactEntry>,
    pub professional_summary: String,
}

pub fn map(raw: &Value) -> CanonicalFields {
    CanonicalFields {
        profile: Profile {
            name: text_or_default(raw, NAME),
            headline: text_or_default(raw, HEADLINE),
            avatar_url: text_or_default(raw, AVATAR),
            social_links: map_social_links(raw),
        },
        contacts: map_contacts(raw),
        professional_summary: resolve_list(raw, SUMMARY).join(" "),
    }
}

/// Contacts in fixed order: phone, email, location.
pub fn map_contacts(raw: &Value) -> Vec<ContactEntry> {
    [
        (ContactKind::Phone, PHONE),
        (ContactKind::Email, EMAIL),
        (ContactKind::Location, LOCATION),
    ]
    .into_iter()
    .filter_map(|(kind, sources)| resolve_text(raw, sources).map(|value| contact(kind, value)))
    .collect()
}

pub fn contact(kind: ContactKind, value: String) -> ContactEntry {
    let url = match kind {
        ContactKind::Phone => {
            let dialable: String = value
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '+')
                .collect();
            if dialable.chars().any(|c| c.is_ascii_digit()) {
                format!("tel:{dialable}")
            } else {
                String::new()
            }
        }
        ContactKind::Email if value.contains('@') && !value.contains(char::is_whitespace) => {
            format!("mailto:{value}")
        }
        ContactKind::Email | ContactKind::Location => String::new(),
    };
    ContactEntry { kind, value, url }
}

// ────────────────────────────────────────────────────────────────────────────
// Social links
// ────────────────────────────────────────────────────────────────────────────

struct KnownPlatform {
    key: &'static str,
    name: &'static str,
    host: &'static str,
    profile_prefix: &'static str,
}

const KNOWN_PLATFORMS: &[KnownPlatform] = &[
    KnownPlatform {
        key: "linkedin",
        name: "LinkedIn",
        host: "linkedin.com",
        profile_prefix: "https://www.linkedin.com/in/",
    },
    KnownPlatform {
        key: "github",
        name: "GitHub",
        host: "github.com",
        profile_prefix: "https://github.com/",
    },
    KnownPlatform {
        key: "gitlab",
        name: "GitLab",
        host: "gitlab.com",
        profile_prefix: "https://gitlab.com/",
    },
    KnownPlatform {
        key: "twitter",
        name: "Twitter",
        host: "twitter.com",
        profile_prefix: "https://twitter.com/",
    },
    KnownPlatform {
        key: "x",
        name: "X",
        host: "x.com",
        profile_prefix: "https://x.com/",
    },
    KnownPlatform {
        key: "dribbble",
        name: "Dribbble",
        host: "dribbble.com",
        profile_prefix: "https://dribbble.com/",
    },
    KnownPlatform {
        key: "behance",
        name: "Behance",
        host: "behance.net",
        profile_prefix: "https://www.behance.net/",
    },
    KnownPlatform {
        key: "medium",
        name: "Medium",
        host: "medium.com",
        profile_prefix: "https://medium.com/@",
    },
];

/// Social links from list-shaped sources first, then flat per-platform keys.
/// Links are deduplicated by URL, first occurrence wins.
pub fn map_social_links(raw: &Value) -> Vec<SocialLink> {
    let mut links: Vec<SocialLink> = Vec::new();

    let listed = SOCIAL_LISTS
        .iter()
        .filter_map(|path| lookup(raw, path))
        .filter_map(Value::as_array)
        .flatten()
        .filter_map(|item| match item {
            Value::Object(_) => social_link(
                resolve_text(item, SOCIAL_PLATFORM),
                resolve_text(item, SOCIAL_URL),
                resolve_text(item, SOCIAL_HANDLE),
            ),
            other => text_of(other)
                .filter(|value| looks_like_url(value))
                .and_then(|value| social_link(None, Some(value), None)),
        });

    let flat = KNOWN_PLATFORMS
        .iter()
        .map(|p| (p.key, p.name, true))
        .chain(GENERIC_LINK_KEYS.iter().map(|&(key, name)| (key, name, false)))
        .filter_map(|(key, name, known)| {
            flat_social_value(raw, key).and_then(|value| {
                // A known platform's value is a handle unless it is clearly a link.
                let is_url = if known {
                    value.contains("://") || find_platform_by_url(&value).is_some()
                } else {
                    looks_like_url(&value)
                };
                if is_url {
                    social_link(Some(name.to_string()), Some(value), None)
                } else {
                    social_link(Some(name.to_string()), None, Some(value))
                }
            })
        });

    for link in listed.chain(flat) {
        if !links.iter().any(|l| l.url.eq_ignore_ascii_case(&link.url)) {
            links.push(link);
        }
    }
    links
}

fn flat_social_value(raw: &Value, key: &str) -> Option<String> {
    SOCIAL_KEY_PREFIXES.iter().find_map(|prefix| {
        SOCIAL_KEY_SUFFIXES
            .iter()
            .find_map(|suffix| lookup(raw, &format!("{prefix}{key}{suffix}")).and_then(text_of))
    })
}

/// Builds one link. A URL is required, or a whitespace-free handle on a known
/// platform to build one.
fn social_link(
    platform: Option<String>,
    url: Option<String>,
    handle: Option<String>,
) -> Option<SocialLink> {
    let handle = handle.map(|h| h.trim_start_matches('@').to_string());
    let known = platform
        .as_deref()
        .and_then(find_platform_by_name)
        .or_else(|| url.as_deref().and_then(find_platform_by_url));

    let url = match (url, &handle, known) {
        (Some(url), _, _) => with_scheme(&url),
        (None, Some(handle), Some(known))
            if !handle.is_empty() && !handle.contains(char::is_whitespace) =>
        {
            format!("{}{}", known.profile_prefix, handle)
        }
        _ => return None,
    };

    let (host, path) = split_url(&url);
    let handle = handle
        .filter(|h| !h.is_empty())
        .or_else(|| {
            path.rsplit('/')
                .find(|segment| !segment.is_empty())
                .map(|segment| segment.trim_start_matches('@').to_string())
        })
        .unwrap_or_else(|| host.trim_start_matches("www.").to_string());

    let platform = known
        .map(|k| k.name.to_string())
        .or(platform)
        .unwrap_or_else(|| "Website".to_string());

    Some(SocialLink {
        platform,
        handle,
        url,
    })
}

fn find_platform_by_name(name: &str) -> Option<&'static KnownPlatform> {
    let name = name.trim();
    KNOWN_PLATFORMS
        .iter()
        .find(|p| p.key.eq_ignore_ascii_case(name) || p.name.eq_ignore_ascii_case(name))
}

fn find_platform_by_url(url: &str) -> Option<&'static KnownPlatform> {
    let (host, _) = split_url(url);
    let host = host.to_lowercase();
    KNOWN_PLATFORMS
        .iter()
        .find(|p| host == p.host || host.ends_with(&format!(".{}", p.host)))
}

fn looks_like_url(value: &str) -> bool {
    value.contains("://") || value.contains('/') || value.contains('.')
}

fn with_scheme(url: &str) -> String {
    let url = url.trim();
    if url.contains("://") {
        url.to_string()
    } else {
        format!("https://{}", url.trim_start_matches('/'))
    }
}

/// `(host, path)` of a URL, query and fragment dropped.
fn split_url(url: &str) -> (&str, &str) {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    let rest = rest.split(['?', '#']).next().unwrap_or_default();
    rest.split_once('/').unwrap_or((rest, ""))
}

// ────────────────────────────────────────────────────────────────────────────
// Section entries
// ────────────────────────────────────────────────────────────────────────────

/// A canonical section entry that can be mapped out of one raw item.
pub trait SectionEntry: Sized {
    /// Paths of the section collection, in priority order.
    const SECTION: &'static [&'static str];

    fn from_object(item: &Value) -> Self;

    /// Entry built from a bare string item; fills the primary field.
    fn from_text(text: String) -> Self;

    fn is_blank(&self) -> bool;

    /// How a section given as one string is cut into items.
    fn split_text(raw: &Value) -> Vec<String> {
        normalize_list(raw)
    }
}

/// Maps a whole section. Arrays, single objects, keyed collections of objects and
/// free-text strings are all accepted; the first source with entries wins.
pub fn map_section<E: SectionEntry>(raw: &Value) -> Vec<E> {
    E::SECTION
        .iter()
        .filter_map(|path| lookup(raw, path))
        .map(section_entries::<E>)
        .find(|entries| !entries.is_empty())
        .unwrap_or_default()
}

fn section_entries<E: SectionEntry>(value: &Value) -> Vec<E> {
    let entries: Vec<E> = match value {
        Value::Array(items) => items.iter().filter_map(entry_from_element::<E>).collect(),
        Value::Object(map) if is_keyed_collection::<E>(map) => {
            map.values().map(E::from_object).collect()
        }
        Value::Object(_) => vec![E::from_object(value)],
        Value::String(_) => E::split_text(value).into_iter().map(E::from_text).collect(),
        _ => Vec::new(),
    };
    entries.into_iter().filter(|e| !e.is_blank()).collect()
}

/// An object of objects whose keys are ids (`{"a": {..}, "b": {..}}`). A key the entry
/// itself reads (`{"company": {..}, "role": {..}}`) makes it a single entry instead.
fn is_keyed_collection<E: SectionEntry>(map: &Map<String, Value>) -> bool {
    !map.is_empty()
        && map.values().all(Value::is_object)
        && !map.keys().any(|key| reads_field::<E>(key))
}

fn reads_field<E: SectionEntry>(key: &str) -> bool {
    let mut sample = Map::new();
    sample.insert(key.to_string(), Value::from("x"));
    !E::from_object(&Value::Object(sample)).is_blank()
}

fn entry_from_element<E: SectionEntry>(item: &Value) -> Option<E> {
    match item {
        Value::Object(_) => Some(E::from_object(item)),
        other => text_of(other).map(E::from_text),
    }
}

fn all_empty(fields: &[&str]) -> bool {
    fields.iter().all(|f| f.is_empty())
}

const WORK_TITLE: &[Source] = &[
    Path("job_title"),
    Path("title"),
    Path("position"),
    Path("role"),
    Path("designation"),
];
const WORK_COMPANY: &[Source] = &[
    Path("company_name"),
    Path("company"),
    Path("employer"),
    Path("organization"),
    Path("organisation"),
];
const ENTRY_LOCATION: &[Source] = &[
    Path("location"),
    Join(&["city", "country"], ", "),
];
const START: &[Source] = &[
    Path("start_date"),
    Path("date_start"),
    Path("started_at"),
    Path("start"),
    Path("from"),
    Path("start_year"),
];
const END: &[Source] = &[
    Path("end_date"),
    Path("date_end"),
    Path("ended_at"),
    Path("end"),
    Path("to"),
    Path("end_year"),
    Path("graduation_date"),
    Path("graduation_year"),
];
const DESCRIPTION: &[Source] = &[Path("description"), Path("summary"), Path("details")];
const RESPONSIBILITIES: &[Source] = &[
    Path("responsibilities"),
    Path("duties"),
    Path("tasks"),
];
const ACHIEVEMENTS: &[Source] = &[
    Path("achievements"),
    Path("accomplishments"),
    Path("highlights"),
];

impl SectionEntry for WorkEntry {
    const SECTION: &'static [&'static str] = &[
        "work_experience",
        "experience",
        "experiences",
        "employment_history",
        "work_history",
        "employment",
        "analysis.work_experience",
        "analysis.experience",
        "parsed_data.work_experience",
        "parsed_data.experience",
    ];

    fn from_object(item: &Value) -> Self {
        let start = resolve_text(item, START);
        let end = resolve_text(item, END);
        let is_current = resolve_flag(item, CURRENT_FLAGS);
        WorkEntry {
            title: text_or_default(item, WORK_TITLE),
            company: text_or_default(item, WORK_COMPANY),
            location: text_or_default(item, ENTRY_LOCATION),
            period: ranged_period(start.as_deref(), end.as_deref(), is_current),
            start_date: start.unwrap_or_default(),
            end_date: end.unwrap_or_default(),
            description: resolve_list(item, DESCRIPTION),
            responsibilities: resolve_list(item, RESPONSIBILITIES),
            achievements: resolve_list(item, ACHIEVEMENTS),
        }
    }

    fn from_text(text: String) -> Self {
        WorkEntry {
            title: text,
            ..Default::default()
        }
    }

    /// A period alone (`is_current` and nothing else) is not content.
    fn is_blank(&self) -> bool {
        all_empty(&[&self.title, &self.company, &self.location])
            && self.description.is_empty()
            && self.responsibilities.is_empty()
            && self.achievements.is_empty()
    }
}

const INSTITUTION: &[Source] = &[
    Path("institution"),
    Path("institution_name"),
    Path("school"),
    Path("school_name"),
    Path("university"),
    Path("college"),
];
const DEGREE: &[Source] = &[
    Path("degree"),
    Path("degree_name"),
    Path("qualification"),
    Path("title"),
];
const FIELD_OF_STUDY: &[Source] = &[
    Path("field_of_study"),
    Path("field"),
    Path("major"),
    Path("specialization"),
    Path("course"),
];
const GRADE: &[Source] = &[Path("grade"), Path("gpa"), Path("result")];
const EDUCATION_DESCRIPTION: &[Source] = &[
    Path("description"),
    Path("details"),
    Path("achievements"),
];

impl SectionEntry for EducationEntry {
    const SECTION: &'static [&'static str] = &[
        "education",
        "educations",
        "education_history",
        "academic_history",
        "analysis.education",
        "parsed_data.education",
    ];

    fn from_object(item: &Value) -> Self {
        let start = resolve_text(item, START);
        let end = resolve_text(item, END);
        let is_current = resolve_flag(item, CURRENT_FLAGS);
        EducationEntry {
            institution: text_or_default(item, INSTITUTION),
            degree: text_or_default(item, DEGREE),
            field_of_study: text_or_default(item, FIELD_OF_STUDY),
            grade: text_or_default(item, GRADE),
            period: ranged_period(start.as_deref(), end.as_deref(), is_current),
            start_date: start.unwrap_or_default(),
            end_date: end.unwrap_or_default(),
            description: resolve_list(item, EDUCATION_DESCRIPTION),
        }
    }

    fn from_text(text: String) -> Self {
        EducationEntry {
            degree: text,
            ..Default::default()
        }
    }

    fn is_blank(&self) -> bool {
        all_empty(&[
            &self.institution,
            &self.degree,
            &self.field_of_study,
            &self.grade,
        ]) && self.description.is_empty()
    }
}

const CERT_NAME: &[Source] = &[
    Path("name"),
    Path("certification_name"),
    Path("certificate_name"),
    Path("certification"),
    Path("title"),
];
const ISSUER: &[Source] = &[
    Path("issuer"),
    Path("issuing_organization"),
    Path("organization"),
    Path("authority"),
    Path("provider"),
];
const ISSUED: &[Source] = &[
    Path("issue_date"),
    Path("date_issued"),
    Path("issued"),
    Path("date"),
    Path("obtained"),
    Path("year"),
];
const EXPIRES: &[Source] = &[
    Path("expiry_date"),
    Path("expiration_date"),
    Path("date_expires"),
    Path("expires"),
];
const CREDENTIAL_ID: &[Source] = &[Path("credential_id"), Path("license_number")];
const CREDENTIAL_URL: &[Source] = &[Path("credential_url"), Path("url"), Path("link")];

impl SectionEntry for CertificationEntry {
    const SECTION: &'static [&'static str] = &[
        "certifications",
        "certificates",
        "licenses",
        "certifications_and_licenses",
        "analysis.certifications",
        "parsed_data.certifications",
    ];

    fn from_object(item: &Value) -> Self {
        let issued = resolve_text(item, ISSUED);
        let expires = resolve_text(item, EXPIRES);
        CertificationEntry {
            name: text_or_default(item, CERT_NAME),
            issuer: text_or_default(item, ISSUER),
            period: point_period(issued.as_deref(), expires.as_deref()),
            start_date: issued.unwrap_or_default(),
            end_date: expires.unwrap_or_default(),
            credential_id: text_or_default(item, CREDENTIAL_ID),
            url: resolve_text(item, CREDENTIAL_URL)
                .map(|u| with_scheme(&u))
                .unwrap_or_default(),
        }
    }

    fn from_text(text: String) -> Self {
        CertificationEntry {
            name: text,
            ..Default::default()
        }
    }

    fn is_blank(&self) -> bool {
        all_empty(&[
            &self.name,
            &self.issuer,
            &self.period,
            &self.credential_id,
            &self.url,
        ])
    }
}

const LANGUAGE_NAME: &[Source] = &[
    Path("language"),
    Path("name"),
    Path("language_name"),
    Path("title"),
];
const LANGUAGE_LEVEL: &[Source] = &[
    Path("proficiency"),
    Path("level"),
    Path("fluency"),
];

impl SectionEntry for LanguageEntry {
    const SECTION: &'static [&'static str] = &[
        "languages",
        "spoken_languages",
        "analysis.languages",
        "parsed_data.languages",
    ];

    fn from_object(item: &Value) -> Self {
        LanguageEntry {
            name: text_or_default(item, LANGUAGE_NAME),
            proficiency: text_or_default(item, LANGUAGE_LEVEL),
        }
    }

    fn from_text(text: String) -> Self {
        LanguageEntry {
            name: text,
            ..Default::default()
        }
    }

    fn is_blank(&self) -> bool {
        self.name.is_empty()
    }

    fn split_text(raw: &Value) -> Vec<String> {
        normalize_terms(raw)
    }
}

const INTEREST_NAME: &[Source] = &[
    Path("name"),
    Path("interest"),
    Path("hobby"),
    Path("title"),
];

impl SectionEntry for InterestEntry {
    const SECTION: &'static [&'static str] = &[
        "interests",
        "hobbies",
        "hobbies_and_interests",
        "analysis.interests",
        "parsed_data.interests",
    ];

    fn from_object(item: &Value) -> Self {
        InterestEntry {
            name: text_or_default(item, INTEREST_NAME),
        }
    }

    fn from_text(text: String) -> Self {
        InterestEntry { name: text }
    }

    fn is_blank(&self) -> bool {
        self.name.is_empty()
    }

    fn split_text(raw: &Value) -> Vec<String> {
        normalize_terms(raw)
    }
}

const REFERENCE_NAME: &[Source] = &[
    Path("name"),
    Path("full_name"),
    Path("reference_name"),
    Path("referee_name"),
];
const REFERENCE_POSITION: &[Source] = &[
    Path("position"),
    Path("job_title"),
    Path("title"),
    Path("designation"),
];
const REFERENCE_COMPANY: &[Source] = &[
    Path("company"),
    Path("company_name"),
    Path("organization"),
];
const REFERENCE_EMAIL: &[Source] = &[Path("email"), Path("contact_email")];
const REFERENCE_PHONE: &[Source] = &[
    Path("phone"),
    Path("phone_number"),
    Path("contact_phone"),
];

impl SectionEntry for ReferenceEntry {
    const SECTION: &'static [&'static str] = &[
        "references",
        "referees",
        "parsed_data.references",
    ];

    fn from_object(item: &Value) -> Self {
        ReferenceEntry {
            name: text_or_default(item, REFERENCE_NAME),
            position: text_or_default(item, REFERENCE_POSITION),
            company: text_or_default(item, REFERENCE_COMPANY),
            relationship: text_or_default(item, &[Path("relationship")]),
            email: text_or_default(item, REFERENCE_EMAIL),
            phone: text_or_default(item, REFERENCE_PHONE),
        }
    }

    fn from_text(text: String) -> Self {
        ReferenceEntry {
            name: text,
            ..Default::default()
        }
    }

    fn is_blank(&self) -> bool {
        all_empty(&[
            &self.name,
            &self.position,
            &self.company,
            &self.relationship,
            &self.email,
            &self.phone,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cv::dates::PRESENT;
    use serde_json::json;

    #[test]
    fn test_lookup_nested_and_null() {
        let raw = json!({"profile": {"name": "Ada", "photo": null}});
        assert_eq!(lookup(&raw, "profile.name"), Some(&json!("Ada")));
        assert_eq!(lookup(&raw, "profile.photo"), None);
        assert_eq!(lookup(&raw, "profile.name.first"), None);
        assert_eq!(lookup(&json!([1, 2]), "profile"), None);
    }

    #[test]
    fn test_name_priority_prefers_profile_name() {
        let raw = json!({
            "profile": {"name": "Grace Hopper"},
            "first_name": "Ada",
            "last_name": "Lovelace"
        });
        assert_eq!(map(&raw).profile.name, "Grace Hopper");
    }

    #[test]
    fn test_name_falls_back_to_first_and_last() {
        let raw = json!({"profile": {"name": "  "}, "first_name": "Ada", "last_name": "Lovelace"});
        assert_eq!(map(&raw).profile.name, "Ada Lovelace");
    }

    #[test]
    fn test_name_join_tolerates_missing_part() {
        assert_eq!(map(&json!({"first_name": "Ada"})).profile.name, "Ada");
    }

    #[test]
    fn test_name_defaults_to_empty() {
        assert_eq!(map(&json!({})).profile.name, "");
    }

    #[test]
    fn test_headline_dialects() {
        assert_eq!(map(&json!({"profession": "Nurse"})).profile.headline, "Nurse");
        assert_eq!(map(&json!({"job_title": "Chef"})).profile.headline, "Chef");
        assert_eq!(
            map(&json!({"analysis": {"current_role": "Analyst"}})).profile.headline,
            "Analyst"
        );
    }

    #[test]
    fn test_contacts_order_and_urls() {
        let raw = json!({
            "email": "ada@x.com",
            "location": "London",
            "phone": "+44 (0) 20 7946 0000"
        });
        let contacts = map_contacts(&raw);
        let kinds: Vec<_> = contacts.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![ContactKind::Phone, ContactKind::Email, ContactKind::Location]
        );
        assert_eq!(contacts[0].url, "tel:+4402079460000");
        assert_eq!(contacts[1].url, "mailto:ada@x.com");
        assert_eq!(contacts[2].url, "");
    }

    #[test]
    fn test_numeric_phone_is_text() {
        let contacts = map_contacts(&json!({"phone": 5551234}));
        assert_eq!(contacts[0].value, "5551234");
        assert_eq!(contacts[0].url, "tel:5551234");
    }

    #[test]
    fn test_email_without_at_has_no_link() {
        let contacts = map_contacts(&json!({"email": "not an email"}));
        assert_eq!(contacts[0].url, "");
    }

    #[test]
    fn test_location_object_is_joined() {
        let raw = json!({"location": {"city": "Lagos", "country": "Nigeria"}});
        assert_eq!(map_contacts(&raw)[0].value, "Lagos, Nigeria");
    }

    #[test]
    fn test_social_links_from_list_and_flat_keys() {
        let raw = json!({
            "social_links": [
                {"platform": "GitHub", "url": "https://github.com/ada"},
                "linkedin.com/in/ada-l"
            ],
            "github": "https://github.com/ada",
            "twitter": "@ada"
        });
        let links = map_social_links(&raw);
        assert_eq!(links.len(), 3);
        assert_eq!(links[0].handle, "ada");
        assert_eq!(links[1].platform, "LinkedIn");
        assert_eq!(links[1].url, "https://linkedin.com/in/ada-l");
        assert_eq!(links[1].handle, "ada-l");
        assert_eq!(links[2].url, "https://twitter.com/ada");
        assert_eq!(links[2].handle, "ada");
    }

    #[test]
    fn test_website_handle_falls_back_to_host() {
        let links = map_social_links(&json!({"website": "https://www.ada.dev"}));
        assert_eq!(links[0].platform, "Website");
        assert_eq!(links[0].handle, "ada.dev");
    }

    #[test]
    fn test_social_link_without_url_or_known_platform_dropped() {
        let raw = json!({"socials": [{"platform": "Discord", "handle": "ada#1"}, 42, null]});
        assert!(map_social_links(&raw).is_empty());
    }

    #[test]
    fn test_work_section_maps_dialect_fields() {
        let raw = json!({
            "experience": [{
                "job_title": "Engineer",
                "company_name": "Acme",
                "start_date": "2020-01-01",
                "end_date": null,
                "achievements": "- Cut latency 40%\n- Hired 3"
            }]
        });
        let work: Vec<WorkEntry> = map_section(&raw);
        assert_eq!(work.len(), 1);
        assert_eq!(work[0].title, "Engineer");
        assert_eq!(work[0].company, "Acme");
        assert_eq!(work[0].period, format!("Jan 2020 - {PRESENT}"));
        assert_eq!(work[0].start_date, "2020-01-01");
        assert_eq!(work[0].end_date, "");
        assert_eq!(work[0].achievements, vec!["Cut latency 40%", "Hired 3"]);
    }

    #[test]
    fn test_first_non_empty_section_source_wins() {
        let raw = json!({
            "work_experience": [],
            "experience": [{"title": "Designer"}]
        });
        let work: Vec<WorkEntry> = map_section(&raw);
        assert_eq!(work[0].title, "Designer");
    }

    #[test]
    fn test_single_object_section() {
        let raw = json!({"education": {"school": "MIT", "degree": "BSc"}});
        let education: Vec<EducationEntry> = map_section(&raw);
        assert_eq!(education.len(), 1);
        assert_eq!(education[0].institution, "MIT");
    }

    #[test]
    fn test_keyed_collection_section() {
        let raw = json!({"education": {"a": {"school": "MIT"}, "b": {"school": "ETH"}}});
        let education: Vec<EducationEntry> = map_section(&raw);
        let schools: Vec<_> = education.iter().map(|e| e.institution.as_str()).collect();
        assert_eq!(schools, vec!["MIT", "ETH"]);
    }

    #[test]
    fn test_blank_and_odd_items_are_dropped() {
        let raw = json!({"experience": [{}, null, true, {"unknown": 1}, "Barista"]});
        let work: Vec<WorkEntry> = map_section(&raw);
        assert_eq!(work.len(), 1);
        assert_eq!(work[0].title, "Barista");
    }

    #[test]
    fn test_language_string_section_is_split_into_terms() {
        let raw = json!({"languages": "English, French"});
        let languages: Vec<LanguageEntry> = map_section(&raw);
        let names: Vec<_> = languages.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["English", "French"]);
    }

    #[test]
    fn test_certification_period_is_point_in_time() {
        let raw = json!({"certifications": [{
            "name": "CKA",
            "issuer": "CNCF",
            "issue_date": "2022-05-10",
            "credential_url": "cncf.io/cert/1"
        }]});
        let certs: Vec<CertificationEntry> = map_section(&raw);
        assert_eq!(certs[0].period, "May 2022");
        assert_eq!(certs[0].url, "https://cncf.io/cert/1");
    }

    #[test]
    fn test_current_flag_sets_present() {
        let raw = json!({"experience": [{
            "title": "Lead",
            "start_date": "2019-02",
            "end_date": "2021-01",
            "is_current": "yes"
        }]});
        let work: Vec<WorkEntry> = map_section(&raw);
        assert_eq!(work[0].period, "Feb 2019 - Present");
    }

    #[test]
    fn test_summary_from_list_is_joined() {
        let raw = json!({"summary": ["Builder of things.", "Writer of docs."]});
        assert_eq!(
            map(&raw).professional_summary,
            "Builder of things. Writer of docs."
        );
    }

    #[test]
    fn test_flat_platform_value_is_handle_unless_link() {
        let raw = json!({
            "github": "ada.lovelace",
            "linkedin": "Ada Lovelace",
            "gitlab": "gitlab.com/ada"
        });
        let links = map_social_links(&raw);
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].platform, "GitHub");
        assert_eq!(links[0].url, "https://github.com/ada.lovelace");
        assert_eq!(links[0].handle, "ada.lovelace");
        assert_eq!(links[1].url, "https://gitlab.com/ada");
        assert!(links.iter().all(|l| !l.url.contains(' ')));
    }

    #[test]
    fn test_object_keyed_by_entry_fields_is_one_entry() {
        let raw = json!({"experience": {"company": {"name": "Acme"}, "role": {"title": "Dev"}}});
        let work: Vec<WorkEntry> = map_section(&raw);
        assert!(work.iter().all(|w| w.title != "Dev"));
    }

    #[test]
    fn test_entry_with_only_current_flag_is_dropped() {
        let raw = json!({
            "experience": [{"is_current": true}, {"title": "Lead", "is_current": true}],
            "education": [{"start_date": "2015-09"}]
        });
        let work: Vec<WorkEntry> = map_section(&raw);
        assert_eq!(work.len(), 1);
        assert_eq!(work[0].title, "Lead");
        let education: Vec<EducationEntry> = map_section(&raw);
        assert!(education.is_empty());
    }

    #[test]
    fn test_summary_markup_is_normalized() {
        let raw = json!({"summary": "**Rear admiral**\\nCompiler pioneer"});
        assert_eq!(
            map(&raw).professional_summary,
            "Rear admiral Compiler pioneer"
        );
    }
}
