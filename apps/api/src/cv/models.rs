use serde::{Deserialize, Serialize};

/// The canonical CV every template receives.
///
/// Always fully populated: strings default to `""`, sequences to `[]`. Serialized
/// camelCase because this is the shape the presentation layer reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalCv {
    pub profile: Profile,
    pub contacts: Vec<ContactEntry>,
    pub professional_summary: String,
    pub education: Vec<EducationEntry>,
    pub work_experience: Vec<WorkEntry>,
    pub certifications: Vec<CertificationEntry>,
    pub languages: Vec<LanguageEntry>,
    pub interests: Vec<InterestEntry>,
    pub references: Vec<ReferenceEntry>,
    pub skills: Vec<SkillLevel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub avatar_url: String,
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub handle: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    Phone,
    Email,
    Location,
}

impl ContactKind {
    pub fn label(self) -> &'static str {
        match self {
            ContactKind::Phone => "Phone",
            ContactKind::Email => "Email",
            ContactKind::Location => "Location",
        }
    }

    /// URL scheme for actionable contacts; `None` for kinds with no link.
    pub fn scheme(self) -> Option<&'static str> {
        match self {
            ContactKind::Phone => Some("tel:"),
            ContactKind::Email => Some("mailto:"),
            ContactKind::Location => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactEntry {
    pub kind: ContactKind,
    pub value: String,
    /// `tel:` / `mailto:` link, `""` when the kind has none.
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkEntry {
    pub title: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub start_date: String,
    pub end_date: String,
    pub description: Vec<String>,
    pub responsibilities: Vec<String>,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub grade: String,
    pub period: String,
    pub start_date: String,
    pub end_date: String,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationEntry {
    pub name: String,
    pub issuer: String,
    pub period: String,
    /// Raw issue date.
    pub start_date: String,
    /// Raw expiry date.
    pub end_date: String,
    pub credential_id: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageEntry {
    pub name: String,
    pub proficiency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterestEntry {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub name: String,
    pub position: String,
    pub company: String,
    pub relationship: String,
    pub email: String,
    pub phone: String,
}

/// Preview-path skill: a name and a bar length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillLevel {
    pub name: String,
    /// 0 – 100
    pub level_percent: u8,
}
