// Skill classification.
// Flat raw skill lists are partitioned into technical and soft skills scored 0-10.
// The preview path reuses `entry` and `proficiency` for its 0-100 bars.

pub mod classifier;
pub mod entry;
pub mod handlers;
pub mod proficiency;

pub use classifier::{KeywordCategorizer, SkillAssessment, SkillCategorizer};
