// CV canonicalization engine.
// Raw records from any producer dialect go in, one render-safe `CanonicalCv` comes out.
// Everything below `handlers` is synchronous, pure and total.

pub mod canonicalizer;
pub mod contract;
pub mod dates;
pub mod field_map;
pub mod handlers;
pub mod list_normalizer;
pub mod models;

pub use canonicalizer::{assess_with, canonicalize};
pub use models::CanonicalCv;
