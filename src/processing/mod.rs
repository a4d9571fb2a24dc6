//! Résumé parsing and keyword matching

pub mod contact;
pub mod dates;
pub mod document;
pub mod education;
pub mod experience;
pub mod keyword_scorer;
pub mod lists;
pub mod name;
pub mod profile;
pub mod sections;
pub mod skills;
pub mod text_processor;
pub mod vocabulary;

pub use keyword_scorer::{keyword_score, KeywordScorer, MatchResult};
pub use profile::{parse_profile, Profile, ResumeParser};
pub use text_processor::normalize;
