//! Data contracts consumed and produced by the scoring engine
//!
//! Every collection defaults to empty and every optional scalar to `None`, so a
//! sparse profile from the extraction step always deserializes.

pub mod candidate;
pub mod job;

pub use candidate::{
    Availability, CandidateProfile, Certification, Education, Experience, PersonalInfo, SkillList,
    Skills,
};
pub use job::JobRequirements;
