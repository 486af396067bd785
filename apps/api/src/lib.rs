//! Resume intelligence: resume analysis, ATS compatibility scoring and a role
//! knowledge base, served over HTTP by the `resume-intel` binary.
//!
//! The analysis core (`analysis`, `ats`, `roles`) is synchronous and total:
//! every well-formed resume, however sparse, produces a result.

pub mod analysis;
pub mod ats;
pub mod clock;
pub mod config;
pub mod errors;
pub mod models;
pub mod roles;
pub mod routes;
pub mod state;
pub mod text;

pub use analysis::{analysis_summary, analyze_resume, analyze_resume_with_clock, AnalysisResult};
pub use ats::{compute_ats_score, AtsScoreResult};
pub use models::ResumeData;
pub use roles::{get_role_keywords, match_role_from_title, supported_roles};
