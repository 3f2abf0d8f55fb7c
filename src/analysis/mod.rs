//! League performance analysis engine
//!
//! Data flows from the API records through [`participation::classify`]
//! (rating attacks with [`rating`]) into [`performance::PlayerPerformance`]
//! totals owned by an [`context::AnalysisContext`], and finally into the
//! [`report`] table.

pub mod context;
pub mod participation;
pub mod performance;
pub mod rating;
pub mod report;

#[cfg(test)]
mod tests;

pub use context::{AnalysisContext, SeasonAnalysis};
pub use participation::{classify, ParticipationState, RatedAttack, RoundParticipation};
pub use performance::PlayerPerformance;
pub use rating::{rate_attack, AttackRating, RatingRules};
pub use report::{build_headers, build_table, CellStyle, Report, RoundOutcome};
