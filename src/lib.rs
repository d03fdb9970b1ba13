//! Skillmatch - candidate matching and report service
//!
//! This library matches candidate records against the skills required by a
//! job description and renders the ranked results into a per-candidate PDF
//! report. Skill extraction, the candidate store and the return webhook are
//! external collaborators behind narrow clients.

pub mod config;
pub mod core;
pub mod models;
pub mod report;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{normalize_skills, sanitize, MatchOutcome, Matcher};
pub use crate::models::{Candidate, FeedbackRecord, MatchRequest, MatchResponse, MatchedCandidate};
pub use crate::report::{render_report, wrap_text};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work together
        let required: BTreeSet<String> = ["rust".to_string()].into_iter().collect();
        let outcome = Matcher::new().match_candidates(&required, vec![]);
        assert_eq!(outcome.total_candidates, 0);
        assert!(outcome.matches.is_empty());
    }
}
