use crate::core::text::normalize_skills;
use crate::models::{Candidate, FeedbackRecord, MatchedCandidate, UNNAMED_CANDIDATE};
use std::collections::BTreeSet;

/// Result of the matching process
#[derive(Debug)]
pub struct MatchOutcome {
    pub matches: Vec<MatchedCandidate>,
    pub total_candidates: usize,
}

/// Candidate-skill matching orchestrator
///
/// # Pipeline stages
/// 1. Normalize each candidate's raw skill string into tokens
/// 2. Fuzzy containment match against the required skill set
/// 3. Drop zero-match candidates
/// 4. Stable rank by match count, descending
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher;

impl Matcher {
    pub fn new() -> Self {
        Self
    }

    /// Match a candidate pool against a set of required skills.
    ///
    /// Pure and total: malformed skill strings degrade to empty token
    /// lists and the candidate simply fails to match.
    ///
    /// # Arguments
    /// * `required` - normalized required skills; the `BTreeSet` keeps
    ///   matched output lexicographically sorted
    /// * `candidates` - full candidate pool from the store
    pub fn match_candidates(
        &self,
        required: &BTreeSet<String>,
        candidates: Vec<Candidate>,
    ) -> MatchOutcome {
        let total_candidates = candidates.len();

        let mut matches: Vec<MatchedCandidate> = candidates
            .into_iter()
            .filter_map(|candidate| self.match_one(required, candidate))
            .collect();

        // `sort_by` is stable, so candidates with equal match counts keep
        // their pool order.
        matches.sort_by(|a, b| b.match_count.cmp(&a.match_count));

        MatchOutcome {
            matches,
            total_candidates,
        }
    }

    fn match_one(
        &self,
        required: &BTreeSet<String>,
        candidate: Candidate,
    ) -> Option<MatchedCandidate> {
        let skills = normalize_skills(candidate.skills.as_deref().unwrap_or(""));

        // Fuzzy containment: either token may contain the other. Permissive
        // by design; short tokens over-match and that is accepted.
        let matched: Vec<String> = required
            .iter()
            .filter(|req| {
                skills
                    .iter()
                    .any(|skill| skill.contains(req.as_str()) || req.contains(skill.as_str()))
            })
            .cloned()
            .collect();

        if matched.is_empty() {
            return None;
        }

        let match_count = matched.len();
        let summary = compose_summary(match_count, required.len(), &skills);

        Some(MatchedCandidate {
            candidate_name: candidate
                .candidate_name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| UNNAMED_CANDIDATE.to_string()),
            match_count,
            matched_skills: matched,
            summary,
            feedback: candidate.feedback.and_then(FeedbackRecord::from_value),
            all_skills: skills,
            transcript: candidate.transcript.unwrap_or_default(),
        })
    }
}

/// Compose the skill summary shown in the report.
fn compose_summary(match_count: usize, required_total: usize, all_skills: &[String]) -> String {
    format!(
        "Matched {} of {} required skills. Candidate skill set: {}.",
        match_count,
        required_total,
        all_skills.join(", ")
    )
}
