// Unit tests for Skillmatch

use skillmatch::core::{normalize_skills, sanitize, split_speaker_turns, Matcher};
use skillmatch::models::Candidate;
use skillmatch::report::wrap_text;
use std::collections::BTreeSet;

fn candidate(name: &str, skills: &str) -> Candidate {
    Candidate {
        id: None,
        candidate_name: Some(name.to_string()),
        skills: Some(skills.to_string()),
        feedback: None,
        transcript: None,
    }
}

fn required(skills: &[&str]) -> BTreeSet<String> {
    skills.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_matched_skills_subset_and_count_invariant() {
    let matcher = Matcher::new();
    let req = required(&["react", "node", "sql", "kubernetes"]);

    let pool = vec![
        candidate("a", "React.js, PostgreSQL, Docker"),
        candidate("b", "node, sql"),
        candidate("c", "haskell"),
        candidate("d", ""),
    ];

    let outcome = matcher.match_candidates(&req, pool);

    for m in &outcome.matches {
        assert_eq!(m.match_count, m.matched_skills.len());
        for skill in &m.matched_skills {
            assert!(req.contains(skill), "{} not in required set", skill);
        }
        assert!(m.match_count >= 1);
    }
}

#[test]
fn test_ordering_non_increasing_and_stable() {
    let matcher = Matcher::new();
    let req = required(&["a", "b", "c"]);

    let pool = vec![
        candidate("one", "a"),
        candidate("two", "a, b"),
        candidate("three", "b"),
        candidate("four", "a, b, c"),
        candidate("five", "c"),
    ];

    let outcome = matcher.match_candidates(&req, pool);

    for window in outcome.matches.windows(2) {
        assert!(window[0].match_count >= window[1].match_count);
    }

    // Ties keep pool order: one, three, five all matched exactly one skill.
    let singles: Vec<&str> = outcome
        .matches
        .iter()
        .filter(|m| m.match_count == 1)
        .map(|m| m.candidate_name.as_str())
        .collect();
    assert_eq!(singles, vec!["one", "three", "five"]);
}

#[test]
fn test_zero_match_candidates_excluded() {
    let matcher = Matcher::new();
    let outcome = matcher.match_candidates(
        &required(&["rust"]),
        vec![candidate("none", "cobol, fortran"), candidate("blank", "")],
    );
    assert!(outcome.matches.is_empty());
    assert_eq!(outcome.total_candidates, 2);
}

#[test]
fn test_matching_is_case_insensitive_and_trimmed() {
    let matcher = Matcher::new();
    // "React" required, "react " stored: both normalize to "react".
    let req: BTreeSet<String> = normalize_skills("React").into_iter().collect();
    let outcome = matcher.match_candidates(&req, vec![candidate("a", "react ")]);
    assert_eq!(outcome.matches.len(), 1);
    assert_eq!(outcome.matches[0].matched_skills, vec!["react"]);
}

#[test]
fn test_sanitize_idempotent_over_mixed_input() {
    let input = "\u{26A0}\u{FE0F} Check\n\tthis \u{2705} r\u{e9}sum\u{e9}   now \u{274C}";
    let once = sanitize(input);
    assert_eq!(once, "[WARNING] Check this [SUITABLE] rsum now [NOT SUITABLE]");
    assert_eq!(sanitize(&once), once);
}

#[test]
fn test_wrap_round_trip_reproduces_sanitized_text() {
    let text = sanitize(
        "A long assessment covering communication, leadership, analytical thinking \
         and a number of other dimensions that will certainly need wrapping.",
    );
    let lines = wrap_text(&text, 200.0, 10.0);
    assert!(lines.len() > 1);
    assert_eq!(lines.join(" "), text);
}

#[test]
fn test_transcript_split_then_sanitize() {
    let transcript = "Interviewer: First question?\nCandidate: An answer.";
    let turns = split_speaker_turns(transcript);
    assert_eq!(turns.len(), 2);
    assert_eq!(sanitize(&turns[0]), "Interviewer: First question?");
    assert_eq!(sanitize(&turns[1]), "Candidate: An answer.");
}
