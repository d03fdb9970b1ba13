//! Text normalization shared by the matcher and the report renderer.

/// Speaker-turn markers recognized when splitting interview transcripts.
const SPEAKER_MARKERS: [&str; 4] = ["Assistant:", "User:", "Interviewer:", "Candidate:"];

/// Normalize a raw comma-separated skill string into skill tokens.
///
/// Tokens are trimmed, lowercased and de-blanked. An empty or absent raw
/// string simply yields an empty list.
pub fn normalize_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Sanitize a text block for rendering with a fixed ASCII-only font.
///
/// Status glyphs are rewritten to bracketed ASCII equivalents, all
/// whitespace runs (newlines, tabs, repeated spaces) collapse to single
/// spaces, remaining non-ASCII characters are stripped and the result is
/// trimmed. Idempotent.
pub fn sanitize(text: &str) -> String {
    let replaced = text
        .replace("\u{26A0}\u{FE0F}", "[WARNING]")
        .replace('\u{2705}', "[SUITABLE]")
        .replace('\u{274C}', "[NOT SUITABLE]");

    let ascii: String = replaced.chars().filter(char::is_ascii).collect();

    ascii.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split a transcript into speaker turns.
///
/// When at least one recognized marker produces an actual split, each turn
/// becomes its own line. Otherwise the transcript is returned as a single
/// block unchanged.
pub fn split_speaker_turns(transcript: &str) -> Vec<String> {
    let mut points: Vec<usize> = Vec::new();
    for marker in SPEAKER_MARKERS {
        let mut from = 0;
        while let Some(pos) = transcript[from..].find(marker) {
            points.push(from + pos);
            from += pos + marker.len();
        }
    }
    points.sort_unstable();
    points.dedup();

    if points.first() != Some(&0) {
        points.insert(0, 0);
    }

    let mut turns: Vec<String> = Vec::with_capacity(points.len());
    for (i, &start) in points.iter().enumerate() {
        let end = points.get(i + 1).copied().unwrap_or(transcript.len());
        let turn = transcript[start..end].trim();
        if !turn.is_empty() {
            turns.push(turn.to_string());
        }
    }

    if turns.len() <= 1 {
        vec![transcript.to_string()]
    } else {
        turns
    }
}
