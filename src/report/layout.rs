//! Pure page layout for the candidate report.
//!
//! Builds positioned text lines for each candidate page without touching
//! the PDF writer, so pagination, wrapping and truncation stay testable.

use crate::core::text::{sanitize, split_speaker_turns};
use crate::models::MatchedCandidate;
use crate::report::metrics::text_width;

/// A4 page size in points.
pub const PAGE_WIDTH: f32 = 595.28;
pub const PAGE_HEIGHT: f32 = 841.89;

/// Uniform page margin in points.
pub const MARGIN: f32 = 50.0;

/// Usable width for wrapped body text.
pub const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

/// Wrapped body lines are dropped once the cursor falls below this.
const BOTTOM_FLOOR: f32 = MARGIN + 50.0;

/// A single positioned text line. `y` is the PDF baseline measured from
/// the page bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub bold: bool,
}

/// One page of the report; exactly one per candidate.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub lines: Vec<TextLine>,
}

/// Greedy word wrap against measured Helvetica widths.
///
/// Words accumulate on the current line while it fits `max_width`; the word
/// that would overflow starts the next line. A single word wider than the
/// content width stays alone on its line, unsplit.
pub fn wrap_text(text: &str, max_width: f32, size: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split(' ') {
        if word.is_empty() {
            continue;
        }
        let tentative = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };

        if text_width(&tentative, size) > max_width && !current.is_empty() {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        } else {
            current = tentative;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Build one page layout per candidate, in ranked order.
pub fn paginate(candidates: &[MatchedCandidate]) -> Vec<PageLayout> {
    candidates
        .iter()
        .enumerate()
        .map(|(index, candidate)| candidate_page(index, candidate))
        .collect()
}

fn candidate_page(index: usize, candidate: &MatchedCandidate) -> PageLayout {
    let mut page = PageBuilder::new();

    page.heading(
        format!("Candidate {}: {}", index + 1, candidate.candidate_name),
        16.0,
        30.0,
    );
    page.line(format!("Match Count: {}", candidate.match_count), 12.0, 20.0);
    page.line(
        format!("Matched Skills: {}", candidate.matched_skills.join(", ")),
        10.0,
        30.0,
    );

    page.heading("Skill Summary:".to_string(), 12.0, 20.0);
    page.body(&sanitize(&candidate.summary), 10.0, 15.0);
    page.gap(20.0);

    if let Some(feedback) = candidate.feedback.as_ref().filter(|f| !f.is_empty()) {
        page.heading("Feedback Assessment:".to_string(), 12.0, 20.0);
        for (dimension, assessment) in feedback.rendered_entries() {
            page.body(&sanitize(&format!("{}: {}", dimension, assessment)), 9.0, 12.0);
        }
        page.gap(20.0);
    }

    page.heading("Transcript:".to_string(), 12.0, 20.0);
    let transcript = if candidate.transcript.is_empty() {
        "Not available".to_string()
    } else {
        candidate.transcript.clone()
    };
    for turn in split_speaker_turns(&transcript) {
        page.body(&sanitize(&turn), 9.0, 12.0);
    }

    page.finish()
}

/// Cursor-driven builder for a single page.
struct PageBuilder {
    lines: Vec<TextLine>,
    y: f32,
}

impl PageBuilder {
    fn new() -> Self {
        Self {
            lines: Vec::new(),
            y: PAGE_HEIGHT - MARGIN,
        }
    }

    /// Bold heading or label; headings are always placed.
    fn heading(&mut self, text: String, size: f32, advance: f32) {
        self.push(text, size, true, advance);
    }

    /// Single regular line, always placed.
    fn line(&mut self, text: String, size: f32, advance: f32) {
        self.push(text, size, false, advance);
    }

    /// Word-wrapped body block; lines below the bottom floor are silently
    /// dropped, never carried to another page.
    fn body(&mut self, text: &str, size: f32, leading: f32) {
        for line in wrap_text(text, CONTENT_WIDTH, size) {
            if self.y < BOTTOM_FLOOR {
                break;
            }
            self.push(line, size, false, leading);
        }
    }

    fn gap(&mut self, advance: f32) {
        self.y -= advance;
    }

    fn push(&mut self, text: String, size: f32, bold: bool, advance: f32) {
        self.lines.push(TextLine {
            text,
            x: MARGIN,
            y: self.y,
            size,
            bold,
        });
        self.y -= advance;
    }

    fn finish(self) -> PageLayout {
        PageLayout { lines: self.lines }
    }
}
