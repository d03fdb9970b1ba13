// Core algorithm exports
pub mod matcher;
pub mod text;

pub use matcher::{MatchOutcome, Matcher};
pub use text::{normalize_skills, sanitize, split_speaker_turns};
