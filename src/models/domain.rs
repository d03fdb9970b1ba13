use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder shown for candidates without a stored name.
pub const UNNAMED_CANDIDATE: &str = "Unnamed";

/// Feedback dimension that holds the raw assessment text; skipped when
/// rendering because the structured dimensions already cover it.
pub const RAW_FEEDBACK_KEY: &str = "raw";

/// Candidate row as stored in the interviews table.
///
/// Every column is nullable in practice, so all fields are optional and the
/// matcher handles the gaps. Read-only from this service's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// Row id; uuid or serial depending on the schema, never used beyond
    /// the select list.
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub candidate_name: Option<String>,
    /// Raw comma-separated skill string, source of truth for matching.
    #[serde(default)]
    pub skills: Option<String>,
    /// Loosely-typed feedback record; validated into a [`FeedbackRecord`]
    /// by the matcher.
    #[serde(default)]
    pub feedback: Option<Value>,
    #[serde(default)]
    pub transcript: Option<String>,
}

/// Structured multi-dimensional feedback attached to a candidate.
///
/// An ordered mapping from dimension name to free-text assessment. Values
/// are usually strings but the store does not enforce that, so non-string
/// values are coerced at render time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedbackRecord(pub serde_json::Map<String, Value>);

impl FeedbackRecord {
    /// Validate a raw JSON value from the store. Only JSON objects qualify;
    /// anything else is treated as "no feedback".
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries formatted for display: keys upper-cased with underscores
    /// replaced by spaces, values coerced to strings, the reserved raw-text
    /// dimension skipped. Preserves the stored order.
    pub fn rendered_entries(&self) -> impl Iterator<Item = (String, String)> + '_ {
        self.0
            .iter()
            .filter(|(key, _)| key.as_str() != RAW_FEEDBACK_KEY)
            .map(|(key, value)| {
                let name = key.replace('_', " ").to_uppercase();
                let text = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (name, text)
            })
    }
}

/// Match result for a single candidate, recomputed per request and never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedCandidate {
    pub candidate_name: String,
    pub match_count: usize,
    /// Distinct required skills this candidate satisfies, lexicographically
    /// ascending.
    pub matched_skills: Vec<String>,
    /// Short prose description of the match, rendered in the report.
    pub summary: String,
    #[serde(default)]
    pub feedback: Option<FeedbackRecord>,
    /// Full normalized skill list of the candidate.
    pub all_skills: Vec<String>,
    #[serde(default)]
    pub transcript: String,
}
