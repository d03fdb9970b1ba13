// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Candidate, FeedbackRecord, MatchedCandidate, RAW_FEEDBACK_KEY, UNNAMED_CANDIDATE};
pub use requests::{CollectEmailRequest, MatchRequest};
pub use responses::{CollectEmailResponse, ErrorResponse, HealthResponse, MatchResponse};
