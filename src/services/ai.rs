use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during skill extraction
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatCompletionChoice>,
}

const SYSTEM_PROMPT: &str = "You are a technical recruiter. Extract the concrete skills \
required by the given job description. Respond with a comma-separated list of short \
lowercase skill tokens and nothing else. Respond with an empty string if no skills are present.";

/// Skill extraction client backed by an OpenAI-compatible chat endpoint
pub struct SkillExtractor {
    client: Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl SkillExtractor {
    pub fn new(api_base: String, api_key: String, model: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_base,
            api_key,
            model,
        }
    }

    /// Extract normalized skill tokens from free job-description text.
    ///
    /// An empty list is a valid outcome ("no skills found") and distinct
    /// from the transport and API error cases.
    pub async fn extract_skills(&self, text: &str) -> Result<Vec<String>, ExtractError> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: text.to_string(),
                },
            ],
            temperature: 0.0,
        };

        let url = format!(
            "{}/chat/completions",
            self.api_base.trim_end_matches('/')
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ExtractError::ApiError(format!(
                "Skill extraction failed: {}",
                response.status()
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ExtractError::InvalidResponse(e.to_string()))?;

        let content = completion
            .choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .ok_or_else(|| ExtractError::InvalidResponse("No choices in completion".into()))?;

        Ok(parse_skill_list(content))
    }
}

/// Parse a model response into normalized, deduplicated skill tokens.
///
/// Tolerates newline-separated and bulleted lists in addition to the
/// requested comma-separated form.
pub fn parse_skill_list(content: &str) -> Vec<String> {
    let mut skills: Vec<String> = Vec::new();

    for token in content.split(|c| c == ',' || c == '\n') {
        let skill = token
            .trim()
            .trim_start_matches(['-', '*'])
            .trim()
            .to_lowercase();
        if !skill.is_empty() && !skills.contains(&skill) {
            skills.push(skill);
        }
    }

    skills
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_comma_separated() {
        assert_eq!(
            parse_skill_list("React, TypeScript, JavaScript"),
            vec!["react", "typescript", "javascript"]
        );
    }

    #[test]
    fn test_parse_bulleted_lines() {
        assert_eq!(
            parse_skill_list("- rust\n- actix-web\n* sql"),
            vec!["rust", "actix-web", "sql"]
        );
    }

    #[test]
    fn test_parse_deduplicates_and_drops_blanks() {
        assert_eq!(parse_skill_list("go,, Go ,\n,go"), vec!["go"]);
        assert!(parse_skill_list("").is_empty());
        assert!(parse_skill_list("  \n ,").is_empty());
    }
}
