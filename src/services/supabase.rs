use crate::models::Candidate;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when interacting with Supabase
#[derive(Debug, Error)]
pub enum SupabaseError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Table names in the Supabase project
#[derive(Debug, Clone)]
pub struct SupabaseTables {
    pub interviews: String,
    pub incoming_emails: String,
}

impl Default for SupabaseTables {
    fn default() -> Self {
        Self {
            interviews: "interviews".to_string(),
            incoming_emails: "incoming_emails".to_string(),
        }
    }
}

/// Supabase REST client
///
/// Handles all communication with the Supabase backend:
/// - Paginated reads of the candidate pool
/// - Inserting collected email addresses
pub struct SupabaseClient {
    base_url: String,
    service_key: String,
    client: Client,
    tables: SupabaseTables,
}

/// Columns fetched for matching; everything else in the row is ignored.
const CANDIDATE_COLUMNS: &str = "id,candidate_name,skills,feedback,transcript";

impl SupabaseClient {
    pub fn new(base_url: String, service_key: String, tables: SupabaseTables) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            service_key,
            client,
            tables,
        }
    }

    fn rest_url(&self, table: &str) -> String {
        format!(
            "{}/rest/v1/{}",
            self.base_url.trim_end_matches('/'),
            table
        )
    }

    /// Fetch one page of candidate rows using offset pagination.
    ///
    /// Rows that fail to parse are skipped rather than failing the page.
    pub async fn fetch_candidates_page(
        &self,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Candidate>, SupabaseError> {
        let url = format!(
            "{}?select={}&offset={}&limit={}",
            self.rest_url(&self.tables.interviews),
            urlencoding::encode(CANDIDATE_COLUMNS),
            offset,
            limit
        );

        tracing::debug!("Fetching candidate page from: {}", url);

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SupabaseError::ApiError(format!(
                "Failed to fetch candidates: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let rows = json
            .as_array()
            .ok_or_else(|| SupabaseError::InvalidResponse("Expected a JSON array of rows".into()))?;

        let candidates: Vec<Candidate> = rows
            .iter()
            .filter_map(|row| serde_json::from_value(row.clone()).ok())
            .collect();

        tracing::debug!(
            "Fetched {} candidates (offset: {}, limit: {})",
            candidates.len(),
            offset,
            limit
        );

        Ok(candidates)
    }

    /// Fetch the full candidate pool, one page at a time.
    ///
    /// Accumulates until a short or empty page signals end-of-data. A page
    /// fetch failure terminates the loop early with whatever was collected;
    /// the error is logged, not propagated, so a partially available pool
    /// still yields matches.
    pub async fn fetch_all_candidates(&self, page_size: usize) -> Vec<Candidate> {
        if page_size == 0 {
            tracing::warn!("candidate page size is 0, skipping fetch");
            return Vec::new();
        }

        let mut all = Vec::new();
        let mut offset = 0;

        loop {
            match self.fetch_candidates_page(offset, page_size).await {
                Ok(page) => {
                    let fetched = page.len();
                    all.extend(page);
                    if fetched < page_size {
                        break;
                    }
                    offset += page_size;
                }
                Err(e) => {
                    tracing::warn!(
                        "Candidate page fetch failed at offset {}, returning {} rows collected so far: {}",
                        offset,
                        all.len(),
                        e
                    );
                    break;
                }
            }
        }

        all
    }

    /// Persist a collected email address with a server-side timestamp.
    pub async fn insert_email(
        &self,
        email: &str,
        received_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<(), SupabaseError> {
        let url = self.rest_url(&self.tables.incoming_emails);

        let payload = json!([{
            "email": email,
            "received_at": received_at.to_rfc3339(),
        }]);

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.service_key)
            .header("Prefer", "return=minimal")
            .bearer_auth(&self.service_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SupabaseError::ApiError(format!(
                "Failed to insert email: {}",
                response.status()
            )));
        }

        tracing::debug!("Recorded incoming email");

        Ok(())
    }

    /// Probe store reachability for the health endpoint.
    pub async fn health_check(&self) -> Result<bool, SupabaseError> {
        let url = format!("{}/rest/v1/", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .send()
            .await?;

        Ok(response.status().is_success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supabase_client_creation() {
        let client = SupabaseClient::new(
            "https://project.supabase.test/".to_string(),
            "service_key".to_string(),
            SupabaseTables::default(),
        );

        assert_eq!(client.base_url, "https://project.supabase.test/");
        assert_eq!(client.tables.interviews, "interviews");
        assert_eq!(
            client.rest_url("interviews"),
            "https://project.supabase.test/rest/v1/interviews"
        );
    }
}
