use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    models::{Destination, UserProfile},
};

/// Returned whenever the narrative API fails for any reason.
pub const FALLBACK_NARRATIVE: &str =
    "A personalized narrative is not available right now - the highlights below still apply.";

/// Longest slice of sample reviews quoted into the prompt.
const REVIEW_SNIPPET_CHARS: usize = 500;

/// Generates a personalized prose paragraph per destination via the Gemini
/// `generateContent` endpoint.
#[derive(Clone)]
pub struct NarrativeService {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

impl NarrativeService {
    pub fn new(api_key: String, api_url: String, model: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
            model,
        }
    }

    /// Produces the narrative paragraph for a recommendation detail view.
    ///
    /// Infallible by design: every failure mode logs and degrades to
    /// `FALLBACK_NARRATIVE` so a flaky collaborator can never break the
    /// response.
    pub async fn generate(&self, destination: &Destination, profile: &UserProfile) -> String {
        match self.try_generate(destination, profile).await {
            Ok(narrative) => narrative,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    destination = %destination.name,
                    "Narrative generation failed, using fallback"
                );
                FALLBACK_NARRATIVE.to_string()
            }
        }
    }

    async fn try_generate(
        &self,
        destination: &Destination,
        profile: &UserProfile,
    ) -> AppResult<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.api_url, self.model, self.api_key
        );

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_prompt(destination, profile),
                }],
            }],
        };

        let response = self.http_client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Narrative API returned status {}: {}",
                status, body
            )));
        }

        let generated: GenerateResponse = response.json().await?;
        let narrative = generated
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or_else(|| {
                AppError::ExternalApi("Narrative API response had no text candidate".to_string())
            })?;

        tracing::info!(
            destination = %destination.name,
            chars = narrative.len(),
            "Narrative generated"
        );

        Ok(narrative)
    }
}

/// Prompt asking for a short, persuasive paragraph grounded in the profile
/// and the destination's sample reviews.
fn build_prompt(destination: &Destination, profile: &UserProfile) -> String {
    let reviews: String = destination
        .sample_reviews
        .as_deref()
        .unwrap_or_default()
        .chars()
        .take(REVIEW_SNIPPET_CHARS)
        .collect();

    format!(
        "You are a smart travel assistant.\n\
         I will give you a User Profile and a Destination.\n\
         Write a short, persuasive, personalized paragraph (approx 50-80 words) \
         describing why this destination is a great match for this specific user.\n\
         Use the sample reviews to mention highlights or warnings relevant to the \
         user's interests. Do NOT mention that you are an AI. Sound like a \
         knowledgeable local guide.\n\n\
         --- User Profile ---\n\
         Interest: {}\n\
         Travel Style: {}\n\
         Budget: {}\n\
         Available Time: {}\n\n\
         --- Destination ---\n\
         Name: {}\n\
         Type: {}\n\
         Highlights: {}\n\
         Google Rating: {}\n\
         Sample Reviews: \"{}\"\n\n\
         --- Output ---",
        profile.kind.as_deref().unwrap_or("Any"),
        profile.significance.as_deref().unwrap_or("General"),
        profile
            .budget_bucket
            .map(|b| b.to_string())
            .unwrap_or_else(|| "Any".to_string()),
        profile
            .duration_bucket
            .map(|b| b.to_string())
            .unwrap_or_else(|| "Any".to_string()),
        destination.name,
        destination.kind,
        destination.significance,
        destination.google_rating,
        reviews,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::destination;
    use crate::models::{BudgetBucket, DurationBucket};

    #[test]
    fn test_prompt_includes_profile_and_destination() {
        let dest = destination(1, "Munnar Tea Gardens", "Nature", "Nature", DurationBucket::Short, BudgetBucket::Free)
            .build();
        let profile = UserProfile {
            kind: Some("Nature".to_string()),
            budget_bucket: Some(BudgetBucket::Low),
            ..Default::default()
        };

        let prompt = build_prompt(&dest, &profile);
        assert!(prompt.contains("Interest: Nature"));
        assert!(prompt.contains("Budget: Low"));
        assert!(prompt.contains("Travel Style: General"));
        assert!(prompt.contains("Name: Munnar Tea Gardens"));
    }

    #[test]
    fn test_prompt_truncates_long_reviews() {
        let mut dest = destination(1, "A", "Nature", "Nature", DurationBucket::Short, BudgetBucket::Free)
            .build();
        dest.sample_reviews = Some("x".repeat(2000));

        let prompt = build_prompt(&dest, &UserProfile::default());
        let quoted = prompt.split('"').nth(1).unwrap();
        assert_eq!(quoted.len(), REVIEW_SNIPPET_CHARS);
    }

    #[test]
    fn test_response_parsing() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "  A lovely escape.  "}]}}
            ]
        }"#;
        let response: GenerateResponse = serde_json::from_str(json).unwrap();
        let text = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text.trim().to_string())
            .unwrap();
        assert_eq!(text, "A lovely escape.");
    }

    #[test]
    fn test_empty_response_parses_to_no_candidates() {
        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(response.candidates.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_api_falls_back() {
        let service = NarrativeService::new(
            "test_key".to_string(),
            "http://127.0.0.1:1".to_string(),
            "test-model".to_string(),
        );
        let dest = destination(1, "A", "Nature", "Nature", DurationBucket::Short, BudgetBucket::Free)
            .build();

        let narrative = service.generate(&dest, &UserProfile::default()).await;
        assert_eq!(narrative, FALLBACK_NARRATIVE);
    }
}
