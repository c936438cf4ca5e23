use crate::config::EnhancerSettings;
use crate::models::{DraftSummary, Profile};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use thiserror::Error;

const SYSTEM_PROMPT: &str = "You are a career advisor. Given the student's profile and the \
    draft recommendations, return a short, numbered 4-step actionable plan with concrete next \
    actions and timelines. Keep it under 120 words.";

/// Errors that can occur when asking the language model for a plan
#[derive(Debug, Error)]
pub enum EnhancerError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Unauthorized: invalid API key")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Optional language-model rewrite of the draft plan
///
/// Talks to an OpenAI-compatible chat completions endpoint. Without an API
/// key the enhancer is disabled and never touches the network.
pub struct PlanEnhancer {
    base_url: String,
    api_key: Option<String>,
    model: String,
    temperature: f32,
    client: Client,
}

impl PlanEnhancer {
    /// Create a new enhancer from settings
    pub fn new(settings: &EnhancerSettings) -> Result<Self, EnhancerError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: settings.base_url.clone(),
            api_key: settings.api_key.clone().filter(|key| !key.trim().is_empty()),
            model: settings.model.clone(),
            temperature: settings.temperature,
            client,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    /// Ask for a replacement plan
    ///
    /// Returns `None` when disabled, on any failure, or when the model
    /// answers with nothing; the caller keeps the draft plan in that case.
    pub async fn enhance(&self, profile: &Profile, draft: &DraftSummary<'_>) -> Option<String> {
        let api_key = self.api_key.as_deref()?;

        match self.request_plan(api_key, profile, draft).await {
            Ok(plan) if !plan.is_empty() => Some(plan),
            Ok(_) => {
                tracing::debug!("Plan enhancer returned an empty answer, keeping draft plan");
                None
            }
            Err(e) => {
                tracing::warn!("Plan enhancement failed, keeping draft plan: {}", e);
                None
            }
        }
    }

    async fn request_plan(
        &self,
        api_key: &str,
        profile: &Profile,
        draft: &DraftSummary<'_>,
    ) -> Result<String, EnhancerError> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        let user_content = serde_json::to_string(&json!({
            "profile": profile,
            "draft": draft,
        }))?;

        let payload = json!({
            "model": self.model,
            "temperature": self.temperature,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": user_content},
            ],
        });

        tracing::debug!("Requesting enhanced plan from: {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(EnhancerError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            return Err(EnhancerError::ApiError(format!("{} - {}", status, body)));
        }

        let completion: ChatCompletion = response
            .json()
            .await
            .map_err(|e| EnhancerError::InvalidResponse(e.to_string()))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| EnhancerError::InvalidResponse("Missing choices".into()))?
            .message
            .content
            .unwrap_or_default();

        Ok(content.trim().to_string())
    }
}
