use async_trait::async_trait;
use log::info;
use serde::{ Deserialize, Serialize };

use super::{
    default_safety_thresholds,
    ChatClient,
    GenerationError,
    GenerationSettings,
};
use crate::models::{ Role, Turn };

const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GeminiChatClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    settings: GenerationSettings,
}

impl GeminiChatClient {
    /// No request timeout is set: an unresponsive upstream holds the
    /// request open, matching the relay's stated resource model.
    pub fn new(api_key: String, model: String, base_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model,
            base_url: base_url.unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            settings: GenerationSettings::default(),
        }
    }

    fn api_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            self.model,
            self.api_key
        )
    }

    fn build_request(&self, turns: &[Turn]) -> GenerateContentRequest {
        let contents = turns
            .iter()
            .map(|turn| Content {
                role: Some(
                    match turn.role {
                        Role::User => "user",
                        Role::Model => "model",
                    }.to_string()
                ),
                parts: vec![ContentPart { text: turn.text.clone() }],
            })
            .collect();

        GenerateContentRequest {
            contents,
            generation_config: GenerationConfig {
                temperature: self.settings.temperature,
                top_k: self.settings.top_k,
                top_p: self.settings.top_p,
                max_output_tokens: self.settings.max_output_tokens,
            },
            safety_settings: default_safety_thresholds()
                .into_iter()
                .map(|t| SafetySetting {
                    category: t.category.to_string(),
                    threshold: t.threshold.to_string(),
                })
                .collect(),
        }
    }
}

#[async_trait]
impl ChatClient for GeminiChatClient {
    async fn generate(&self, turns: &[Turn]) -> Result<String, GenerationError> {
        let request = self.build_request(turns);
        info!(
            "GeminiChatClient::generate() → model={} turns={}",
            self.model,
            turns.len()
        );

        let response = self.client
            .post(self.api_url())
            .json(&request)
            .send().await
            .map_err(|e| GenerationError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api { status, message });
        }

        let body: GenerateContentResponse = response
            .json().await
            .map_err(|e| GenerationError::MalformedResponse(e.to_string()))?;

        // A blocked prompt carries no candidates, only prompt feedback.
        if let Some(feedback) = &body.prompt_feedback {
            if let Some(reason) = &feedback.block_reason {
                return Err(GenerationError::SafetyBlocked(reason.clone()));
            }
        }

        let candidate = body.candidates
            .first()
            .ok_or_else(|| {
                GenerationError::MalformedResponse("response contains no candidates".to_string())
            })?;

        let text = candidate.content
            .as_ref()
            .map(|content| {
                content.parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<String>()
            })
            .filter(|text| !text.is_empty());

        match text {
            Some(text) => Ok(text),
            // A candidate stopped for SAFETY may carry no content at all.
            None if candidate.finish_reason.as_deref() == Some("SAFETY") => {
                Err(GenerationError::SafetyBlocked("SAFETY".to_string()))
            }
            None => Err(
                GenerationError::MalformedResponse("candidate contains no text parts".to_string())
            ),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
    safety_settings: Vec<SafetySetting>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<ContentPart>,
}

#[derive(Serialize, Deserialize)]
struct ContentPart {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_k: i32,
    top_p: f32,
    max_output_tokens: i32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SafetySetting {
    category: String,
    threshold: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_to_gemini_wire_format() {
        let client = GeminiChatClient::new(
            "test-key".to_string(),
            "gemini-1.5-flash".to_string(),
            None
        );
        let turns = vec![Turn::user("hello"), Turn::model("hi"), Turn::user("bye")];
        let request = client.build_request(&turns);
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["contents"][1]["role"], "model");
        assert_eq!(value["contents"][2]["parts"][0]["text"], "bye");
        assert_eq!(value["generationConfig"]["topK"], 1);
        assert_eq!(value["generationConfig"]["maxOutputTokens"], 1000);
        assert_eq!(value["safetySettings"][0]["category"], "HARM_CATEGORY_HARASSMENT");
        assert_eq!(value["safetySettings"][0]["threshold"], "BLOCK_MEDIUM_AND_ABOVE");
    }

    #[test]
    fn api_url_includes_model_and_key() {
        let client = GeminiChatClient::new(
            "k".to_string(),
            "gemini-1.5-flash".to_string(),
            Some("http://localhost:9999/v1beta/".to_string())
        );
        assert_eq!(
            client.api_url(),
            "http://localhost:9999/v1beta/models/gemini-1.5-flash:generateContent?key=k"
        );
    }
}
