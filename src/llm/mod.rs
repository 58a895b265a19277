pub mod gemini;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Turn;

/// Failure kinds at the boundary between the relay and the external
/// generation service. The HTTP layer folds all of these into a generic
/// 500; the distinction exists so callers never have to inspect message
/// strings.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("network error: {0}")]
    Network(String),

    #[error("generation API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("generation blocked by safety thresholds: {0}")]
    SafetyBlocked(String),

    #[error("malformed generation response: {0}")]
    MalformedResponse(String),
}

/// Fixed sampling parameters sent with every generation request. Constant
/// for the process lifetime.
#[derive(Debug, Clone)]
pub struct GenerationSettings {
    pub temperature: f32,
    pub top_k: i32,
    pub top_p: f32,
    pub max_output_tokens: i32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            temperature: 0.6,
            top_k: 1,
            top_p: 0.5,
            max_output_tokens: 1000,
        }
    }
}

/// Content-safety thresholds sent with every request, one per harm
/// category. Block at medium probability and above across the board.
#[derive(Debug, Clone)]
pub struct SafetyThreshold {
    pub category: &'static str,
    pub threshold: &'static str,
}

pub fn default_safety_thresholds() -> Vec<SafetyThreshold> {
    const BLOCK_MEDIUM_AND_ABOVE: &str = "BLOCK_MEDIUM_AND_ABOVE";
    [
        "HARM_CATEGORY_HARASSMENT",
        "HARM_CATEGORY_HATE_SPEECH",
        "HARM_CATEGORY_SEXUALLY_EXPLICIT",
        "HARM_CATEGORY_DANGEROUS_CONTENT",
    ]
    .into_iter()
    .map(|category| SafetyThreshold {
        category,
        threshold: BLOCK_MEDIUM_AND_ABOVE,
    })
    .collect()
}

/// A single synchronous-looking call into the external text-generation
/// capability. One invocation per inbound request; no retries, no
/// streaming.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn generate(&self, turns: &[Turn]) -> Result<String, GenerationError>;
}
