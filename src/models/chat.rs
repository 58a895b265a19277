use serde::{ Serialize, Deserialize };

/// Who produced a conversation turn. Serialized lowercase to match the
/// Generative Language API wire format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self { role: Role::User, text: text.into() }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self { role: Role::Model, text: text.into() }
    }
}

/// Inbound body for POST /chat. The field is optional so a missing key is
/// handled by validation rather than a deserialization error; a non-string
/// value still fails to deserialize and is rejected at the boundary.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(rename = "userInput", default)]
    pub user_input: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
