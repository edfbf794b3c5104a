//! Public types for the conversation API
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ConversationRequest {
    #[serde(default)]
    pub message: Option<String>,
}

impl ConversationRequest {
    pub fn new(message: &str) -> Self {
        Self {
            message: Some(message.to_string()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ConversationResponse {
    pub response: String,
}
