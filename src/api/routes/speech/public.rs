//! Public types for the speech API
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct SpeechToTextResponse {
    pub transcript: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TextToSpeechResponse {
    #[serde(rename = "audioUrl")]
    pub audio_url: String,
}
