//! Router for the speech API

use std::sync::{Arc, RwLock};

use axum::{Json, Router};
use serde_json::Value;

use super::public::{SpeechToTextResponse, TextToSpeechResponse};
use crate::api::state::AppState;

type SharedState = Arc<RwLock<AppState>>;

async fn speech_to_text(Json(_audio): Json<Value>) -> Json<SpeechToTextResponse> {
    Json(SpeechToTextResponse {
        transcript: String::from("This is a placeholder transcript."),
    })
}

async fn text_to_speech(Json(_text): Json<Value>) -> Json<TextToSpeechResponse> {
    Json(TextToSpeechResponse {
        audio_url: String::from("placeholder-audio-url"),
    })
}

/// Create the speech router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/speech-to-text", axum::routing::post(speech_to_text))
        .route("/text-to-speech", axum::routing::post(text_to_speech))
}
