//! Router for the vocabulary API

use std::sync::{Arc, RwLock};

use axum::{Json, Router};
use serde_json::Value;

use super::public::VocabularyResponse;
use crate::api::state::AppState;

type SharedState = Arc<RwLock<AppState>>;

/// Acknowledge a vocabulary entry. Nothing is stored yet.
async fn save_vocabulary(Json(entry): Json<Value>) -> Json<VocabularyResponse> {
    tracing::debug!("Received vocabulary entry: {}", entry);
    Json(VocabularyResponse {
        message: String::from("Vocabulary saved successfully."),
    })
}

/// Create the vocabulary router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", axum::routing::post(save_vocabulary))
}
