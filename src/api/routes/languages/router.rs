//! Router for the languages API

use std::sync::{Arc, RwLock};

use axum::{Json, Router};

use super::public::Language;
use crate::api::state::AppState;

type SharedState = Arc<RwLock<AppState>>;

const SUPPORTED_LANGUAGES: [(&str, &str); 8] = [
    ("zh", "Chinese (Mandarin)"),
    ("ko", "Korean"),
    ("ja", "Japanese"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
];

/// The languages a learner can practice, in display order
pub fn supported_languages() -> Vec<Language> {
    SUPPORTED_LANGUAGES
        .iter()
        .map(|(id, name)| Language::new(id, name))
        .collect()
}

async fn list_languages() -> Json<Vec<Language>> {
    Json(supported_languages())
}

/// Create the languages router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", axum::routing::get(list_languages))
}
