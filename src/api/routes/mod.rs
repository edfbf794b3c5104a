//! API routes module

pub mod auth;
pub mod conversation;
pub mod languages;
pub mod speech;
pub mod vocabulary;

use std::sync::{Arc, RwLock};

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<RwLock<AppState>>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Conversation routes
        .nest("/conversation", conversation::router())
        // Language catalog routes
        .nest("/languages", languages::router())
        // Vocabulary routes
        .nest("/vocabulary", vocabulary::router())
        // Login and register live at the top of the API
        .merge(auth::router())
        // Speech conversion routes
        .merge(speech::router())
}
