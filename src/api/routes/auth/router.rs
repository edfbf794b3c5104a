//! Router for the auth API
//!
//! Credentials are accepted as arbitrary JSON and never checked.

use std::sync::{Arc, RwLock};

use axum::{Json, Router};
use serde_json::Value;

use super::public::{LoginResponse, RegisterResponse};
use crate::api::state::AppState;

type SharedState = Arc<RwLock<AppState>>;

async fn login(Json(_credentials): Json<Value>) -> Json<LoginResponse> {
    Json(LoginResponse {
        token: String::from("placeholder-token"),
    })
}

async fn register(Json(_credentials): Json<Value>) -> Json<RegisterResponse> {
    Json(RegisterResponse {
        message: String::from("User registered successfully."),
    })
}

/// Create the auth router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/login", axum::routing::post(login))
        .route("/register", axum::routing::post(register))
}
