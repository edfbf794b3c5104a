//! Router for the conversation API

use std::sync::{Arc, RwLock};

use axum::body::Bytes;
use axum::{Json, Router, extract::State};
use http::{HeaderMap, header};

use super::public;
use crate::api::public::ApiError;
use crate::api::state::AppState;

type SharedState = Arc<RwLock<AppState>>;

const MESSAGE_REQUIRED: &str = "Message is required.";

fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|val| val.to_str().ok())
        .map(|val| val.trim().to_ascii_lowercase())
        .is_some_and(|val| val.starts_with("application/json") || val.contains("+json"))
}

/// Read the message out of the request. A missing or non-JSON body
/// has no message; a JSON body that doesn't parse is rejected.
fn parse_message(headers: &HeaderMap, body: &Bytes) -> Result<Option<String>, ApiError> {
    if !has_json_content_type(headers) || body.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(None);
    }
    let Json(payload) =
        Json::<public::ConversationRequest>::from_bytes(body).map_err(ApiError::Rejection)?;
    Ok(payload.message)
}

/// Reply to a single user message
async fn conversation_handler(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<public::ConversationResponse>, ApiError> {
    let message = match parse_message(&headers, &body)? {
        Some(message) if !message.is_empty() => message,
        _ => return Err(ApiError::validation(MESSAGE_REQUIRED)),
    };

    // Clone the responder out so the lock isn't held while it waits
    let responder = Arc::clone(&state.read().expect("Unable to read share state").responder);
    let response = responder.respond(&message).await?;

    tracing::debug!("Replied to message of {} bytes", message.len());

    Ok(Json(public::ConversationResponse { response }))
}

/// Create the conversation router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", axum::routing::post(conversation_handler))
}
