//! Public API types

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::{Deserialize, Serialize};

// Errors

pub enum ApiError {
    /// The request was understood but a required field is missing or
    /// empty
    Validation(String),
    /// A JSON body that couldn't be parsed, answered the way axum's
    /// extractor would
    Rejection(JsonRejection),
    Internal(anyhow::Error),
}

impl ApiError {
    pub fn validation(msg: &str) -> Self {
        Self::Validation(msg.to_string())
    }
}

/// Body returned for any client-input error
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

/// Convert `ApiError` into an Axum compatible response.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(error) => {
                tracing::warn!("Rejected request: {}", error);
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response()
            }
            ApiError::Rejection(rejection) => rejection.into_response(),
            ApiError::Internal(err) => {
                // Always log the error
                tracing::error!("{}", err);

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Something went wrong: {}", err),
                )
                    .into_response()
            }
        }
    }
}

/// Enables using `?` on functions that return `Result<_,
/// anyhow::Error>` to turn them into `Result<_, ApiError>`
impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Internal(err.into())
    }
}

// Re-export public types from each route

pub mod auth {
    pub use crate::api::routes::auth::public::*;
}

pub mod conversation {
    pub use crate::api::routes::conversation::public::*;
}

pub mod languages {
    pub use crate::api::routes::languages::public::*;
}

pub mod speech {
    pub use crate::api::routes::speech::public::*;
}

pub mod vocabulary {
    pub use crate::api::routes::vocabulary::public::*;
}
