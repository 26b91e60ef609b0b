use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::modules::storage::StoreError;

#[derive(Debug, Error)]
#[allow(dead_code)]
pub enum AppError {
    #[error("Persistence error: {0}")]
    Persistence(#[from] StoreError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error envelope returned on every failed request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::Persistence(ref e) => {
                tracing::error!("Persistence error: {:?}", e);
                // The store's message goes out verbatim in the response body
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            AppError::Validation(ref msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            AppError::BadRequest(ref msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
        };

        let body = Json(ErrorBody { detail });

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
