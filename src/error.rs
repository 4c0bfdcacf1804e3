use axum::{
    Json,
    extract::rejection::{BytesRejection, RawPathParamsRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    response::{ErrorBody, ValidationErrors},
    store::StoreError,
    validation::Violation,
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input")]
    Validation(Vec<Violation>),

    #[error("Product not found")]
    NotFound,

    #[error("Malformed JSON body")]
    MalformedBody(#[source] serde_json::Error),

    #[error(transparent)]
    Path(#[from] RawPathParamsRejection),

    #[error(transparent)]
    Body(#[from] BytesRejection),

    #[error("Store error")]
    Store(#[from] StoreError),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(errors) => {
                return (StatusCode::BAD_REQUEST, Json(ValidationErrors { errors }))
                    .into_response();
            }
            AppError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::MalformedBody(ref err) => {
                tracing::debug!(error = %err, "rejected malformed JSON body");
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::Path(ref rejection) => (rejection.status(), rejection.body_text()),
            AppError::Body(ref rejection) => (rejection.status(), rejection.body_text()),
            AppError::Store(ref err) => {
                tracing::error!(error = %err, "store call failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            AppError::Internal(ref err) => {
                tracing::error!(error = %err, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
