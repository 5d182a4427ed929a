use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse
};
use derive_more::Display;

use crate::entities::submission::FieldErrors;

#[derive(Debug, Display)]
pub enum AppError {
    #[display("Validation error: {} field(s) failed", _0.len())]
    ValidationError(FieldErrors),

    #[display("Persistence error: {_0}")]
    Persistence(String),

    #[display("View invalidation failed: {_0}")]
    ViewInvalidation(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::ValidationError(errors) => {
                serde_json::json!({
                    "error": "Validation failed",
                    "details": errors
                })
            }
            // Collaborator failures stay opaque to the client.
            AppError::Persistence(_) | AppError::ViewInvalidation(_) => {
                serde_json::json!({"error": "Internal server error"})
            }
        };
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ViewInvalidation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        AppError::ValidationError(errors)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Persistence(err.to_string())
    }
}
