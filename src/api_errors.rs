use actix_multipart::MultipartError;
use actix_web::{error::PayloadError, http::StatusCode, HttpResponse, ResponseError};
use derive_more::Display;

use crate::handlers::json_error::json_error;

/// Failures while decoding a submission off the wire, before validation.
#[derive(Debug, Display)]
pub enum ApiError {
    #[display("Bad request: {}", _0)]
    BadRequest(String),

    #[display("Invalid content type: {}", _0)]
    InvalidContentType(String),

    #[display("Payload too large: {}", _0)]
    PayloadTooLarge(String),

    #[display("Submission in progress: {}", _0)]
    SubmissionInProgress(String),
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::InvalidContentType(_) => "invalid_content_type",
            ApiError::PayloadTooLarge(_) => "payload_too_large",
            ApiError::SubmissionInProgress(_) => "submission_in_progress",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::SubmissionInProgress(_) => StatusCode::CONFLICT,
        }
    }

    fn error_response(&self) -> HttpResponse {
        json_error(self.status_code(), self.code(), &self.to_string())
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        match err {
            MultipartError::ContentTypeIncompatible => {
                ApiError::InvalidContentType("Content type incompatible".to_string())
            }
            MultipartError::Payload(payload) => payload.into(),
            _ => ApiError::BadRequest(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(format!("JSON error: {}", err))
    }
}

impl From<PayloadError> for ApiError {
    fn from(err: PayloadError) -> Self {
        match err {
            PayloadError::Overflow => ApiError::PayloadTooLarge(err.to_string()),
            _ => ApiError::BadRequest(format!("Payload error: {}", err)),
        }
    }
}
