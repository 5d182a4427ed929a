use actix_web::{http::StatusCode, web, Error, HttpRequest, HttpResponse};

use crate::{
    api_errors::ApiError,
    constants::PROFILE_VIEW,
    entities::{
        profile::ProfileField,
        submission::{SubmissionOutcome, SubmissionResponse},
    },
    utils::form_data::read_submission,
    AppState,
};

/// Current profile, used as the form's default values.
pub async fn get_profile(state: web::Data<AppState>) -> Result<HttpResponse, Error> {
    let handler = &state.profile_handler;
    let view = state
        .view_cache
        .get_or_load(PROFILE_VIEW, || handler.current_profile())
        .await?;

    Ok(HttpResponse::Ok().json(view))
}

/// Submits the form. Validation failures are a normal 400 response carrying
/// per-field messages and the submitted values.
pub async fn submit_profile(
    req: HttpRequest,
    payload: web::Payload,
    state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let raw = read_submission(&req, payload, state.form_limits).await?;

    let key = raw
        .text(ProfileField::Id.as_str())
        .map(str::trim)
        .unwrap_or_default()
        .to_string();
    let Some(_permit) = state.in_flight.try_acquire(&key) else {
        return Err(ApiError::SubmissionInProgress(format!(
            "profile '{}' is already being saved",
            key
        ))
        .into());
    };

    let outcome = state.profile_handler.submit(raw).await;
    let status = match &outcome {
        SubmissionOutcome::Accepted { .. } => StatusCode::OK,
        SubmissionOutcome::Rejected { .. } => StatusCode::BAD_REQUEST,
        SubmissionOutcome::Errored { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };
    tracing::info!(profile_key = %key, outcome = outcome.kind(), status = status.as_u16(), "Profile submission finished");

    Ok(HttpResponse::build(status).json(SubmissionResponse::from(outcome)))
}

/// Validates a draft without submitting it, mirroring the form's client-side check.
pub async fn check_profile(
    req: HttpRequest,
    payload: web::Payload,
    state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let raw = read_submission(&req, payload, state.form_limits).await?;
    let profile = state.profile_handler.check(&raw)?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "valid": true,
        "profile": profile
    })))
}
