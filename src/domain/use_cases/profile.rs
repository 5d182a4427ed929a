use std::{any::Any, panic::AssertUnwindSafe, time::Duration};

use futures::FutureExt;
use tracing::Instrument;
use uuid::Uuid;

use crate::{
    constants::PROFILE_VIEW,
    entities::{
        profile::{Profile, RawProfileInput},
        submission::SubmissionOutcome,
    },
    errors::AppError,
    repositories::{profile::ProfileRepository, view::ViewInvalidator},
    validation::validate_profile,
};

pub struct ProfileSubmissionHandler<R, V>
where
    R: ProfileRepository,
    V: ViewInvalidator,
{
    pub profile_repo: R,
    pub view_invalidator: V,
    latency: Duration,
}

impl<R, V> ProfileSubmissionHandler<R, V>
where
    R: ProfileRepository,
    V: ViewInvalidator,
{
    pub fn new(profile_repo: R, view_invalidator: V, latency: Duration) -> Self {
        ProfileSubmissionHandler {
            profile_repo,
            view_invalidator,
            latency,
        }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Runs one submission: wait, validate, persist, then invalidate the profile view.
    ///
    /// Never fails. Validation problems come back as `Rejected` with the raw
    /// input untouched; collaborator failures come back as `Errored`. The view
    /// is invalidated exactly once on every path.
    pub async fn submit(&self, raw: RawProfileInput) -> SubmissionOutcome {
        let span = tracing::info_span!("profile_submission", submission_id = %Uuid::new_v4());
        self.run_submission(raw).instrument(span).await
    }

    async fn run_submission(&self, raw: RawProfileInput) -> SubmissionOutcome {
        let _refresh = InvalidationGuard {
            invalidator: &self.view_invalidator,
            view: PROFILE_VIEW,
        };

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        tracing::debug!(fields = raw.len(), "Validating profile submission");
        let profile = match validate_profile(&raw) {
            Ok(profile) => profile,
            Err(field_errors) => {
                tracing::info!(
                    failed_fields = ?field_errors.fields().collect::<Vec<_>>(),
                    "Profile submission rejected"
                );
                return SubmissionOutcome::rejected(field_errors, raw);
            }
        };

        self.persist(&profile).await
    }

    async fn persist(&self, profile: &Profile) -> SubmissionOutcome {
        let saved = AssertUnwindSafe(async { self.profile_repo.save_profile(profile).await })
            .catch_unwind()
            .await;

        match saved {
            Ok(Ok(())) => {
                tracing::info!(profile_id = %profile.id, "Profile submission accepted");
                SubmissionOutcome::accepted()
            }
            Ok(Err(e)) => {
                tracing::error!(profile_id = %profile.id, error = %e, "Saving profile failed");
                SubmissionOutcome::errored(e)
            }
            Err(panic) => {
                let detail = panic_message(&*panic);
                tracing::error!(profile_id = %profile.id, panic = %detail, "Profile repository panicked");
                SubmissionOutcome::errored(detail)
            }
        }
    }

    /// Validates without submitting. Nothing is persisted or invalidated.
    pub fn check(&self, raw: &RawProfileInput) -> Result<Profile, AppError> {
        validate_profile(raw).map_err(AppError::from)
    }

    /// Loads the profile the form starts from.
    pub async fn current_profile(&self) -> Result<Profile, AppError> {
        Ok(self.profile_repo.load_profile().await?)
    }
}

struct InvalidationGuard<'a, V: ViewInvalidator> {
    invalidator: &'a V,
    view: &'static str,
}

impl<V: ViewInvalidator> Drop for InvalidationGuard<'_, V> {
    fn drop(&mut self) {
        match self.invalidator.invalidate(self.view) {
            Ok(()) => tracing::debug!(view = self.view, "Profile view invalidated"),
            Err(e) => tracing::warn!(view = self.view, error = %e, "Failed to invalidate profile view"),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unexpected panic".to_string()
    }
}
