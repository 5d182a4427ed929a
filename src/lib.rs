use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod api_errors;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod telemetry;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases, validation};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{cache, limiter, utils};

use cache::view_cache::ProfileViewCache;
use limiter::in_flight::InFlightSubmissions;
use repositories::profile::{LoggingProfileRepo, ProfileRepository};
use use_cases::profile::ProfileSubmissionHandler;
use utils::form_data::FormLimits;

pub struct AppState {
    pub app_name: String,
    pub profile_handler: AppProfileHandler,
    pub view_cache: Arc<ProfileViewCache>,
    pub in_flight: InFlightSubmissions,
    pub form_limits: FormLimits,
}

pub type AppProfileHandler = ProfileSubmissionHandler<Arc<dyn ProfileRepository>, Arc<ProfileViewCache>>;

impl AppState {
    pub fn new(config: &settings::AppConfig) -> Self {
        Self::with_repository(config, Arc::new(LoggingProfileRepo::default()))
    }

    pub fn with_repository(config: &settings::AppConfig, profile_repo: Arc<dyn ProfileRepository>) -> Self {
        let view_cache = Arc::new(ProfileViewCache::new());
        let profile_handler = ProfileSubmissionHandler::new(
            profile_repo,
            view_cache.clone(),
            config.submit_latency(),
        );

        AppState {
            app_name: config.name.clone(),
            profile_handler,
            view_cache,
            in_flight: InFlightSubmissions::new(),
            form_limits: config.form_limits(),
        }
    }
}
