use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Largest accepted image upload (4 MiB).
pub const MAX_IMAGE_BYTES: u64 = 4 * 1024 * 1024;

/// View key refreshed after every submission.
pub const PROFILE_VIEW: &str = "/profile";
