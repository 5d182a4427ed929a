#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use mockall::mock;
use profile_form_backend::{
    constants::MAX_IMAGE_BYTES,
    entities::profile::{FileHandle, Profile, RawProfileInput},
    errors::AppError,
    repositories::{
        profile::{baseline_profile, ProfileRepository},
        view::ViewInvalidator,
    },
};

/// The accepted submission from the happy-path scenario.
pub fn valid_raw() -> RawProfileInput {
    RawProfileInput::new()
        .with("id", "user123")
        .with("name", "Jane Smith")
        .with("role", "Engineer")
        .with("image", "https://example.com/a.png")
        .with("bio", "Hi there")
        .with("streetAddress", "123 Tech St")
        .with("city", "SF")
        .with("state", "CA")
        .with("zipCode", "94105")
        .with("country", "US")
        .with("linkedin", "")
        .with("twitter", "")
        .with("facebook", "")
}

pub fn valid_json() -> serde_json::Value {
    serde_json::json!({
        "id": "user123",
        "name": "Jane Smith",
        "role": "Engineer",
        "image": "https://example.com/a.png",
        "bio": "Hi there",
        "streetAddress": "123 Tech St",
        "city": "SF",
        "state": "CA",
        "zipCode": "94105",
        "country": "US",
        "linkedin": "",
        "twitter": "",
        "facebook": ""
    })
}

pub fn raw_with(name: &str, value: impl Into<profile_form_backend::entities::profile::RawValue>) -> RawProfileInput {
    valid_raw().with(name, value)
}

pub fn raw_without(name: &str) -> RawProfileInput {
    let mut raw = valid_raw();
    raw.remove(name);
    raw
}

pub fn upload(content_type: &str, size_bytes: u64) -> FileHandle {
    FileHandle::new(Some("avatar.bin".to_string()), content_type, size_bytes)
}

pub fn oversized() -> u64 {
    MAX_IMAGE_BYTES + 1
}

mock! {
    pub ProfileRepo {}

    #[async_trait]
    impl ProfileRepository for ProfileRepo {
        async fn save_profile(&self, profile: &Profile) -> anyhow::Result<()>;
        async fn load_profile(&self) -> anyhow::Result<Profile>;
    }
}

/// Counts invalidations and remembers which views were hit.
#[derive(Default)]
pub struct CountingInvalidator {
    calls: AtomicUsize,
    views: Mutex<Vec<String>>,
}

impl CountingInvalidator {
    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn views(&self) -> Vec<String> {
        self.views.lock().unwrap().clone()
    }
}

impl ViewInvalidator for CountingInvalidator {
    fn invalidate(&self, view: &str) -> Result<(), AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.views.lock().unwrap().push(view.to_string());
        Ok(())
    }
}

pub struct FailingInvalidator;

impl ViewInvalidator for FailingInvalidator {
    fn invalidate(&self, _view: &str) -> Result<(), AppError> {
        Err(AppError::ViewInvalidation("cache offline".to_string()))
    }
}

/// Shared call log for checking the order collaborators are reached in.
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<&'static str>>>);

impl CallLog {
    pub fn push(&self, event: &'static str) {
        self.0.lock().unwrap().push(event);
    }

    pub fn events(&self) -> Vec<&'static str> {
        self.0.lock().unwrap().clone()
    }
}

pub struct LoggedRepo(pub CallLog);

#[async_trait]
impl ProfileRepository for LoggedRepo {
    async fn save_profile(&self, _profile: &Profile) -> anyhow::Result<()> {
        self.0.push("save");
        Ok(())
    }

    async fn load_profile(&self) -> anyhow::Result<Profile> {
        Ok(baseline_profile())
    }
}

pub struct LoggedInvalidator(pub CallLog);

impl ViewInvalidator for LoggedInvalidator {
    fn invalidate(&self, _view: &str) -> Result<(), AppError> {
        self.0.push("invalidate");
        Ok(())
    }
}

pub struct FailingRepo;

#[async_trait]
impl ProfileRepository for FailingRepo {
    async fn save_profile(&self, _profile: &Profile) -> anyhow::Result<()> {
        Err(anyhow::anyhow!("database unreachable"))
    }

    async fn load_profile(&self) -> anyhow::Result<Profile> {
        Err(anyhow::anyhow!("database unreachable"))
    }
}

pub struct PanickingRepo;

#[async_trait]
impl ProfileRepository for PanickingRepo {
    async fn save_profile(&self, _profile: &Profile) -> anyhow::Result<()> {
        panic!("storage driver crashed");
    }

    async fn load_profile(&self) -> anyhow::Result<Profile> {
        Ok(baseline_profile())
    }
}
