use std::sync::Arc;

use async_trait::async_trait;

use crate::entities::profile::{Profile, ProfileImage};

/// Persistence collaborator for accepted profiles.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Stores an accepted profile. Any error is reported to the submitter as opaque.
    async fn save_profile(&self, profile: &Profile) -> anyhow::Result<()>;

    /// Loads the profile the form is pre-populated with.
    async fn load_profile(&self) -> anyhow::Result<Profile>;
}

/// Repository that only logs what it is given and always serves a fixed baseline.
#[derive(Clone)]
pub struct LoggingProfileRepo {
    baseline: Profile,
}

impl LoggingProfileRepo {
    pub fn new(baseline: Profile) -> Self {
        LoggingProfileRepo { baseline }
    }
}

impl Default for LoggingProfileRepo {
    fn default() -> Self {
        Self::new(baseline_profile())
    }
}

#[async_trait]
impl ProfileRepository for LoggingProfileRepo {
    async fn save_profile(&self, profile: &Profile) -> anyhow::Result<()> {
        tracing::info!(
            profile_id = %profile.id,
            profile = %serde_json::to_string(profile)?,
            "Profile submitted"
        );
        Ok(())
    }

    async fn load_profile(&self) -> anyhow::Result<Profile> {
        Ok(self.baseline.clone())
    }
}

/// Default values shown in the form before the user edits anything.
pub fn baseline_profile() -> Profile {
    Profile {
        id: "user123".to_string(),
        name: "Jane Smith".to_string(),
        role: "Software Engineer".to_string(),
        image: ProfileImage::Reference("https://picsum.photos/200/300".to_string()),
        bio: "Passionate software engineer with 5+ years of experience in full-stack development."
            .to_string(),
        linkedin: Some("https://linkedin.com/in/janesmith".to_string()),
        twitter: Some("https://twitter.com/janesmith".to_string()),
        facebook: Some("https://facebook.com/janesmith".to_string()),
        street_address: "123 Tech Street".to_string(),
        apartment: Some("Apt 4B".to_string()),
        city: "San Francisco".to_string(),
        state: "California".to_string(),
        zip_code: "94105".to_string(),
        country: "United States".to_string(),
    }
}

#[async_trait]
impl<T: ProfileRepository + ?Sized> ProfileRepository for Arc<T> {
    async fn save_profile(&self, profile: &Profile) -> anyhow::Result<()> {
        (**self).save_profile(profile).await
    }

    async fn load_profile(&self) -> anyhow::Result<Profile> {
        (**self).load_profile().await
    }
}
