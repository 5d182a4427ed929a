use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ───── Field Catalogue ──────────────────────────────────────────────

/// Every field the profile form knows about, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProfileField {
    Id,
    Name,
    Role,
    Image,
    Bio,
    Linkedin,
    Twitter,
    Facebook,
    StreetAddress,
    Apartment,
    City,
    State,
    ZipCode,
    Country,
}

impl ProfileField {
    pub const ALL: [ProfileField; 14] = [
        ProfileField::Id,
        ProfileField::Name,
        ProfileField::Role,
        ProfileField::Image,
        ProfileField::Bio,
        ProfileField::Linkedin,
        ProfileField::Twitter,
        ProfileField::Facebook,
        ProfileField::StreetAddress,
        ProfileField::Apartment,
        ProfileField::City,
        ProfileField::State,
        ProfileField::ZipCode,
        ProfileField::Country,
    ];

    /// Name used on the wire (form field name / JSON key).
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileField::Id => "id",
            ProfileField::Name => "name",
            ProfileField::Role => "role",
            ProfileField::Image => "image",
            ProfileField::Bio => "bio",
            ProfileField::Linkedin => "linkedin",
            ProfileField::Twitter => "twitter",
            ProfileField::Facebook => "facebook",
            ProfileField::StreetAddress => "streetAddress",
            ProfileField::Apartment => "apartment",
            ProfileField::City => "city",
            ProfileField::State => "state",
            ProfileField::ZipCode => "zipCode",
            ProfileField::Country => "country",
        }
    }

    /// Human label used in violation messages.
    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::Id => "ID",
            ProfileField::Name => "Name",
            ProfileField::Role => "Role",
            ProfileField::Image => "Image",
            ProfileField::Bio => "Bio",
            ProfileField::Linkedin => "LinkedIn",
            ProfileField::Twitter => "Twitter",
            ProfileField::Facebook => "Facebook",
            ProfileField::StreetAddress => "Street address",
            ProfileField::Apartment => "Apartment",
            ProfileField::City => "City",
            ProfileField::State => "State",
            ProfileField::ZipCode => "ZIP code",
            ProfileField::Country => "Country",
        }
    }

    pub fn from_wire(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.as_str() == name)
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ───── Raw Boundary Input ───────────────────────────────────────────

/// Metadata of an uploaded file as declared by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileHandle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default)]
    pub content_type: String,
    pub size_bytes: u64,
}

impl FileHandle {
    pub fn new(file_name: Option<String>, content_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            file_name,
            content_type: content_type.into(),
            size_bytes,
        }
    }
}

/// A single raw value: text from a text-like control, or a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Text(String),
    File(FileHandle),
}

impl RawValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawValue::Text(s) => Some(s),
            RawValue::File(_) => None,
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<FileHandle> for RawValue {
    fn from(value: FileHandle) -> Self {
        RawValue::File(value)
    }
}

/// Snapshot of the form as submitted: field name → raw value.
///
/// Unknown keys are kept so the caller can redisplay exactly what was sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawProfileInput(BTreeMap<String, RawValue>);

impl RawProfileInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, replacing any earlier value under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<RawValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn remove(&mut self, name: &str) -> Option<RawValue> {
        self.0.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&RawValue> {
        self.0.get(name)
    }

    pub fn field(&self, field: ProfileField) -> Option<&RawValue> {
        self.get(field.as_str())
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(RawValue::as_text)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &RawValue)> {
        self.0.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for RawProfileInput
where
    K: Into<String>,
    V: Into<RawValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut raw = RawProfileInput::new();
        for (k, v) in iter {
            raw.insert(k, v);
        }
        raw
    }
}

// ───── Typed Profile ────────────────────────────────────────────────

/// Image accepted by the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProfileImage {
    /// Existing image URL, kept as-is.
    Reference(String),
    /// Freshly uploaded file that passed the type and size checks.
    Upload(FileHandle),
}

/// A fully validated profile. Only the validator builds one from raw input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    // Personal information
    pub id: String,
    pub name: String,
    pub role: String,
    pub image: ProfileImage,
    pub bio: String,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,

    // Address information
    pub street_address: String,
    pub apartment: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl Profile {
    /// Converts the profile back into the raw shape the form submits.
    /// Optional fields that are `None` are left out.
    pub fn to_raw(&self) -> RawProfileInput {
        let mut raw = RawProfileInput::new()
            .with(ProfileField::Id.as_str(), self.id.as_str())
            .with(ProfileField::Name.as_str(), self.name.as_str())
            .with(ProfileField::Role.as_str(), self.role.as_str())
            .with(ProfileField::Bio.as_str(), self.bio.as_str())
            .with(ProfileField::StreetAddress.as_str(), self.street_address.as_str())
            .with(ProfileField::City.as_str(), self.city.as_str())
            .with(ProfileField::State.as_str(), self.state.as_str())
            .with(ProfileField::ZipCode.as_str(), self.zip_code.as_str())
            .with(ProfileField::Country.as_str(), self.country.as_str());

        let image = match &self.image {
            ProfileImage::Reference(url) => RawValue::Text(url.clone()),
            ProfileImage::Upload(file) => RawValue::File(file.clone()),
        };
        raw.insert(ProfileField::Image.as_str(), image);

        let optional = [
            (ProfileField::Linkedin, &self.linkedin),
            (ProfileField::Twitter, &self.twitter),
            (ProfileField::Facebook, &self.facebook),
            (ProfileField::Apartment, &self.apartment),
        ];
        for (field, value) in optional {
            if let Some(v) = value {
                raw.insert(field.as_str(), v.as_str());
            }
        }

        raw
    }
}
