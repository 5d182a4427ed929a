use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

use crate::constants::MAX_IMAGE_BYTES;
use crate::entities::profile::{FileHandle, Profile, ProfileField, ProfileImage, RawProfileInput, RawValue};
use crate::entities::submission::FieldErrors;

pub const INVALID_IMAGE_TYPE: &str = "Please upload a valid image file";
pub const IMAGE_TOO_LARGE: &str = "Image must be less than 4MB";

fn violation(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

// ───── Field Constraints ────────────────────────────────────────────

/// Requires the field to be present and to hold text.
pub fn required_text(field: ProfileField, value: Option<&RawValue>) -> Result<&str, ValidationError> {
    match value {
        Some(RawValue::Text(text)) => Ok(text),
        Some(RawValue::File(_)) => Err(violation("type", format!("{} must be text", field.label()))),
        None => Err(violation("required", format!("{} is required", field.label()))),
    }
}

/// Trims, then requires at least `min` characters. Blank input reports as missing.
pub fn min_trimmed_length(field: ProfileField, value: &str, min: usize) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(violation("required", format!("{} is required", field.label())));
    }
    if trimmed.chars().count() < min {
        return Err(violation(
            "length",
            format!("{} must be at least {} characters", field.label(), min),
        ));
    }
    Ok(trimmed.to_string())
}

/// Accepts absence or any text. `trim` controls whether the stored value is trimmed.
pub fn optional_text(
    field: ProfileField,
    value: Option<&RawValue>,
    trim: bool,
) -> Result<Option<String>, ValidationError> {
    match value {
        None => Ok(None),
        Some(RawValue::Text(text)) if trim => Ok(Some(text.trim().to_string())),
        Some(RawValue::Text(text)) => Ok(Some(text.clone())),
        Some(RawValue::File(_)) => Err(violation("type", format!("{} must be text", field.label()))),
    }
}

pub fn image_content_type(file: &FileHandle) -> Result<(), ValidationError> {
    if file.content_type.starts_with("image/") {
        Ok(())
    } else {
        Err(violation("image_type", INVALID_IMAGE_TYPE))
    }
}

pub fn image_size(file: &FileHandle) -> Result<(), ValidationError> {
    if file.size_bytes <= MAX_IMAGE_BYTES {
        Ok(())
    } else {
        Err(violation("image_size", IMAGE_TOO_LARGE))
    }
}

/// Existing references pass through untouched. Uploads run every refinement
/// and report each one that fails.
pub fn validate_image(value: Option<&RawValue>) -> Result<ProfileImage, Vec<ValidationError>> {
    match value {
        Some(RawValue::Text(reference)) => Ok(ProfileImage::Reference(reference.clone())),
        None => Err(vec![violation("required", "Image is required")]),
        Some(RawValue::File(file)) => {
            let failures: Vec<ValidationError> = [image_content_type(file), image_size(file)]
                .into_iter()
                .filter_map(Result::err)
                .collect();

            if failures.is_empty() {
                Ok(ProfileImage::Upload(file.clone()))
            } else {
                Err(failures)
            }
        }
    }
}

// ───── Record Validator ─────────────────────────────────────────────

fn record<T>(errors: &mut ValidationErrors, field: ProfileField, result: Result<T, ValidationError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            errors.add(field.as_str(), e);
            None
        }
    }
}

fn text_with_min(raw: &RawProfileInput, field: ProfileField, min: usize) -> Result<String, ValidationError> {
    let text = required_text(field, raw.field(field))?;
    min_trimmed_length(field, text, min)
}

/// Validates a raw form snapshot into a [`Profile`].
///
/// Every field is checked; the error report lists all failing fields with
/// all of their messages. Keys outside [`ProfileField::ALL`] are ignored.
pub fn validate_profile(raw: &RawProfileInput) -> Result<Profile, FieldErrors> {
    let mut errors = ValidationErrors::new();

    let mut required = |field: ProfileField, min: usize| {
        let result = text_with_min(raw, field, min);
        record(&mut errors, field, result)
    };
    let id = required(ProfileField::Id, 3);
    let name = required(ProfileField::Name, 3);
    let role = required(ProfileField::Role, 3);
    let bio = required(ProfileField::Bio, 3);
    let street_address = required(ProfileField::StreetAddress, 1);
    let city = required(ProfileField::City, 1);
    let state = required(ProfileField::State, 1);
    let zip_code = required(ProfileField::ZipCode, 5);
    let country = required(ProfileField::Country, 1);

    let mut optional = |field: ProfileField, trim: bool| {
        let result = optional_text(field, raw.field(field), trim);
        record(&mut errors, field, result)
    };
    let linkedin = optional(ProfileField::Linkedin, true);
    let twitter = optional(ProfileField::Twitter, true);
    let facebook = optional(ProfileField::Facebook, true);
    let apartment = optional(ProfileField::Apartment, false);

    let image = match validate_image(raw.field(ProfileField::Image)) {
        Ok(image) => Some(image),
        Err(failures) => {
            for e in failures {
                errors.add(ProfileField::Image.as_str(), e);
            }
            None
        }
    };

    let draft = ProfileDraft {
        id,
        name,
        role,
        image,
        bio,
        linkedin,
        twitter,
        facebook,
        street_address,
        apartment,
        city,
        state,
        zip_code,
        country,
    };

    // A missing draft value always has a matching entry in `errors`.
    match draft.build() {
        Some(profile) if errors.is_empty() => Ok(profile),
        _ => Err(errors.into()),
    }
}

struct ProfileDraft {
    id: Option<String>,
    name: Option<String>,
    role: Option<String>,
    image: Option<ProfileImage>,
    bio: Option<String>,
    linkedin: Option<Option<String>>,
    twitter: Option<Option<String>>,
    facebook: Option<Option<String>>,
    street_address: Option<String>,
    apartment: Option<Option<String>>,
    city: Option<String>,
    state: Option<String>,
    zip_code: Option<String>,
    country: Option<String>,
}

impl ProfileDraft {
    fn build(self) -> Option<Profile> {
        Some(Profile {
            id: self.id?,
            name: self.name?,
            role: self.role?,
            image: self.image?,
            bio: self.bio?,
            linkedin: self.linkedin?,
            twitter: self.twitter?,
            facebook: self.facebook?,
            street_address: self.street_address?,
            apartment: self.apartment?,
            city: self.city?,
            state: self.state?,
            zip_code: self.zip_code?,
            country: self.country?,
        })
    }
}
