mod test_profile;

use profile_form_backend::{
    constants::MAX_IMAGE_BYTES,
    entities::profile::{ProfileField, ProfileImage, RawProfileInput, RawValue},
    validation::{validate_profile, IMAGE_TOO_LARGE, INVALID_IMAGE_TYPE},
};
use test_profile::*;

fn messages(raw: &RawProfileInput, field: ProfileField) -> Vec<String> {
    let errors = validate_profile(raw).expect_err("expected validation to fail");
    errors.get(field).map(<[String]>::to_vec).unwrap_or_default()
}

#[test]
fn accepts_valid_submission() {
    let profile = validate_profile(&valid_raw()).expect("valid raw input");

    assert_eq!(profile.id, "user123");
    assert_eq!(profile.name, "Jane Smith");
    assert_eq!(profile.image, ProfileImage::Reference("https://example.com/a.png".into()));
    assert_eq!(profile.linkedin.as_deref(), Some(""));
    assert_eq!(profile.apartment, None);
}

#[test]
fn whitespace_only_fails_every_min_length_field() {
    let cases = [
        (ProfileField::Id, "ID is required"),
        (ProfileField::Name, "Name is required"),
        (ProfileField::Role, "Role is required"),
        (ProfileField::Bio, "Bio is required"),
        (ProfileField::StreetAddress, "Street address is required"),
        (ProfileField::City, "City is required"),
        (ProfileField::State, "State is required"),
        (ProfileField::ZipCode, "ZIP code is required"),
        (ProfileField::Country, "Country is required"),
    ];

    for blank in ["", " ", "\t", "      ", " \n \t  "] {
        for (field, expected) in cases {
            let raw = raw_with(field.as_str(), blank);
            assert_eq!(
                messages(&raw, field),
                vec![expected.to_string()],
                "field {} with {:?}",
                field,
                blank
            );
        }
    }
}

#[test]
fn missing_required_field_is_reported() {
    let raw = raw_without("country");

    assert_eq!(messages(&raw, ProfileField::Country), vec!["Country is required"]);
}

#[test]
fn short_values_report_minimum_length() {
    assert_eq!(
        messages(&raw_with("id", "ab"), ProfileField::Id),
        vec!["ID must be at least 3 characters"]
    );
    assert_eq!(
        messages(&raw_with("name", "  Jo  "), ProfileField::Name),
        vec!["Name must be at least 3 characters"]
    );
    assert_eq!(
        messages(&raw_with("zipCode", "940"), ProfileField::ZipCode),
        vec!["ZIP code must be at least 5 characters"]
    );
}

#[test]
fn length_counts_characters_not_bytes() {
    let profile = validate_profile(&raw_with("name", "Zoë")).expect("three characters");
    assert_eq!(profile.name, "Zoë");

    assert_eq!(
        messages(&raw_with("name", "éé"), ProfileField::Name),
        vec!["Name must be at least 3 characters"]
    );
}

#[test]
fn accepted_strings_are_trimmed() {
    let raw = valid_raw()
        .with("name", "  Jane Smith  ")
        .with("zipCode", " 94105 ")
        .with("twitter", "  @jane  ");

    let profile = validate_profile(&raw).unwrap();

    assert_eq!(profile.name, "Jane Smith");
    assert_eq!(profile.zip_code, "94105");
    assert_eq!(profile.twitter.as_deref(), Some("@jane"));
}

#[test]
fn optional_fields_accept_empty_and_absent() {
    for field in ["apartment", "linkedin", "twitter", "facebook"] {
        assert!(validate_profile(&raw_with(field, "")).is_ok(), "{} empty", field);
        assert!(validate_profile(&raw_without(field)).is_ok(), "{} absent", field);
    }
}

#[test]
fn apartment_is_kept_verbatim() {
    let profile = validate_profile(&raw_with("apartment", "  Apt 4B ")).unwrap();

    assert_eq!(profile.apartment.as_deref(), Some("  Apt 4B "));
}

#[test]
fn file_in_text_field_is_rejected() {
    let raw = raw_with("name", upload("image/png", 10));

    assert_eq!(messages(&raw, ProfileField::Name), vec!["Name must be text"]);
}

#[test]
fn image_reference_is_accepted_regardless_of_content() {
    for reference in ["https://example.com/a.png", "not a url", "   ", "/relative/path.jpg"] {
        let profile = validate_profile(&raw_with("image", reference)).expect(reference);
        assert_eq!(profile.image, ProfileImage::Reference(reference.to_string()));
    }
}

#[test]
fn missing_image_is_required() {
    let raw = raw_without("image");

    assert_eq!(messages(&raw, ProfileField::Image), vec!["Image is required"]);
}

#[test]
fn non_image_upload_fails_only_type_check() {
    let raw = raw_with("image", upload("text/plain", 1024));

    assert_eq!(messages(&raw, ProfileField::Image), vec![INVALID_IMAGE_TYPE]);
}

#[test]
fn oversized_image_fails_only_size_check() {
    let raw = raw_with("image", upload("image/png", oversized()));

    assert_eq!(messages(&raw, ProfileField::Image), vec![IMAGE_TOO_LARGE]);
}

#[test]
fn oversized_non_image_reports_both_violations() {
    let raw = raw_with("image", upload("text/plain", oversized()));

    assert_eq!(
        messages(&raw, ProfileField::Image),
        vec![INVALID_IMAGE_TYPE, IMAGE_TOO_LARGE]
    );
}

#[test]
fn upload_at_exact_limit_is_accepted() {
    let file = upload("image/jpeg", MAX_IMAGE_BYTES);
    let profile = validate_profile(&raw_with("image", file.clone())).unwrap();

    assert_eq!(profile.image, ProfileImage::Upload(file));
}

#[test]
fn reports_every_failing_field_and_nothing_else() {
    let raw = valid_raw()
        .with("city", "")
        .with("zipCode", "940")
        .with("image", upload("text/plain", oversized()));

    let errors = validate_profile(&raw).unwrap_err();

    assert_eq!(errors.len(), 3);
    assert_eq!(errors.get(ProfileField::City).unwrap(), ["City is required"]);
    assert_eq!(
        errors.get(ProfileField::ZipCode).unwrap(),
        ["ZIP code must be at least 5 characters"]
    );
    assert_eq!(errors.get(ProfileField::Image).unwrap().len(), 2);
    assert!(!errors.contains(ProfileField::Name));
}

#[test]
fn unknown_keys_are_ignored() {
    let raw = valid_raw()
        .with("$ACTION_ID_abc", "")
        .with("favouriteColour", "teal");

    assert!(validate_profile(&raw).is_ok());
}

#[test]
fn empty_input_reports_all_required_fields() {
    let errors = validate_profile(&RawProfileInput::new()).unwrap_err();

    let expected = [
        ProfileField::Id,
        ProfileField::Name,
        ProfileField::Role,
        ProfileField::Image,
        ProfileField::Bio,
        ProfileField::StreetAddress,
        ProfileField::City,
        ProfileField::State,
        ProfileField::ZipCode,
        ProfileField::Country,
    ];
    assert_eq!(errors.len(), expected.len());
    for field in expected {
        assert!(errors.contains(field), "{} missing from report", field);
    }
}

#[test]
fn validated_profile_round_trips_through_raw_form() {
    let raw = valid_raw()
        .with("name", " Jane Smith ")
        .with("apartment", "Apt 4B")
        .with("linkedin", " https://linkedin.com/in/janesmith ");

    let first = validate_profile(&raw).unwrap();
    let rebuilt = first.to_raw();
    let second = validate_profile(&rebuilt).unwrap();

    assert_eq!(first, second);
    assert_eq!(rebuilt.text("name"), Some("Jane Smith"));
    assert_eq!(rebuilt.text("linkedin"), Some("https://linkedin.com/in/janesmith"));
    assert_eq!(rebuilt.get("image"), Some(&RawValue::Text("https://example.com/a.png".into())));
}

#[test]
fn upload_round_trips_as_file() {
    let file = upload("image/webp", 2048);
    let profile = validate_profile(&raw_with("image", file.clone())).unwrap();

    assert_eq!(profile.to_raw().get("image"), Some(&RawValue::File(file)));
}
