use std::collections::BTreeMap;

use serde::Serialize;
use validator::ValidationErrors;

use crate::entities::profile::{ProfileField, RawProfileInput};

pub const ACCEPTED_MESSAGE: &str = "Profile saved successfully!";
pub const REJECTED_MESSAGE: &str = "Please fix the errors in the form";

// ───── Field Errors ─────────────────────────────────────────────────

/// Field name → ordered violation messages. Fields that passed have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn get(&self, field: ProfileField) -> Option<&[String]> {
        self.0.get(field.as_str()).map(Vec::as_slice)
    }

    pub fn contains(&self, field: ProfileField) -> bool {
        self.0.contains_key(field.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with at least one violation.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.0.iter()
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut field_errors = FieldErrors::new();
        for (field, errors) in errors.field_errors() {
            for e in errors.iter() {
                let message = e
                    .message
                    .as_ref()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "Invalid value".to_string());
                field_errors.push(field.to_string(), message);
            }
        }
        field_errors
    }
}

// ───── Outcome ──────────────────────────────────────────────────────

/// Result of one submission round-trip.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Accepted {
        message: String,
    },
    Rejected {
        message: String,
        field_errors: FieldErrors,
        original_raw: RawProfileInput,
    },
    Errored {
        message: String,
    },
}

impl SubmissionOutcome {
    pub fn accepted() -> Self {
        SubmissionOutcome::Accepted {
            message: ACCEPTED_MESSAGE.to_string(),
        }
    }

    pub fn rejected(field_errors: FieldErrors, original_raw: RawProfileInput) -> Self {
        SubmissionOutcome::Rejected {
            message: REJECTED_MESSAGE.to_string(),
            field_errors,
            original_raw,
        }
    }

    pub fn errored(detail: impl std::fmt::Display) -> Self {
        SubmissionOutcome::Errored {
            message: format!("Profile submission error: {}", detail),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            SubmissionOutcome::Accepted { message }
            | SubmissionOutcome::Rejected { message, .. }
            | SubmissionOutcome::Errored { message } => message,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionOutcome::Accepted { .. })
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SubmissionOutcome::Accepted { .. } => "accepted",
            SubmissionOutcome::Rejected { .. } => "rejected",
            SubmissionOutcome::Errored { .. } => "errored",
        }
    }
}

// ───── API Response Model ───────────────────────────────────────────

/// JSON body returned to the form after a submission.
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inputs: Option<RawProfileInput>,
}

impl From<SubmissionOutcome> for SubmissionResponse {
    fn from(outcome: SubmissionOutcome) -> Self {
        match outcome {
            SubmissionOutcome::Accepted { message } => SubmissionResponse {
                success: true,
                message,
                errors: None,
                inputs: None,
            },
            SubmissionOutcome::Rejected { message, field_errors, original_raw } => SubmissionResponse {
                success: false,
                message,
                errors: Some(field_errors),
                inputs: Some(original_raw),
            },
            SubmissionOutcome::Errored { message } => SubmissionResponse {
                success: false,
                message,
                errors: None,
                inputs: None,
            },
        }
    }
}
