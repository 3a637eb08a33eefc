use serde::{Deserialize, Serialize};

/// Occurrence form field an error is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OccurrenceField {
    Day,
    StartPeriod,
    Length,
}

/// Why a field value was rejected.
///
/// Kinds are values, not strings: callers match on them to pick per-field
/// messages and the payloads carry what the message needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum FieldErrorKind {
    /// The field has no value
    Required,
    /// The value is not an integer
    MustBeNumber,
    /// The value is an integer but not at least 1
    MustBePositive,
    /// The referenced day does not exist in the structure
    UnknownDay,
    /// The referenced period does not exist in the structure
    UnknownPeriod,
    /// The occurrence would run past the last period of the day
    ExceedsAvailablePeriods { available: u32 },
}

impl FieldErrorKind {
    /// Human-readable message for form rendering.
    pub fn message(&self) -> String {
        match self {
            FieldErrorKind::Required => "This field is required".to_string(),
            FieldErrorKind::MustBeNumber => "Must be a number".to_string(),
            FieldErrorKind::MustBePositive => "Must be a positive number".to_string(),
            FieldErrorKind::UnknownDay => "Unknown day".to_string(),
            FieldErrorKind::UnknownPeriod => "Unknown period".to_string(),
            FieldErrorKind::ExceedsAvailablePeriods { available } => {
                format!("Only {} consecutive periods available here", available)
            }
        }
    }
}

/// A single rejected field on one occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: OccurrenceField,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn new(field: OccurrenceField, kind: FieldErrorKind) -> Self {
        Self { field, kind }
    }
}

/// Errors attached to one occurrence of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccurrenceErrors {
    /// Draft key for form sessions, array index for create requests
    pub occurrence: u64,
    pub errors: Vec<FieldError>,
}

/// Whole-form validation outcome for a class submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormReport {
    /// No course was selected
    pub missing_course: bool,
    /// The batch contains no occurrences
    pub no_occurrences: bool,
    /// Per-occurrence errors; only occurrences with at least one error appear
    pub occurrence_errors: Vec<OccurrenceErrors>,
}

impl FormReport {
    /// A submission is accepted only when nothing was flagged.
    pub fn is_valid(&self) -> bool {
        !self.missing_course && !self.no_occurrences && self.occurrence_errors.is_empty()
    }
}

pub const VALIDATE_CLASS_FORM: &str = "validate_class_form";
