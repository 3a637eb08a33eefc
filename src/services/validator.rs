//! Field-level validation of occurrence input.
//!
//! Every rule is checked independently so one submission can surface several
//! problems at once. Validation never panics and never stops at the first
//! error; the availability rule only fires once the start period and the
//! length are individually valid.

use crate::api::{
    CreateClassRequest, FieldError, FieldErrorKind, FormReport, NewOccurrence, OccurrenceErrors,
    OccurrenceField, TimetableStructure,
};
use crate::models::PeriodSequence;
use crate::services::editor::DraftOccurrence;

/// Validate one form draft with possibly absent or textual fields.
pub fn validate_draft(
    draft: &DraftOccurrence,
    structure: &TimetableStructure,
    sequence: &PeriodSequence,
) -> Vec<FieldError> {
    let mut errors = Vec::new();

    match draft.day_id {
        None => errors.push(FieldError::new(
            OccurrenceField::Day,
            FieldErrorKind::Required,
        )),
        Some(day_id) => {
            if structure.day(day_id).is_none() {
                errors.push(FieldError::new(
                    OccurrenceField::Day,
                    FieldErrorKind::UnknownDay,
                ));
            }
        }
    }

    let start_index = match draft.start_period_id {
        None => {
            errors.push(FieldError::new(
                OccurrenceField::StartPeriod,
                FieldErrorKind::Required,
            ));
            None
        }
        Some(period_id) => {
            let index = sequence.index_of(period_id);
            if index.is_none() {
                errors.push(FieldError::new(
                    OccurrenceField::StartPeriod,
                    FieldErrorKind::UnknownPeriod,
                ));
            }
            index
        }
    };

    let length = match parse_length(&draft.length_input) {
        Ok(length) => Some(length),
        Err(kind) => {
            errors.push(FieldError::new(OccurrenceField::Length, kind));
            None
        }
    };

    if let (Some(start_index), Some(length)) = (start_index, length) {
        push_availability_error(&mut errors, start_index, length, sequence);
    }

    errors
}

/// Validate one typed occurrence from a create request.
pub fn validate_new_occurrence(
    occurrence: &NewOccurrence,
    structure: &TimetableStructure,
    sequence: &PeriodSequence,
) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if structure.day(occurrence.day_id).is_none() {
        errors.push(FieldError::new(
            OccurrenceField::Day,
            FieldErrorKind::UnknownDay,
        ));
    }

    let start_index = sequence.index_of(occurrence.start_period_id);
    if start_index.is_none() {
        errors.push(FieldError::new(
            OccurrenceField::StartPeriod,
            FieldErrorKind::UnknownPeriod,
        ));
    }

    if occurrence.length < 1 {
        errors.push(FieldError::new(
            OccurrenceField::Length,
            FieldErrorKind::MustBePositive,
        ));
    } else if let Some(start_index) = start_index {
        push_availability_error(&mut errors, start_index, occurrence.length, sequence);
    }

    errors
}

/// Validate a whole create request.
///
/// Field errors are keyed by the occurrence's position in the batch. The
/// request carries typed ids, so the course selection cannot be missing
/// here; catalog existence is the store's concern.
pub fn validate_create_request(
    request: &CreateClassRequest,
    structure: &TimetableStructure,
    sequence: &PeriodSequence,
) -> FormReport {
    let mut report = FormReport {
        no_occurrences: request.occurrences.is_empty(),
        ..Default::default()
    };

    for (position, occurrence) in request.occurrences.iter().enumerate() {
        let errors = validate_new_occurrence(occurrence, structure, sequence);
        if !errors.is_empty() {
            report.occurrence_errors.push(OccurrenceErrors {
                occurrence: position as u64,
                errors,
            });
        }
    }

    report
}

/// Parse a textual length as a positive period count.
pub(crate) fn parse_length(raw: &str) -> Result<u32, FieldErrorKind> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldErrorKind::Required);
    }
    let value: i64 = trimmed.parse().map_err(|_| FieldErrorKind::MustBeNumber)?;
    if value < 1 {
        return Err(FieldErrorKind::MustBePositive);
    }
    // Clamp absurd lengths; they fail the availability check anyway.
    Ok(value.min(u32::MAX as i64) as u32)
}

fn push_availability_error(
    errors: &mut Vec<FieldError>,
    start_index: usize,
    length: u32,
    sequence: &PeriodSequence,
) {
    // start_index came from the sequence, so this cannot underflow.
    let available = sequence.len() - start_index;
    if length as usize > available {
        errors.push(FieldError::new(
            OccurrenceField::Length,
            FieldErrorKind::ExceedsAvailablePeriods {
                available: available as u32,
            },
        ));
    }
}
