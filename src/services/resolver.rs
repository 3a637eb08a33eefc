//! Span resolution: mapping an occurrence onto wall-clock time.
//!
//! Resolution is total for any start period present in the sequence. An
//! occurrence that fits yields its contiguous time range; one that runs past
//! the end of the day yields an overflow value carrying the availability
//! numbers. Only an unknown start period is an error.

use crate::api::{Occurrence, PeriodId, ResolvedSpan, TimeRange};
use crate::models::PeriodSequence;

/// Error returned when a span cannot be resolved at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The start period is not part of the sequence.
    #[error("unknown period {0}")]
    UnknownPeriod(PeriodId),
}

/// Resolve a span of `length` consecutive periods starting at
/// `start_period_id`.
///
/// Callers validate `length >= 1` before resolving; a zero length is a
/// caller bug and resolves as a single period.
///
/// # Returns
///
/// * `Ok(ResolvedSpan::Fits)` with the covered time range when the span
///   lies inside the day
/// * `Ok(ResolvedSpan::Overflow)` when the span starts at a known period
///   but runs past the last one
/// * `Err(ResolveError::UnknownPeriod)` when the start period is unknown
pub fn resolve_span(
    start_period_id: PeriodId,
    length: u32,
    sequence: &PeriodSequence,
) -> Result<ResolvedSpan, ResolveError> {
    debug_assert!(length >= 1, "span length must be at least 1");
    let span = length.max(1) as usize;

    let start_index = sequence
        .index_of(start_period_id)
        .ok_or(ResolveError::UnknownPeriod(start_period_id))?;
    let periods = sequence.periods();
    let start = match periods.get(start_index) {
        Some(period) => period.start,
        None => return Err(ResolveError::UnknownPeriod(start_period_id)),
    };

    match periods.get(start_index.saturating_add(span - 1)) {
        Some(end_period) => Ok(ResolvedSpan::Fits(TimeRange::new(start, end_period.end))),
        None => {
            // A known start period always has at least itself available.
            let available = (periods.len() - start_index) as u32;
            debug_assert!(available >= 1);
            Ok(ResolvedSpan::Overflow {
                start,
                requested_length: length,
                available_length: available,
            })
        }
    }
}

/// Resolve an occurrence's span against the sequence.
pub fn resolve_occurrence(
    occurrence: &Occurrence,
    sequence: &PeriodSequence,
) -> Result<ResolvedSpan, ResolveError> {
    resolve_span(occurrence.start_period_id, occurrence.length, sequence)
}
