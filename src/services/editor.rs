//! Class form editing session.
//!
//! A `ClassEditor` owns the transient state of one "create class" form:
//! the structure snapshot it edits against, the course and teacher
//! selections, a keyed list of draft occurrences, and the validation state
//! of the last check. Submission turns a clean form into a
//! [`CreateClassRequest`] batch and ends the session.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use crate::api::{
    CourseId, CreateClassRequest, DayId, FieldError, FormReport, NewOccurrence, OccurrenceErrors,
    PeriodId, ResolvedSpan, TeacherId, TimetableId, TimetableStructure,
};
use crate::models::PeriodSequence;
use crate::services::resolver;
use crate::services::snapshot::{LoadTicket, SnapshotSlot};
use crate::services::validator;

/// Form-local key for one draft occurrence.
///
/// Keys come from the session's counter and are never reused, not even
/// after the draft is removed or the form is reset. They are unrelated to
/// persisted occurrence ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DraftKey(u64);

impl DraftKey {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for DraftKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One occurrence being edited.
///
/// Selections stay explicitly unset until the user picks them, and the
/// length is kept as the raw text from the form so "empty", "not a number"
/// and "not positive" stay distinguishable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftOccurrence {
    pub day_id: Option<DayId>,
    pub start_period_id: Option<PeriodId>,
    pub length_input: String,
}

/// Structure snapshot paired with its sorted period sequence.
#[derive(Debug, Clone)]
pub struct TimetableSnapshot {
    pub structure: TimetableStructure,
    pub sequence: PeriodSequence,
}

impl TimetableSnapshot {
    pub fn new(structure: TimetableStructure) -> Self {
        let sequence = PeriodSequence::from_structure(&structure);
        Self {
            structure,
            sequence,
        }
    }
}

/// Errors from editing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EditorError {
    /// The operation needs a structure snapshot and none is installed.
    #[error("no timetable structure is loaded")]
    StructureNotLoaded,
    /// The draft key does not belong to this session.
    #[error("unknown draft occurrence {0}")]
    UnknownDraft(DraftKey),
}

/// Reasons a submission is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("no timetable structure is loaded")]
    StructureNotLoaded,
    /// The form has validation errors; the report carries them.
    #[error("the form has validation errors")]
    Invalid(FormReport),
}

/// Editing session for one class form.
///
/// Drafts keep their creation order. Validation state from the last
/// [`validate`] call is stored per draft key and removed together with its
/// draft.
///
/// [`validate`]: Self::validate
pub struct ClassEditor {
    timetable_id: TimetableId,
    snapshot: SnapshotSlot<TimetableSnapshot>,
    course_id: Option<CourseId>,
    teacher_id: Option<TeacherId>,
    drafts: Vec<(DraftKey, DraftOccurrence)>,
    errors: HashMap<DraftKey, Vec<FieldError>>,
    next_key: u64,
}

impl ClassEditor {
    /// Start an empty session for a timetable. No structure is loaded yet.
    pub fn new(timetable_id: TimetableId) -> Self {
        Self {
            timetable_id,
            snapshot: SnapshotSlot::new(),
            course_id: None,
            teacher_id: None,
            drafts: Vec::new(),
            errors: HashMap::new(),
            next_key: 0,
        }
    }

    pub fn timetable_id(&self) -> TimetableId {
        self.timetable_id
    }

    /// Stamp a structure retrieval. A later `begin_structure_load`
    /// supersedes this ticket.
    pub fn begin_structure_load(&self) -> LoadTicket {
        self.snapshot.begin()
    }

    /// Install a retrieved structure together with its derived sequence.
    ///
    /// Returns `false` when the ticket was superseded; the structure is
    /// then discarded and the session keeps whatever it had.
    pub fn install_structure(&self, ticket: LoadTicket, structure: TimetableStructure) -> bool {
        self.snapshot.install(ticket, TimetableSnapshot::new(structure))
    }

    pub fn structure_loaded(&self) -> bool {
        self.snapshot.get().is_some()
    }

    /// The installed snapshot, shared.
    pub fn snapshot(&self) -> Option<Arc<TimetableSnapshot>> {
        self.snapshot.get()
    }

    pub fn set_course(&mut self, course: Option<CourseId>) {
        self.course_id = course;
    }

    pub fn set_teacher(&mut self, teacher: Option<TeacherId>) {
        self.teacher_id = teacher;
    }

    pub fn course(&self) -> Option<CourseId> {
        self.course_id
    }

    pub fn teacher(&self) -> Option<TeacherId> {
        self.teacher_id
    }

    /// Append an empty draft and return its key.
    pub fn add_occurrence(&mut self) -> DraftKey {
        let key = DraftKey(self.next_key);
        self.next_key += 1;
        self.drafts.push((key, DraftOccurrence::default()));
        key
    }

    /// Draft for a key, if it still exists.
    pub fn draft(&self, key: DraftKey) -> Option<&DraftOccurrence> {
        self.drafts
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, draft)| draft)
    }

    /// All drafts in creation order.
    pub fn drafts(&self) -> impl Iterator<Item = (DraftKey, &DraftOccurrence)> {
        self.drafts.iter().map(|(key, draft)| (*key, draft))
    }

    pub fn set_day(&mut self, key: DraftKey, day: Option<DayId>) -> Result<(), EditorError> {
        self.draft_mut(key)?.day_id = day;
        Ok(())
    }

    pub fn set_start_period(
        &mut self,
        key: DraftKey,
        period: Option<PeriodId>,
    ) -> Result<(), EditorError> {
        self.draft_mut(key)?.start_period_id = period;
        Ok(())
    }

    pub fn set_length_input(
        &mut self,
        key: DraftKey,
        raw: impl Into<String>,
    ) -> Result<(), EditorError> {
        self.draft_mut(key)?.length_input = raw.into();
        Ok(())
    }

    /// Remove a draft and its validation state together.
    pub fn remove_occurrence(&mut self, key: DraftKey) -> Result<(), EditorError> {
        let position = self
            .drafts
            .iter()
            .position(|(k, _)| *k == key)
            .ok_or(EditorError::UnknownDraft(key))?;
        self.drafts.remove(position);
        self.errors.remove(&key);
        Ok(())
    }

    /// Resolved span of a draft for display.
    ///
    /// `None` while the start period is unset or unknown. An unreadable
    /// length previews as a single period; overflow comes back as the
    /// degraded start-only span.
    pub fn preview(&self, key: DraftKey) -> Result<Option<ResolvedSpan>, EditorError> {
        let snapshot = self.snapshot.get().ok_or(EditorError::StructureNotLoaded)?;
        let draft = self.draft(key).ok_or(EditorError::UnknownDraft(key))?;

        let Some(start_period_id) = draft.start_period_id else {
            return Ok(None);
        };
        let length = validator::parse_length(&draft.length_input).unwrap_or(1);
        Ok(resolver::resolve_span(start_period_id, length, &snapshot.sequence).ok())
    }

    /// Validate the whole form and store per-draft errors.
    ///
    /// The report keys occurrence errors by draft key. Drafts that pass
    /// cleanly do not appear in it.
    pub fn validate(&mut self) -> Result<FormReport, EditorError> {
        let snapshot = self.snapshot.get().ok_or(EditorError::StructureNotLoaded)?;

        self.errors.clear();
        let mut report = FormReport {
            missing_course: self.course_id.is_none(),
            no_occurrences: self.drafts.is_empty(),
            ..Default::default()
        };

        for (key, draft) in &self.drafts {
            let errors = validator::validate_draft(draft, &snapshot.structure, &snapshot.sequence);
            if !errors.is_empty() {
                report.occurrence_errors.push(OccurrenceErrors {
                    occurrence: key.value(),
                    errors: errors.clone(),
                });
                self.errors.insert(*key, errors);
            }
        }

        Ok(report)
    }

    /// Stored field errors for a draft from the last `validate` call.
    pub fn field_errors(&self, key: DraftKey) -> &[FieldError] {
        self.errors.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Submit the form as an atomic class creation batch.
    ///
    /// Runs a full validation first and refuses on any error. On success
    /// the drafts are turned into id-less occurrence payloads in creation
    /// order and the form is cleared; the structure snapshot stays.
    pub fn submit(&mut self) -> Result<CreateClassRequest, SubmitError> {
        let report = match self.validate() {
            Ok(report) => report,
            Err(_) => return Err(SubmitError::StructureNotLoaded),
        };
        if !report.is_valid() {
            return Err(SubmitError::Invalid(report));
        }

        let Some(course_id) = self.course_id else {
            return Err(SubmitError::Invalid(report));
        };

        let mut occurrences = Vec::with_capacity(self.drafts.len());
        for (_, draft) in &self.drafts {
            let (Some(day_id), Some(start_period_id)) = (draft.day_id, draft.start_period_id)
            else {
                return Err(SubmitError::Invalid(report.clone()));
            };
            let length = match validator::parse_length(&draft.length_input) {
                Ok(length) => length,
                Err(_) => return Err(SubmitError::Invalid(report.clone())),
            };
            occurrences.push(NewOccurrence {
                day_id,
                start_period_id,
                length,
            });
        }

        let request = CreateClassRequest {
            timetable_id: self.timetable_id,
            course_id,
            teacher_id: self.teacher_id,
            occurrences,
        };
        self.reset_form();
        Ok(request)
    }

    /// Clear selections, drafts and validation state.
    ///
    /// The structure snapshot and the key counter survive, so a reset form
    /// keeps editing against the same structure and never hands out an old
    /// key again.
    pub fn reset_form(&mut self) {
        self.course_id = None;
        self.teacher_id = None;
        self.drafts.clear();
        self.errors.clear();
    }

    fn draft_mut(&mut self, key: DraftKey) -> Result<&mut DraftOccurrence, EditorError> {
        self.drafts
            .iter_mut()
            .find(|(k, _)| *k == key)
            .map(|(_, draft)| draft)
            .ok_or(EditorError::UnknownDraft(key))
    }
}
