//! Canonical ordering of periods within the school day.
//!
//! Span resolution, availability math and grid rows all run over one shared
//! ordering of a structure's periods. The sequence is derived from the
//! structure and memoized by structure version in [`SequenceCache`].

use log::debug;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use super::structure::StructureVersion;
use crate::api::{Period, PeriodId, TimetableId, TimetableStructure};

/// Periods of one structure, sorted chronologically by start time.
///
/// Ties on start time are broken by ascending period id, so the ordering is
/// total and reproducible regardless of the order periods were supplied in.
#[derive(Debug, Clone)]
pub struct PeriodSequence {
    periods: Vec<Period>,
    index: HashMap<PeriodId, usize>,
}

impl PeriodSequence {
    /// Build the sequence for a structure.
    pub fn from_structure(structure: &TimetableStructure) -> Self {
        let mut periods = structure.periods.clone();
        periods.sort_by_key(|p| (p.start, p.id));

        let mut index = HashMap::with_capacity(periods.len());
        for (position, period) in periods.iter().enumerate() {
            index.entry(period.id).or_insert(position);
        }

        Self { periods, index }
    }

    /// Position of a period within the day, `None` for unknown ids.
    pub fn index_of(&self, id: PeriodId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Period at a position, `None` past the end of the day.
    pub fn period_at(&self, index: usize) -> Option<&Period> {
        self.periods.get(index)
    }

    /// Number of periods in the day.
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Periods in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = &Period> {
        self.periods.iter()
    }

    /// Periods in chronological order as a slice.
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }
}

struct CachedSequence {
    version: StructureVersion,
    sequence: Arc<PeriodSequence>,
}

/// Cache of period sequences keyed by timetable id and structure version.
///
/// Repeated lookups against an unchanged structure share one `Arc`; a
/// replaced structure gets a fresh sequence on its next lookup.
pub struct SequenceCache {
    inner: RwLock<HashMap<TimetableId, CachedSequence>>,
}

impl SequenceCache {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Sequence for a structure, rebuilding it when the version changed.
    pub fn sequence_for(&self, structure: &TimetableStructure) -> Arc<PeriodSequence> {
        let version = structure.version();

        {
            let cache = self.inner.read();
            if let Some(cached) = cache.get(&structure.id) {
                if cached.version == version {
                    return Arc::clone(&cached.sequence);
                }
            }
        }

        debug!(
            "Rebuilding period sequence for timetable {} (version {})",
            structure.id, version
        );
        let sequence = Arc::new(PeriodSequence::from_structure(structure));
        let mut cache = self.inner.write();
        cache.insert(
            structure.id,
            CachedSequence {
                version,
                sequence: Arc::clone(&sequence),
            },
        );
        sequence
    }

    /// Drop the cached sequence for a timetable.
    pub fn invalidate(&self, id: TimetableId) {
        self.inner.write().remove(&id);
    }

    /// Number of timetables with a cached sequence.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

impl Default for SequenceCache {
    fn default() -> Self {
        Self::new()
    }
}
