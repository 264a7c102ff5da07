use serde::{Deserialize, Serialize};
use ts_rs::TS;

use lemann_core::observation::SegmentObservation;
use lemann_core::organ::Organ;

use crate::error::IndexError;
use crate::scoring::{OrganScores, global_score, organ_score};

/// The per-session collection of segment observations.
///
/// At most one record exists per (organ, segment) key; [`upsert`] replaces
/// the previous record for its key in place, so display order stays stable
/// across edits. Scores are recomputed from current contents on every call,
/// never cached. Each clinical session owns its own `Registry` value — there
/// is no shared instance.
///
/// [`upsert`]: Registry::upsert
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Registry {
    records: Vec<SegmentObservation>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the record for the observation's (organ, segment)
    /// key. A segment outside the organ's segment list is rejected without
    /// storing anything.
    pub fn upsert(&mut self, record: SegmentObservation) -> Result<(), IndexError> {
        if !record.organ.is_valid_segment(&record.segment) {
            return Err(IndexError::InvalidSegment {
                organ: record.organ,
                segment: record.segment,
            });
        }
        let existing = self
            .records
            .iter_mut()
            .find(|r| r.organ == record.organ && r.segment == record.segment);
        match existing {
            Some(slot) => *slot = record,
            None => self.records.push(record),
        }
        Ok(())
    }

    /// Remove the record for (organ, segment). Returns whether a record was
    /// removed; absence is not an error.
    pub fn remove(&mut self, organ: Organ, segment: &str) -> bool {
        let before = self.records.len();
        self.records
            .retain(|r| !(r.organ == organ && r.segment == segment));
        self.records.len() != before
    }

    /// Current records for one organ, in insertion order.
    pub fn list_by_organ(&self, organ: Organ) -> Vec<&SegmentObservation> {
        self.records.iter().filter(|r| r.organ == organ).collect()
    }

    /// All current records, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &SegmentObservation> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Recompute one organ's normalised score from current contents.
    pub fn organ_score(&self, organ: Organ) -> f64 {
        organ_score(organ, self.list_by_organ(organ))
    }

    /// Recompute all four organ scores from current contents.
    pub fn organ_scores(&self) -> OrganScores {
        let mut scores = OrganScores::default();
        for organ in Organ::ALL {
            scores.set(organ, self.organ_score(organ));
        }
        scores
    }

    /// Recompute the Global Lémann Index from current contents.
    pub fn global_score(&self) -> f64 {
        global_score(&self.organ_scores())
    }
}
