use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::info;
use ts_rs::TS;

use lemann_index::registry::Registry;
use lemann_index::scoring::{OrganScores, global_score};

use crate::error::ExportError;

/// One saved scoring run for a patient: the four normalised organ scores and
/// the Global Lémann Index. Field names follow the result-sheet columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResultRow {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "LI_upper")]
    pub li_upper: f64,
    #[serde(rename = "LI_small_bowel")]
    pub li_small_bowel: f64,
    #[serde(rename = "LI_colon_rectum")]
    pub li_colon_rectum: f64,
    #[serde(rename = "LI_anus")]
    pub li_anus: f64,
    #[serde(rename = "Global_LI")]
    pub global_li: f64,
}

impl ResultRow {
    pub fn from_scores(id: impl Into<String>, scores: &OrganScores) -> Self {
        Self {
            id: id.into(),
            li_upper: scores.upper,
            li_small_bowel: scores.small_bowel,
            li_colon_rectum: scores.colon_rectum,
            li_anus: scores.anus,
            global_li: global_score(scores),
        }
    }

    /// Score a registry's current contents under the given patient ID.
    pub fn from_registry(id: impl Into<String>, registry: &Registry) -> Self {
        Self::from_scores(id, &registry.organ_scores())
    }
}

/// In-memory sheet of saved results, one row per patient.
///
/// Patient IDs are unique case-insensitively: "AB12" and "ab12" name the
/// same patient. Rows keep their save order.
#[derive(Debug, Clone, Default)]
pub struct ResultSheet {
    rows: Vec<ResultRow>,
    seen_ids: HashSet<String>,
}

impl ResultSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row. The ID is trimmed before it is checked; an empty or
    /// already-saved ID is rejected and the sheet is left unchanged.
    pub fn save(&mut self, mut row: ResultRow) -> Result<(), ExportError> {
        let id = row.id.trim().to_string();
        if id.is_empty() {
            return Err(ExportError::EmptyPatientId);
        }
        let key = id.to_lowercase();
        if self.seen_ids.contains(&key) {
            return Err(ExportError::DuplicatePatientId(id));
        }

        info!(patient_id = %id, global_li = row.global_li, "result saved");
        row.id = id;
        self.seen_ids.insert(key);
        self.rows.push(row);
        Ok(())
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Drop all saved rows and forget their IDs.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.seen_ids.clear();
    }
}
