use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::organ::Organ;

/// One clinician-entered record for a single bowel segment (worst lesion).
///
/// Every field has an explicit default, so an observation built by [`new`]
/// scores as an undamaged segment until findings are recorded. The MRI
/// fields apply to the upper tract, small bowel, and colon/rectum; the two
/// grade fields apply to the anus, where damage is graded directly by the
/// clinician rather than derived from sub-findings.
///
/// [`new`]: SegmentObservation::new
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SegmentObservation {
    pub organ: Organ,
    pub segment: String,
    /// Percent of the segment surgically resected (0–100).
    pub resect_pct: u8,
    /// Maximal wall thickness on MRI, in millimetres.
    pub thick_mm: f64,
    /// Segmental enhancement.
    pub seg_enh: bool,
    /// Mural stratification.
    pub mural_strat: bool,
    /// Stricture present.
    pub stricture: bool,
    /// Pre-stenotic dilatation.
    pub has_pd: bool,
    /// Lumen reduction percent (0–100); graded for the colon/rectum only.
    pub lumen_red_pct: u8,
    /// Penetrating lesion present. Gates the whole penetrating category.
    pub has_pen: bool,
    /// Deep / transmural ulceration.
    pub deep_ulc: bool,
    /// Phlegmon or inflammatory mass.
    pub phlegmon: bool,
    /// Any fistula.
    pub any_fistula: bool,
    /// Clinical stricturing grade, anus only (0–3).
    pub anus_str_grade: u8,
    /// MRI penetrating grade, anus only (0–3).
    pub anus_pen_mri_grade: u8,
}

impl SegmentObservation {
    /// An observation with no recorded damage.
    pub fn new(organ: Organ, segment: impl Into<String>) -> Self {
        Self {
            organ,
            segment: segment.into(),
            resect_pct: 0,
            thick_mm: 0.0,
            seg_enh: false,
            mural_strat: false,
            stricture: false,
            has_pd: false,
            lumen_red_pct: 0,
            has_pen: false,
            deep_ulc: false,
            phlegmon: false,
            any_fistula: false,
            anus_str_grade: 0,
            anus_pen_mri_grade: 0,
        }
    }

    /// Build an anus record from the two clinician-supplied grades. The
    /// presence flags derive from the grades and every MRI field stays at
    /// its inert default.
    pub fn anus(str_grade: u8, pen_mri_grade: u8) -> Self {
        let mut obs = Self::new(Organ::Anus, "anus");
        obs.anus_str_grade = str_grade;
        obs.anus_pen_mri_grade = pen_mri_grade;
        obs.stricture = str_grade > 0;
        obs.has_pen = pen_mri_grade > 0;
        obs
    }

    /// Tick the category-presence flags when any sub-finding is recorded,
    /// mirroring the entry form's pre-save inference, so findings are never
    /// left silently ungated. No-op for anus records, whose flags derive
    /// from the grades instead.
    pub fn with_inferred_flags(mut self) -> Self {
        if self.organ != Organ::Anus {
            self.stricture =
                self.stricture || self.thick_mm > 0.0 || self.seg_enh || self.mural_strat;
            self.has_pen = self.has_pen || self.deep_ulc || self.phlegmon || self.any_fistula;
        }
        self
    }

    /// Report numeric fields outside their form bounds, for the entry layer
    /// to surface before saving. Scoring itself never fails on range: the
    /// resection percent is clamped and out-of-range grades are treated as 0.
    pub fn validate(&self) -> Vec<ValidationError> {
        let checks = [
            ("resect_pct", f64::from(self.resect_pct), PCT_RANGE),
            ("thick_mm", self.thick_mm, THICK_RANGE),
            ("lumen_red_pct", f64::from(self.lumen_red_pct), PCT_RANGE),
            ("anus_str_grade", f64::from(self.anus_str_grade), GRADE_RANGE),
            (
                "anus_pen_mri_grade",
                f64::from(self.anus_pen_mri_grade),
                GRADE_RANGE,
            ),
        ];

        let mut errors = Vec::new();
        for (field, value, expected_range) in checks {
            if !expected_range.contains(value) {
                errors.push(ValidationError {
                    field: field.to_string(),
                    value,
                    expected_range,
                    message: format!(
                        "{field}: {value} is outside range [{}, {}]",
                        expected_range.min, expected_range.max,
                    ),
                });
            }
        }
        errors
    }
}

const PCT_RANGE: FieldRange = FieldRange {
    min: 0.0,
    max: 100.0,
};
const THICK_RANGE: FieldRange = FieldRange {
    min: 0.0,
    max: 30.0,
};
const GRADE_RANGE: FieldRange = FieldRange { min: 0.0, max: 3.0 };

/// Valid bounds for a numeric observation field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
}

impl FieldRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub field: String,
    pub value: f64,
    pub expected_range: FieldRange,
    pub message: String,
}
