use serde::{Deserialize, Serialize};
use ts_rs::TS;

use lemann_core::observation::SegmentObservation;
use lemann_core::organ::Organ;

/// The two lesion categories graded per segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum LesionType {
    Stricturing,
    Penetrating,
}

/// Severity grade of one lesion category on one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Grade {
    G0,
    G1,
    G2,
    G3,
}

impl Grade {
    /// Map a raw clinician-entered grade to a [`Grade`]. Values outside 1–3
    /// fall back to `G0` rather than erroring.
    pub fn from_raw(raw: u8) -> Grade {
        match raw {
            1 => Grade::G1,
            2 => Grade::G2,
            3 => Grade::G3,
            _ => Grade::G0,
        }
    }

    pub fn as_u8(self) -> u8 {
        match self {
            Grade::G0 => 0,
            Grade::G1 => 1,
            Grade::G2 => 2,
            Grade::G3 => 3,
        }
    }
}

/// Grade one lesion category for a segment observation.
pub fn grade(organ: Organ, lesion: LesionType, obs: &SegmentObservation) -> Grade {
    match lesion {
        LesionType::Stricturing => stricturing_grade(organ, obs),
        LesionType::Penetrating => penetrating_grade(organ, obs),
    }
}

/// Stricturing severity of one segment, per the organ-specific MRI criteria.
pub fn stricturing_grade(organ: Organ, obs: &SegmentObservation) -> Grade {
    match organ {
        Organ::Upper | Organ::SmallBowel => wall_grade(obs, false),
        Organ::ColonRectum => wall_grade(obs, true),
        Organ::Anus => Grade::from_raw(obs.anus_str_grade),
    }
}

/// Shared MRI wall criteria. The colon/rectum rule layers the
/// lumen-reduction thresholds on top; the other organs ignore that field.
fn wall_grade(obs: &SegmentObservation, use_lumen: bool) -> Grade {
    let lumen = if use_lumen { obs.lumen_red_pct } else { 0 };
    if obs.has_pd || lumen > 50 {
        return Grade::G3;
    }
    if obs.thick_mm >= 3.0 || obs.mural_strat || (lumen > 0 && lumen <= 50) {
        return Grade::G2;
    }
    if (obs.thick_mm > 0.0 && obs.thick_mm < 3.0) || obs.seg_enh {
        return Grade::G1;
    }
    Grade::G0
}

/// Penetrating severity of one segment. `has_pen` gates the whole category
/// for the non-anal organs: without it the grade is 0 whatever the other
/// findings say.
pub fn penetrating_grade(organ: Organ, obs: &SegmentObservation) -> Grade {
    if organ == Organ::Anus {
        return Grade::from_raw(obs.anus_pen_mri_grade);
    }
    if !obs.has_pen {
        return Grade::G0;
    }
    if obs.phlegmon || obs.any_fistula {
        return Grade::G3;
    }
    if obs.deep_ulc {
        return Grade::G2;
    }
    // No grade-1 penetrating state exists for these organs; a ticked gate
    // without a qualifying finding floors at 0.
    Grade::G0
}
