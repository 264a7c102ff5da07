use serde::{Deserialize, Serialize};
use ts_rs::TS;

use lemann_core::observation::SegmentObservation;
use lemann_core::organ::Organ;

use crate::coefficients::lesion_points;
use crate::grading::{Grade, LesionType, penetrating_grade, stricturing_grade};

/// Round to two decimal places, the precision published index values carry.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Points for one segment: resection damage (100% resected = 10 points)
/// plus the graded lesion points. An ungraded lesion contributes nothing.
pub fn segment_score(organ: Organ, obs: &SegmentObservation) -> f64 {
    let mut points = f64::from(obs.resect_pct.min(100)) / 10.0;

    let str_grade = stricturing_grade(organ, obs);
    if str_grade > Grade::G0 {
        points += lesion_points(organ, LesionType::Stricturing, str_grade);
    }
    let pen_grade = penetrating_grade(organ, obs);
    if pen_grade > Grade::G0 {
        points += lesion_points(organ, LesionType::Penetrating, pen_grade);
    }
    points
}

/// Normalised score for one organ: the sum of its segment scores divided by
/// the organ's fixed denominator. Zero when no segments are recorded.
pub fn organ_score<'a, I>(organ: Organ, observations: I) -> f64
where
    I: IntoIterator<Item = &'a SegmentObservation>,
{
    let total: f64 = observations
        .into_iter()
        .map(|obs| segment_score(organ, obs))
        .sum();
    round2(total / organ.denominator())
}

/// One normalised score per organ. All four organs are always present, so
/// the global index can never silently drop a term.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrganScores {
    pub upper: f64,
    pub small_bowel: f64,
    pub colon_rectum: f64,
    pub anus: f64,
}

impl OrganScores {
    pub fn get(&self, organ: Organ) -> f64 {
        match organ {
            Organ::Upper => self.upper,
            Organ::SmallBowel => self.small_bowel,
            Organ::ColonRectum => self.colon_rectum,
            Organ::Anus => self.anus,
        }
    }

    pub fn set(&mut self, organ: Organ, score: f64) {
        match organ {
            Organ::Upper => self.upper = score,
            Organ::SmallBowel => self.small_bowel = score,
            Organ::ColonRectum => self.colon_rectum = score,
            Organ::Anus => self.anus = score,
        }
    }
}

/// The Global Lémann Index: the weighted sum of the four organ scores.
pub fn global_score(scores: &OrganScores) -> f64 {
    let total: f64 = Organ::ALL
        .iter()
        .map(|&organ| organ.global_weight() * scores.get(organ))
        .sum();
    round2(total)
}
