use lemann_core::organ::Organ;

use crate::grading::{Grade, LesionType};

/// Fixed per-organ lesion points from the updated index (Pariente et al.,
/// Gastroenterology 2021). Grade 0 never scores; the penetrating grade-1
/// rows are retained from the published table even though the grading rules
/// cannot produce a penetrating grade 1 outside the anus.
pub fn lesion_points(organ: Organ, lesion: LesionType, grade: Grade) -> f64 {
    use Grade::{G0, G1, G2, G3};
    use LesionType::{Penetrating, Stricturing};
    use Organ::{Anus, ColonRectum, SmallBowel, Upper};

    match (organ, lesion, grade) {
        (_, _, G0) => 0.0,

        (Upper, Stricturing, G1) => 0.0,
        (Upper, Stricturing, G2) => 3.5,
        (Upper, Stricturing, G3) => 5.0,
        (Upper, Penetrating, G1) => 1.0,
        (Upper, Penetrating, G2) => 1.5,
        (Upper, Penetrating, G3) => 2.0,

        (SmallBowel, Stricturing, G1) => 0.0,
        (SmallBowel, Stricturing, G2) => 3.0,
        (SmallBowel, Stricturing, G3) => 5.0,
        (SmallBowel, Penetrating, G1) => 0.0,
        (SmallBowel, Penetrating, G2) => 1.5,
        (SmallBowel, Penetrating, G3) => 4.0,

        (ColonRectum, Stricturing, G1) => 0.5,
        (ColonRectum, Stricturing, G2) => 2.0,
        (ColonRectum, Stricturing, G3) => 5.0,
        (ColonRectum, Penetrating, G1) => 1.0,
        (ColonRectum, Penetrating, G2) => 2.5,
        (ColonRectum, Penetrating, G3) => 4.5,

        (Anus, Stricturing, G1) => 0.0,
        (Anus, Stricturing, G2) => 2.0,
        (Anus, Stricturing, G3) => 3.5,
        (Anus, Penetrating, G1) => 0.0,
        (Anus, Penetrating, G2) => 2.5,
        (Anus, Penetrating, G3) => 3.0,
    }
}
