use lemann_core::observation::SegmentObservation;
use lemann_core::organ::Organ;
use lemann_index::coefficients::lesion_points;
use lemann_index::grading::{Grade, LesionType};
use lemann_index::scoring::{OrganScores, global_score, organ_score, segment_score};

#[test]
fn empty_organ_scores_zero() {
    for organ in Organ::ALL {
        let score = organ_score(organ, std::iter::empty::<&SegmentObservation>());
        assert_eq!(score, 0.0, "{organ:?}");
    }
}

#[test]
fn resection_scores_one_point_per_ten_percent() {
    let mut o = SegmentObservation::new(Organ::SmallBowel, "bin_01");
    o.resect_pct = 100;
    assert_eq!(segment_score(Organ::SmallBowel, &o), 10.0);

    o.resect_pct = 30;
    assert_eq!(segment_score(Organ::SmallBowel, &o), 3.0);
}

#[test]
fn resection_over_hundred_is_clamped() {
    let mut o = SegmentObservation::new(Organ::Upper, "stomach");
    o.resect_pct = 250;
    assert_eq!(segment_score(Organ::Upper, &o), 10.0);
}

#[test]
fn ten_percent_more_resection_adds_exactly_one_point() {
    let mut o = SegmentObservation::new(Organ::ColonRectum, "sigmoid");
    o.thick_mm = 4.0;
    o.has_pen = true;
    o.any_fistula = true;
    for pct in [0u8, 20, 50, 80] {
        o.resect_pct = pct;
        let base = segment_score(Organ::ColonRectum, &o);
        o.resect_pct = pct + 10;
        let bumped = segment_score(Organ::ColonRectum, &o);
        assert!((bumped - base - 1.0).abs() < 1e-9, "at {pct}%");
    }
}

#[test]
fn segment_score_is_non_negative() {
    let mut o = SegmentObservation::new(Organ::Upper, "oesophagus");
    o.thick_mm = -5.0;
    assert!(segment_score(Organ::Upper, &o) >= 0.0);
    assert_eq!(segment_score(Organ::Upper, &o), 0.0);
}

#[test]
fn coefficient_table_matches_published_values() {
    use Grade::{G1, G2, G3};
    use LesionType::{Penetrating, Stricturing};

    let expected = [
        (Organ::Upper, [0.0, 3.5, 5.0], [1.0, 1.5, 2.0]),
        (Organ::SmallBowel, [0.0, 3.0, 5.0], [0.0, 1.5, 4.0]),
        (Organ::ColonRectum, [0.5, 2.0, 5.0], [1.0, 2.5, 4.5]),
        (Organ::Anus, [0.0, 2.0, 3.5], [0.0, 2.5, 3.0]),
    ];
    for (organ, str_points, pen_points) in expected {
        for (grade, want) in [G1, G2, G3].into_iter().zip(str_points) {
            assert_eq!(lesion_points(organ, Stricturing, grade), want, "{organ:?}");
        }
        for (grade, want) in [G1, G2, G3].into_iter().zip(pen_points) {
            assert_eq!(lesion_points(organ, Penetrating, grade), want, "{organ:?}");
        }
    }
}

#[test]
fn grade_zero_contributes_nothing() {
    for organ in Organ::ALL {
        assert_eq!(lesion_points(organ, LesionType::Stricturing, Grade::G0), 0.0);
        assert_eq!(lesion_points(organ, LesionType::Penetrating, Grade::G0), 0.0);
    }
}

#[test]
fn small_bowel_worked_example() {
    // One small-bowel segment, 4 mm wall, nothing else: stricturing grade 2.
    let mut o = SegmentObservation::new(Organ::SmallBowel, "bin_01");
    o.thick_mm = 4.0;
    assert_eq!(segment_score(Organ::SmallBowel, &o), 3.0);
    assert_eq!(organ_score(Organ::SmallBowel, [&o]), 0.15);
}

#[test]
fn anus_worked_example() {
    let o = SegmentObservation::anus(2, 0);
    assert_eq!(segment_score(Organ::Anus, &o), 2.0);
    assert_eq!(organ_score(Organ::Anus, [&o]), 2.0);
}

#[test]
fn global_index_is_the_weighted_sum() {
    let scores = OrganScores {
        upper: 0.0,
        small_bowel: 0.15,
        colon_rectum: 0.0,
        anus: 2.0,
    };
    assert_eq!(global_score(&scores), 5.6);
}

#[test]
fn global_index_of_no_damage_is_zero() {
    assert_eq!(global_score(&OrganScores::default()), 0.0);
}

#[test]
fn single_organ_contributes_its_weight() {
    let mut scores = OrganScores::default();
    scores.set(Organ::Anus, 2.0);
    assert_eq!(global_score(&scores), 5.0);
}

#[test]
fn organ_score_rounds_to_two_decimals() {
    // Colon grade-1 stricturing is 0.5 points; 0.5 / 6 = 0.0833…
    let mut o = SegmentObservation::new(Organ::ColonRectum, "rectum");
    o.thick_mm = 2.0;
    assert_eq!(organ_score(Organ::ColonRectum, [&o]), 0.08);
}

#[test]
fn organ_score_sums_all_segments() {
    let mut caecum = SegmentObservation::new(Organ::ColonRectum, "caecum");
    caecum.thick_mm = 4.0; // grade 2 → 2.0 points
    let mut rectum = SegmentObservation::new(Organ::ColonRectum, "rectum");
    rectum.resect_pct = 60; // 6.0 points
    assert_eq!(organ_score(Organ::ColonRectum, [&caecum, &rectum]), 1.33);
}
