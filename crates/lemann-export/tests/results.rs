use lemann_core::observation::SegmentObservation;
use lemann_core::organ::Organ;
use lemann_export::error::ExportError;
use lemann_export::results::{ResultRow, ResultSheet};
use lemann_index::registry::Registry;
use lemann_index::scoring::OrganScores;

fn row(id: &str) -> ResultRow {
    ResultRow {
        id: id.to_string(),
        li_upper: 0.0,
        li_small_bowel: 0.15,
        li_colon_rectum: 0.0,
        li_anus: 2.0,
        global_li: 5.6,
    }
}

#[test]
fn save_and_read_back() {
    let mut sheet = ResultSheet::new();
    sheet.save(row("p001")).unwrap();
    sheet.save(row("p002")).unwrap();

    assert_eq!(sheet.len(), 2);
    assert_eq!(sheet.rows()[0].id, "p001");
    assert_eq!(sheet.rows()[1].id, "p002");
}

#[test]
fn duplicate_id_rejected_case_insensitively() {
    let mut sheet = ResultSheet::new();
    sheet.save(row("AB12")).unwrap();

    let err = sheet.save(row("ab12")).unwrap_err();
    assert!(matches!(err, ExportError::DuplicatePatientId(_)));
    assert_eq!(sheet.len(), 1);
}

#[test]
fn empty_id_rejected() {
    let mut sheet = ResultSheet::new();
    assert!(matches!(
        sheet.save(row("")),
        Err(ExportError::EmptyPatientId)
    ));
    assert!(matches!(
        sheet.save(row("   ")),
        Err(ExportError::EmptyPatientId)
    ));
    assert!(sheet.is_empty());
}

#[test]
fn id_is_trimmed_before_saving() {
    let mut sheet = ResultSheet::new();
    sheet.save(row("  p003  ")).unwrap();
    assert_eq!(sheet.rows()[0].id, "p003");

    // the trimmed form is what collides
    let err = sheet.save(row("P003")).unwrap_err();
    assert!(matches!(err, ExportError::DuplicatePatientId(_)));
}

#[test]
fn clear_forgets_saved_ids() {
    let mut sheet = ResultSheet::new();
    sheet.save(row("p004")).unwrap();
    sheet.clear();

    assert!(sheet.is_empty());
    sheet.save(row("p004")).unwrap();
    assert_eq!(sheet.len(), 1);
}

#[test]
fn row_from_scores_carries_the_global_index() {
    let scores = OrganScores {
        upper: 0.0,
        small_bowel: 0.15,
        colon_rectum: 0.0,
        anus: 2.0,
    };
    let row = ResultRow::from_scores("p005", &scores);
    assert_eq!(row.li_small_bowel, 0.15);
    assert_eq!(row.li_anus, 2.0);
    assert_eq!(row.global_li, 5.6);
}

#[test]
fn row_from_registry_scores_current_contents() {
    let mut registry = Registry::new();
    let mut obs = SegmentObservation::new(Organ::SmallBowel, "bin_01");
    obs.thick_mm = 4.0;
    registry.upsert(obs).unwrap();

    let row = ResultRow::from_registry("p006", &registry);
    assert_eq!(row.li_small_bowel, 0.15);
    assert_eq!(row.li_upper, 0.0);
    assert_eq!(row.global_li, 0.6);
}
