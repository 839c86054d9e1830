use std::io::Cursor;

use pointwatch::clearance::{
    default_term, percent_cleared, terms_for_department, PointsOverview, TermStatus,
    ValidationStatus,
};
use pointwatch::dataset::{records_from_csv, Dataset};

fn campus_snapshot() -> Dataset {
    let payload = serde_json::json!({
        "terms": [
            {"id": 1, "name": "1st Semester 2024-2025", "type": "SEMESTER", "is_ongoing": true, "required_points": 40.0},
            {"id": 2, "name": "Midyear 2025", "type": "MIDYEAR/SUMMER", "is_ongoing": false, "required_points": 15.0},
            {"id": 3, "name": "AY 2024-2025", "type": "ACADEMIC YEAR", "is_ongoing": false, "required_points": 60.0}
        ],
        "employees": [
            {"id": 10, "employee_id": "21-0387", "firstname": "Alma", "lastname": "Reyes",
             "department": {"id": 1, "name": "College of Computing", "level": "Tertiary", "use_schoolyear": false, "midyear_points": 10.0}},
            {"id": 11, "employee_id": "19-1122", "firstname": "Benjo", "lastname": "Cruz",
             "department": {"id": 1, "name": "College of Computing", "level": "Tertiary", "use_schoolyear": false, "midyear_points": 10.0}},
            {"id": 12, "firstname": "Carla", "lastname": "Uy"}
        ],
        "records": [
            {"id": 100, "title": "Data Privacy Seminar", "points": 42.0, "term_id": 1, "author_id": 10, "validation_status": "APPROVED"},
            {"id": 101, "title": "Outdated Training", "points": 8.0, "term_id": 1, "author_id": 10, "validation_status": "REJECTED"},
            {"id": 102, "title": "First Aid Training", "points": 25.0, "term_id": 1, "author_id": 11, "validation_status": "APPROVED"},
            {"id": 103, "title": "Extension Program", "points": 20.0, "term_id": 1, "author_id": 11, "validation_status": "PENDING"}
        ],
        "clearances": [
            {"id": 900, "employee_id": 10, "term_id": 1, "is_deleted": false},
            {"id": 901, "employee_id": 11, "term_id": 1, "is_deleted": true}
        ]
    });

    Dataset::from_json_reader(Cursor::new(payload.to_string())).expect("snapshot deserializes")
}

#[test]
fn overview_derives_the_hr_dashboard_state() {
    let dataset = campus_snapshot();
    let term = default_term(&dataset.terms).expect("an ongoing term").clone();
    assert_eq!(term.id, 1);

    let dept = dataset.employees[0]
        .department
        .clone()
        .expect("alma has a department");
    let overview = PointsOverview::build(&dataset, Some(&dept), &term, "", None);

    // Carla has no department, so the scope drops her.
    assert_eq!(overview.standings.len(), 2);

    let alma = &overview.standings[0];
    assert_eq!(alma.status.valid_points, 42.0);
    assert!(alma.status.is_compliant());
    assert!(alma.status.is_cleared);

    // Benjo's clearance row is soft-deleted: revoked, not cleared.
    let benjo = &overview.standings[1];
    assert_eq!(benjo.status.valid_points, 25.0);
    assert!(!benjo.status.is_cleared);
    assert_eq!(benjo.status.pending_count, 1);

    let totals = overview.totals();
    assert_eq!(totals.cleared, 1);
    assert_eq!(totals.percent_cleared, 50.0);
}

#[test]
fn department_term_menu_and_requirements_line_up() {
    let dataset = campus_snapshot();
    let dept = dataset.employees[0]
        .department
        .clone()
        .expect("department present");

    // Semester department with a midyear budget: no academic-year terms.
    let visible = terms_for_department(&dataset.terms, &dept);
    let ids: Vec<i64> = visible.iter().map(|term| term.id).collect();
    assert_eq!(ids, vec![1, 2]);

    let midyear = dataset.term(2).expect("midyear term").clone();
    assert_eq!(midyear.required_points_for(Some(&dept)), 10.0);
    assert_eq!(midyear.required_points_for(None), 15.0);
}

#[test]
fn csv_export_rows_merge_into_the_snapshot() {
    let mut dataset = campus_snapshot();

    let export = "\
ID,Title,Points,Term ID,Author ID,Status,Date
104,Research Colloquium,18.0,1,12,APPROVED,08-14-2024
105,Wellness Session,4.0,1,12,PENDING,2024-09-02
";
    let imported = records_from_csv(Cursor::new(export)).expect("export parses");
    dataset.records.extend(imported);

    let status = dataset.term_status(12, 1);
    assert_eq!(status.valid_points, 18.0);
    assert_eq!(status.pending_count, 1);
    assert!(!status.is_cleared);
}

#[test]
fn status_filter_surfaces_heaviest_offenders_first() {
    let mut dataset = campus_snapshot();
    dataset.records.push(pointwatch::clearance::SwtdRecord {
        id: 106,
        title: "Another Rejection".to_string(),
        points: 2.0,
        term_id: 1,
        author_id: 12,
        validation_status: ValidationStatus::Rejected,
        venue: None,
        category: None,
        role: None,
        date: None,
        time_started: None,
        time_finished: None,
        benefits: None,
    });

    let term = default_term(&dataset.terms).expect("ongoing term").clone();
    let overview = PointsOverview::build(
        &dataset,
        None,
        &term,
        "",
        Some(ValidationStatus::Rejected),
    );

    // Alma and Carla each have one rejected record; the tie keeps roster order.
    let ids: Vec<i64> = overview
        .standings
        .iter()
        .map(|standing| standing.employee.id)
        .collect();
    assert_eq!(ids, vec![10, 12]);
}

#[test]
fn empty_campus_produces_zeroes_not_nan() {
    let dataset = Dataset::default();
    let statuses: Vec<TermStatus> = Vec::new();
    assert_eq!(percent_cleared(&statuses), 0.0);
    assert!(dataset.employees.is_empty());
}
