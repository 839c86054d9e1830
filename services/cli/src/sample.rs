//! Built-in demo campus used when no snapshot file is supplied.

use pointwatch::clearance::{
    Clearance, Department, Employee, SwtdRecord, Term, TermType, ValidationStatus,
};
use pointwatch::dataset::Dataset;

pub(crate) fn dataset() -> Dataset {
    let ccis = Department {
        id: 1,
        name: "College of Computing and Information Sciences".to_string(),
        level: "Tertiary".to_string(),
        use_schoolyear: false,
        midyear_points: 10.0,
    };
    let basic_ed = Department {
        id: 2,
        name: "Basic Education".to_string(),
        level: "Basic".to_string(),
        use_schoolyear: true,
        midyear_points: 0.0,
    };

    Dataset {
        terms: vec![
            Term {
                id: 1,
                name: "1st Semester 2024-2025".to_string(),
                term_type: TermType::Semester,
                is_ongoing: true,
                required_points: 40.0,
            },
            Term {
                id: 2,
                name: "Midyear 2025".to_string(),
                term_type: TermType::Midyear,
                is_ongoing: false,
                required_points: 15.0,
            },
            Term {
                id: 3,
                name: "AY 2024-2025".to_string(),
                term_type: TermType::AcademicYear,
                is_ongoing: false,
                required_points: 60.0,
            },
        ],
        departments: vec![ccis.clone(), basic_ed.clone()],
        employees: vec![
            employee(10, Some("21-0387"), "Alma", "Reyes", Some(ccis.clone()), true, 63.5),
            employee(11, Some("19-1122"), "Benjo", "Cruz", Some(ccis.clone()), false, 25.0),
            employee(12, None, "Carla", "Uy", Some(ccis), false, 12.0),
            employee(13, Some("22-4501"), "Diego", "Santos", Some(basic_ed.clone()), false, 71.0),
            employee(14, Some("18-0042"), "Elena", "Torres", Some(basic_ed), true, 58.0),
            employee(15, Some("23-7788"), "Franco", "Lim", None, false, 0.0),
        ],
        records: vec![
            record(100, 10, 1, 30.0, "ICT Governance Summit", ValidationStatus::Approved),
            record(101, 10, 1, 12.5, "Data Privacy Seminar", ValidationStatus::Approved),
            record(102, 10, 1, 8.0, "Expired Certificate Upload", ValidationStatus::Rejected),
            record(103, 11, 1, 25.0, "First Aid Training", ValidationStatus::Approved),
            record(104, 11, 1, 20.0, "Extension Program", ValidationStatus::Pending),
            record(105, 12, 1, 12.0, "Wellness Session", ValidationStatus::Approved),
            record(106, 12, 1, 6.0, "Research Colloquium", ValidationStatus::Pending),
            record(107, 12, 1, 4.0, "Unaccredited Webinar", ValidationStatus::Rejected),
            record(108, 13, 3, 71.0, "Curriculum Development Workshop", ValidationStatus::Approved),
            record(109, 14, 3, 58.0, "Instructional Design Course", ValidationStatus::Approved),
            record(110, 14, 3, 10.0, "Pending Mentoring Log", ValidationStatus::Pending),
            record(111, 10, 2, 11.0, "Midyear Research Camp", ValidationStatus::Approved),
        ],
        clearances: vec![
            Clearance {
                id: 900,
                employee_id: 10,
                term_id: 1,
                is_deleted: false,
            },
            Clearance {
                id: 901,
                employee_id: 11,
                term_id: 1,
                is_deleted: true,
            },
            Clearance {
                id: 902,
                employee_id: 13,
                term_id: 3,
                is_deleted: false,
            },
        ],
    }
}

fn employee(
    id: i64,
    code: Option<&str>,
    firstname: &str,
    lastname: &str,
    department: Option<Department>,
    is_head: bool,
    point_balance: f64,
) -> Employee {
    Employee {
        id,
        employee_id: code.map(str::to_string),
        firstname: firstname.to_string(),
        lastname: lastname.to_string(),
        department,
        is_head,
        point_balance,
    }
}

fn record(
    id: i64,
    author_id: i64,
    term_id: i64,
    points: f64,
    title: &str,
    validation_status: ValidationStatus,
) -> SwtdRecord {
    SwtdRecord {
        id,
        title: title.to_string(),
        points,
        term_id,
        author_id,
        validation_status,
        venue: None,
        category: None,
        role: None,
        date: None,
        time_started: None,
        time_finished: None,
        benefits: None,
    }
}
