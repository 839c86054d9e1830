use crate::clearance::domain::{
    Clearance, Department, Employee, SwtdRecord, Term, TermType, ValidationStatus,
};
use crate::clearance::session::SessionUser;
use crate::dataset::Dataset;

pub(super) fn term(id: i64, name: &str, required_points: f64) -> Term {
    Term {
        id,
        name: name.to_string(),
        term_type: TermType::Semester,
        is_ongoing: true,
        required_points,
    }
}

pub(super) fn midyear_term(id: i64, required_points: f64) -> Term {
    Term {
        id,
        name: "Midyear 2025".to_string(),
        term_type: TermType::Midyear,
        is_ongoing: false,
        required_points,
    }
}

pub(super) fn department(id: i64, name: &str) -> Department {
    Department {
        id,
        name: name.to_string(),
        level: "Tertiary".to_string(),
        use_schoolyear: false,
        midyear_points: 0.0,
    }
}

pub(super) fn employee(id: i64, code: Option<&str>, firstname: &str, lastname: &str) -> Employee {
    Employee {
        id,
        employee_id: code.map(str::to_string),
        firstname: firstname.to_string(),
        lastname: lastname.to_string(),
        department: None,
        is_head: false,
        point_balance: 0.0,
    }
}

pub(super) fn employee_in(
    id: i64,
    code: Option<&str>,
    firstname: &str,
    lastname: &str,
    dept: Department,
) -> Employee {
    Employee {
        department: Some(dept),
        ..employee(id, code, firstname, lastname)
    }
}

pub(super) fn record(
    id: i64,
    author_id: i64,
    term_id: i64,
    points: f64,
    status: ValidationStatus,
) -> SwtdRecord {
    SwtdRecord {
        id,
        title: format!("Seminar {id}"),
        points,
        term_id,
        author_id,
        validation_status: status,
        venue: None,
        category: None,
        role: None,
        date: None,
        time_started: None,
        time_finished: None,
        benefits: None,
    }
}

pub(super) fn clearance(employee_id: i64, term_id: i64, is_deleted: bool) -> Clearance {
    Clearance {
        id: employee_id * 100 + term_id,
        employee_id,
        term_id,
        is_deleted,
    }
}

pub(super) fn admin() -> SessionUser {
    SessionUser {
        id: 1,
        is_admin: true,
        ..SessionUser::default()
    }
}

pub(super) fn head_of(dept: Department) -> SessionUser {
    SessionUser {
        id: 2,
        is_head: true,
        department: Some(dept),
        ..SessionUser::default()
    }
}

/// A small campus: one department, three employees, one ongoing term.
pub(super) fn sample_dataset() -> Dataset {
    let ccis = department(1, "College of Computing");
    Dataset {
        terms: vec![term(1, "1st Semester 2024-2025", 5.0)],
        departments: vec![ccis.clone()],
        employees: vec![
            employee_in(10, Some("21-0387"), "Alma", "Reyes", ccis.clone()),
            employee_in(11, Some("19-1122"), "Benjo", "Cruz", ccis.clone()),
            employee_in(12, None, "Carla", "Uy", ccis),
        ],
        records: vec![
            record(100, 10, 1, 3.0, ValidationStatus::Approved),
            record(101, 10, 1, 2.0, ValidationStatus::Rejected),
            record(102, 11, 1, 5.0, ValidationStatus::Approved),
            record(103, 11, 1, 1.0, ValidationStatus::Pending),
            record(104, 12, 1, 4.0, ValidationStatus::Pending),
        ],
        clearances: vec![clearance(11, 1, false)],
    }
}
