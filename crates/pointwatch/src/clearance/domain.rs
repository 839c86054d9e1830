use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Review state attached to every submitted record.
///
/// `Pending` is the state a record is created in; the review system moves it
/// to `Approved` or `Rejected` and this crate never transitions it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ValidationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ValidationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }

    /// Approved and rejected records no longer change from this crate's
    /// perspective.
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl FromStr for ValidationStatus {
    type Err = ParseStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Ok(Self::Pending),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(ParseStatusError {
                value: value.to_string(),
            }),
        }
    }
}

#[derive(Debug)]
pub struct ParseStatusError {
    value: String,
}

impl ParseStatusError {
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized validation status '{}'", self.value)
    }
}

impl std::error::Error for ParseStatusError {}

/// A single staff/faculty training & development submission.
///
/// The wire shape mirrors the backend payload; the fields past
/// `validation_status` only appear on detail endpoints, so they stay optional
/// and list payloads still deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwtdRecord {
    pub id: i64,
    pub title: String,
    pub points: f64,
    pub term_id: i64,
    pub author_id: i64,
    pub validation_status: ValidationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Backend wire format `MM-DD-YYYY`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// 24-hour `HH:MM`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_started: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_finished: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefits: Option<String>,
}

/// Academic period kinds, with the exact strings the backend uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TermType {
    #[serde(rename = "SEMESTER")]
    Semester,
    #[serde(rename = "MIDYEAR/SUMMER")]
    Midyear,
    #[serde(rename = "ACADEMIC YEAR")]
    AcademicYear,
}

impl TermType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Semester => "SEMESTER",
            Self::Midyear => "MIDYEAR/SUMMER",
            Self::AcademicYear => "ACADEMIC YEAR",
        }
    }
}

/// An academic period point requirements and clearance are scoped to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub term_type: TermType,
    pub is_ongoing: bool,
    pub required_points: f64,
}

impl Term {
    /// Departments that budget midyear points separately override the term's
    /// own requirement for midyear/summer periods.
    pub fn required_points_for(&self, department: Option<&Department>) -> f64 {
        match (self.term_type, department) {
            (TermType::Midyear, Some(dept)) if dept.midyear_points > 0.0 => dept.midyear_points,
            _ => self.required_points,
        }
    }
}

/// Administrative confirmation that an employee met a term's requirement.
///
/// Absence of a row, or `is_deleted == true`, reads as NOT CLEARED no matter
/// what the point totals say.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clearance {
    pub id: i64,
    pub employee_id: i64,
    pub term_id: i64,
    pub is_deleted: bool,
}

impl Clearance {
    pub const fn is_active(&self) -> bool {
        !self.is_deleted
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub level: String,
    pub use_schoolyear: bool,
    #[serde(default)]
    pub midyear_points: f64,
}

impl Department {
    /// Which period kinds apply to this department's compliance schedule.
    pub fn term_types(&self) -> Vec<TermType> {
        let mut types = Vec::new();
        if !self.use_schoolyear {
            types.push(TermType::Semester);
        }
        if self.midyear_points > 0.0 {
            types.push(TermType::Midyear);
        }
        if self.use_schoolyear {
            types.push(TermType::AcademicYear);
        }
        types
    }
}

/// Restrict `terms` to the kinds the department runs on. A department that
/// yields no kinds sees every term.
pub fn terms_for_department<'a>(terms: &'a [Term], department: &Department) -> Vec<&'a Term> {
    let types = department.term_types();
    if types.is_empty() {
        return terms.iter().collect();
    }
    terms
        .iter()
        .filter(|term| types.contains(&term.term_type))
        .collect()
}

/// The term the dashboards preselect: the first ongoing one.
pub fn default_term(terms: &[Term]) -> Option<&Term> {
    terms.iter().find(|term| term.is_ongoing)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    /// External ID number; registration allows accounts without one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    pub firstname: String,
    pub lastname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
    #[serde(default)]
    pub is_head: bool,
    /// Running balance across every term, shown by the all-terms view.
    #[serde(default)]
    pub point_balance: f64,
}

impl Employee {
    /// Roster display order is "Lastname, Firstname".
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.lastname, self.firstname)
    }

    pub fn id_label(&self) -> &str {
        self.employee_id.as_deref().unwrap_or("No ID")
    }
}
