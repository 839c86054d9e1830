use serde::Serialize;

use super::super::status::TermStatus;

/// One overview row, flattened for rendering and export collaborators.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeStatusView {
    pub id: i64,
    pub id_label: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    pub valid_points: f64,
    pub required_points: f64,
    pub pending_count: usize,
    pub rejected_count: usize,
    pub is_cleared: bool,
    pub status_label: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct OverviewTotals {
    pub total_employees: usize,
    pub cleared: usize,
    pub not_cleared: usize,
    pub percent_cleared: f64,
}

/// The department points overview a dashboard or exporter consumes whole.
#[derive(Debug, Clone, Serialize)]
pub struct PointsOverviewSummary {
    pub term_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_name: Option<String>,
    pub totals: OverviewTotals,
    pub rows: Vec<EmployeeStatusView>,
}

/// One line of an employee's submission table.
#[derive(Debug, Clone, Serialize)]
pub struct RecordView {
    pub id: i64,
    pub title: String,
    pub points: f64,
    pub status_label: &'static str,
}

/// The per-employee page: the (optionally term-scoped) record listing plus
/// either the term standing or the all-terms point balance.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeSwtdView {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TermStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_label: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_balance: Option<f64>,
    pub records: Vec<RecordView>,
}
