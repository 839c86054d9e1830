use serde::Serialize;

use super::domain::{Clearance, Department, Employee, SwtdRecord, Term, ValidationStatus};

/// Derived compliance standing for one employee in one term.
///
/// Point totals and the cleared flag are independent at display time: an
/// admin can clear a below-threshold employee or revoke an above-threshold
/// one. Only the grant action itself is gated on `is_compliant`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TermStatus {
    pub valid_points: f64,
    pub required_points: f64,
    pub pending_count: usize,
    pub rejected_count: usize,
    pub is_cleared: bool,
}

impl TermStatus {
    pub fn is_compliant(&self) -> bool {
        self.valid_points >= self.required_points
    }

    pub const fn label(&self) -> &'static str {
        if self.is_cleared {
            "CLEARED"
        } else {
            "NOT CLEARED"
        }
    }
}

/// Derive the standing for `(employee, term)` from the full record and
/// clearance sets. Only APPROVED submissions count toward `valid_points`;
/// pending and rejected ones are tallied for visibility. Total over any
/// input — empty collections produce the zero standing.
pub fn term_status(
    employee: &Employee,
    term: &Term,
    records: &[SwtdRecord],
    clearances: &[Clearance],
) -> TermStatus {
    with_requirement(employee, term, term.required_points, records, clearances)
}

/// Overview variant honoring the department's midyear point budget.
pub fn term_status_in_department(
    employee: &Employee,
    term: &Term,
    department: Option<&Department>,
    records: &[SwtdRecord],
    clearances: &[Clearance],
) -> TermStatus {
    with_requirement(
        employee,
        term,
        term.required_points_for(department),
        records,
        clearances,
    )
}

fn with_requirement(
    employee: &Employee,
    term: &Term,
    required_points: f64,
    records: &[SwtdRecord],
    clearances: &[Clearance],
) -> TermStatus {
    let mut status = TermStatus {
        required_points,
        ..TermStatus::default()
    };

    for record in records
        .iter()
        .filter(|record| record.author_id == employee.id && record.term_id == term.id)
    {
        match record.validation_status {
            ValidationStatus::Approved => status.valid_points += record.points,
            ValidationStatus::Pending => status.pending_count += 1,
            ValidationStatus::Rejected => status.rejected_count += 1,
        }
    }

    status.is_cleared = clearances
        .iter()
        .find(|clearance| clearance.employee_id == employee.id && clearance.term_id == term.id)
        .map(|clearance| clearance.is_active())
        .unwrap_or(false);

    status
}

/// Share of cleared standings as a percentage, rounded to two decimals.
/// An empty input yields `0.0` — the naive division would surface as "NaN%"
/// in the overview header.
pub fn percent_cleared(statuses: &[TermStatus]) -> f64 {
    if statuses.is_empty() {
        return 0.0;
    }

    let cleared = statuses.iter().filter(|status| status.is_cleared).count();
    let percent = cleared as f64 / statuses.len() as f64 * 100.0;
    (percent * 100.0).round() / 100.0
}
