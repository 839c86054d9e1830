//! Clearance and points derivation for staff training records.
//!
//! Everything in this module is a pure function of the collections passed
//! in: no caching, no interior state, invoked fresh on every render or
//! query. Staleness is bounded only by how often the caller re-fetches.

pub mod domain;
pub mod listing;
pub mod report;
pub mod session;
pub mod status;

#[cfg(test)]
mod tests;

pub use domain::{
    default_term, terms_for_department, Clearance, Department, Employee, SwtdRecord, Term,
    TermType, ValidationStatus,
};
pub use listing::{
    filter_and_sort, filter_by_department, filter_records, paginate, privileged_roster,
};
pub use report::{
    EmployeeStatusView, EmployeeSwtdReport, EmployeeSwtdView, EmployeeTermStanding,
    OverviewTotals, PointsOverview, PointsOverviewSummary, RecordView,
};
pub use session::SessionUser;
pub use status::{percent_cleared, term_status, term_status_in_department, TermStatus};
