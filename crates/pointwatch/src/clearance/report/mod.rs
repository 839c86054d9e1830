//! Derived report shapes the dashboards and exporters consume.

mod summary;
mod views;

pub use summary::{EmployeeSwtdReport, EmployeeTermStanding, PointsOverview};
pub use views::{
    EmployeeStatusView, EmployeeSwtdView, OverviewTotals, PointsOverviewSummary, RecordView,
};
