use tracing::debug;

use super::super::domain::{Department, Employee, SwtdRecord, Term, ValidationStatus};
use super::super::listing::{filter_and_sort, filter_by_department, filter_records, paginate};
use super::super::status::{percent_cleared, term_status, term_status_in_department, TermStatus};
use super::views::{
    EmployeeStatusView, EmployeeSwtdView, OverviewTotals, PointsOverviewSummary, RecordView,
};
use crate::dataset::Dataset;

/// An employee paired with their derived standing for one term.
#[derive(Debug, Clone)]
pub struct EmployeeTermStanding {
    pub employee: Employee,
    pub status: TermStatus,
}

impl EmployeeTermStanding {
    pub fn to_view(&self) -> EmployeeStatusView {
        EmployeeStatusView {
            id: self.employee.id,
            id_label: self.employee.id_label().to_string(),
            name: self.employee.display_name(),
            department: self
                .employee
                .department
                .as_ref()
                .map(|dept| dept.name.clone()),
            valid_points: self.status.valid_points,
            required_points: self.status.required_points,
            pending_count: self.status.pending_count,
            rejected_count: self.status.rejected_count,
            is_cleared: self.status.is_cleared,
            status_label: self.status.label(),
        }
    }
}

/// The department points overview: scoped, searched, filtered standings for
/// one term, rebuilt from scratch on every call.
#[derive(Debug, Default)]
pub struct PointsOverview {
    pub standings: Vec<EmployeeTermStanding>,
}

impl PointsOverview {
    pub fn build(
        dataset: &Dataset,
        department: Option<&Department>,
        term: &Term,
        query: &str,
        status_filter: Option<ValidationStatus>,
    ) -> Self {
        let scoped = filter_by_department(&dataset.employees, department);
        let listed = filter_and_sort(&scoped, &dataset.records, query, status_filter);

        let standings: Vec<EmployeeTermStanding> = listed
            .into_iter()
            .map(|employee| {
                let status = term_status_in_department(
                    &employee,
                    term,
                    department,
                    &dataset.records,
                    &dataset.clearances,
                );
                EmployeeTermStanding { employee, status }
            })
            .collect();

        debug!(
            term = %term.name,
            employees = standings.len(),
            "points overview built"
        );

        Self { standings }
    }

    pub fn totals(&self) -> OverviewTotals {
        let statuses: Vec<TermStatus> = self
            .standings
            .iter()
            .map(|standing| standing.status)
            .collect();
        let cleared = statuses.iter().filter(|status| status.is_cleared).count();

        OverviewTotals {
            total_employees: statuses.len(),
            cleared,
            not_cleared: statuses.len() - cleared,
            percent_cleared: percent_cleared(&statuses),
        }
    }

    /// One page of standings; same clamping rules as `listing::paginate`.
    pub fn page(&self, page_size: usize, page_number: usize) -> &[EmployeeTermStanding] {
        paginate(&self.standings, page_size, page_number)
    }

    pub fn summary(&self, term: &Term, department: Option<&Department>) -> PointsOverviewSummary {
        PointsOverviewSummary {
            term_name: term.name.clone(),
            department_name: department.map(|dept| dept.name.clone()),
            totals: self.totals(),
            rows: self
                .standings
                .iter()
                .map(EmployeeTermStanding::to_view)
                .collect(),
        }
    }
}

/// The per-employee submission report. `term = None` is the "All terms"
/// view, which shows the running point balance instead of a term standing.
#[derive(Debug, Clone)]
pub struct EmployeeSwtdReport {
    pub employee: Employee,
    pub term: Option<Term>,
    pub status: Option<TermStatus>,
    pub records: Vec<SwtdRecord>,
}

impl EmployeeSwtdReport {
    pub fn build(
        dataset: &Dataset,
        employee_id: i64,
        term: Option<&Term>,
        status_filter: Option<ValidationStatus>,
        query: &str,
    ) -> Option<Self> {
        let employee = dataset.employee(employee_id)?.clone();

        let own_records: Vec<SwtdRecord> = dataset
            .records
            .iter()
            .filter(|record| record.author_id == employee.id)
            .cloned()
            .collect();
        let records: Vec<SwtdRecord> = filter_records(&own_records, term, status_filter, query)
            .into_iter()
            .cloned()
            .collect();

        let status =
            term.map(|term| term_status(&employee, term, &dataset.records, &dataset.clearances));

        Some(Self {
            employee,
            term: term.cloned(),
            status,
            records,
        })
    }

    pub fn to_view(&self) -> EmployeeSwtdView {
        EmployeeSwtdView {
            name: self.employee.display_name(),
            department: self
                .employee
                .department
                .as_ref()
                .map(|dept| dept.name.clone()),
            term_name: self.term.as_ref().map(|term| term.name.clone()),
            status: self.status,
            // The employee page words the negative case as awaiting action.
            status_label: self.status.map(|status| {
                if status.is_cleared {
                    "CLEARED"
                } else {
                    "PENDING CLEARANCE"
                }
            }),
            point_balance: match self.term {
                None => Some(self.employee.point_balance),
                Some(_) => None,
            },
            records: self
                .records
                .iter()
                .map(|record| RecordView {
                    id: record.id,
                    title: record.title.clone(),
                    points: record.points,
                    status_label: record.validation_status.label(),
                })
                .collect(),
        }
    }
}
