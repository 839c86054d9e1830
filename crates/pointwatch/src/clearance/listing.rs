use std::cmp::Reverse;
use std::collections::HashMap;

use super::domain::{Department, Employee, SwtdRecord, Term, ValidationStatus};

/// The one search/filter/sort pass every roster page shares.
///
/// `query` is a case-insensitive substring match against the external ID
/// number, first name, or last name. With a `status_filter`, only employees
/// owning at least one record in that status remain, ordered by how many
/// they own (most first); ties keep their prior relative order. Empty query
/// and no filter is the identity. The input is never mutated.
pub fn filter_and_sort(
    employees: &[Employee],
    records: &[SwtdRecord],
    query: &str,
    status_filter: Option<ValidationStatus>,
) -> Vec<Employee> {
    let query = query.trim().to_lowercase();
    let mut result: Vec<Employee> = employees
        .iter()
        .filter(|employee| query.is_empty() || matches_search(employee, &query))
        .cloned()
        .collect();

    if let Some(status) = status_filter {
        let mut counts: HashMap<i64, usize> = HashMap::new();
        for record in records
            .iter()
            .filter(|record| record.validation_status == status)
        {
            *counts.entry(record.author_id).or_default() += 1;
        }

        result.retain(|employee| counts.contains_key(&employee.id));
        // Vec::sort_by_key is stable, which keeps the tie order.
        result.sort_by_key(|employee| Reverse(counts[&employee.id]));
    }

    result
}

fn matches_search(employee: &Employee, query: &str) -> bool {
    employee
        .employee_id
        .as_deref()
        .map_or(false, |code| code.to_lowercase().contains(query))
        || employee.firstname.to_lowercase().contains(query)
        || employee.lastname.to_lowercase().contains(query)
}

/// Overview scoping: keep members of `department`, or everyone when no
/// department is selected. Employees without a department never match a
/// selected one.
pub fn filter_by_department(
    employees: &[Employee],
    department: Option<&Department>,
) -> Vec<Employee> {
    employees
        .iter()
        .filter(|employee| match department {
            Some(dept) => employee
                .department
                .as_ref()
                .map_or(false, |own| own.id == dept.id),
            None => true,
        })
        .cloned()
        .collect()
}

/// One page of `items`, 1-indexed. The page number clamps into the valid
/// range so a stale page selection still shows the last page instead of an
/// empty one; a zero page size disables paging and returns everything.
pub fn paginate<T>(items: &[T], page_size: usize, page_number: usize) -> &[T] {
    if page_size == 0 {
        return items;
    }

    let total_pages = (items.len() + page_size - 1) / page_size;
    let page = page_number.clamp(1, total_pages.max(1));
    let start = (page - 1) * page_size;
    if start >= items.len() {
        return &items[0..0];
    }

    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// Per-employee record table filter: optional term scope, optional status
/// equality, and a query matched against the title or the status label.
pub fn filter_records<'a>(
    records: &'a [SwtdRecord],
    term: Option<&Term>,
    status: Option<ValidationStatus>,
    query: &str,
) -> Vec<&'a SwtdRecord> {
    let query = query.trim().to_lowercase();
    records
        .iter()
        .filter(|record| term.map_or(true, |term| record.term_id == term.id))
        .filter(|record| status.map_or(true, |status| record.validation_status == status))
        .filter(|record| {
            query.is_empty()
                || record.title.to_lowercase().contains(&query)
                || record
                    .validation_status
                    .label()
                    .to_lowercase()
                    .contains(&query)
        })
        .collect()
}

/// Head/Chair roster. Without a query the page lists current heads sorted by
/// last name; a query searches the whole roster instead. Heads always
/// surface before non-heads.
pub fn privileged_roster(employees: &[Employee], query: &str) -> Vec<Employee> {
    let trimmed = query.trim();
    let mut roster: Vec<Employee> = if trimmed.is_empty() {
        let mut heads: Vec<Employee> = employees
            .iter()
            .filter(|employee| employee.is_head)
            .cloned()
            .collect();
        heads.sort_by(|a, b| a.lastname.cmp(&b.lastname));
        heads
    } else {
        let lowered = trimmed.to_lowercase();
        employees
            .iter()
            .filter(|employee| matches_search(employee, &lowered))
            .cloned()
            .collect()
    };

    roster.sort_by_key(|employee| Reverse(employee.is_head));
    roster
}
