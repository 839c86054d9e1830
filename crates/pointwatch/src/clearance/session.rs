use serde::{Deserialize, Serialize};

use super::domain::{Department, Employee};
use super::status::TermStatus;

/// The acting user's session state, passed explicitly to whichever page
/// needs it. Role checks live here as capability methods so callers ask
/// "may this user do X" instead of re-deriving flag combinations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default)]
    pub is_head: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
}

impl SessionUser {
    /// The review dashboard is for admins, HR staff, and superusers;
    /// everyone else lands on their own submission list.
    pub fn can_view_dashboard(&self) -> bool {
        self.is_admin || self.is_staff || self.is_superuser
    }

    /// The cross-department points overview belongs to HR staff and
    /// superusers; admins are routed to their department dashboard instead.
    pub fn can_view_points_overview(&self) -> bool {
        (self.is_staff || self.is_superuser) && !self.is_admin
    }

    /// Heads/Chairs review only their own department's submissions.
    pub fn can_review_employee(&self, employee: &Employee) -> bool {
        if self.is_admin || self.is_staff || self.is_superuser {
            return true;
        }
        self.is_head && self.heads_department_of(employee)
    }

    /// Granting requires the employee to have met the point requirement.
    pub fn can_grant_clearance(&self, employee: &Employee, status: &TermStatus) -> bool {
        status.is_compliant()
            && (self.is_admin || (self.is_head && self.heads_department_of(employee)))
    }

    /// Revocation has no point requirement — clearing above-threshold
    /// employees back out is an explicit administrative action.
    pub fn can_revoke_clearance(&self, employee: &Employee) -> bool {
        self.is_admin || (self.is_head && self.heads_department_of(employee))
    }

    pub fn can_manage_roles(&self) -> bool {
        self.is_superuser
    }

    /// Promotion to Head/Chair requires a department assignment.
    pub fn can_promote_head(&self, employee: &Employee) -> bool {
        self.can_manage_roles() && employee.department.is_some()
    }

    fn heads_department_of(&self, employee: &Employee) -> bool {
        match (&self.department, &employee.department) {
            (Some(own), Some(theirs)) => own.id == theirs.id,
            _ => false,
        }
    }
}
