use super::common::*;
use crate::clearance::session::SessionUser;
use crate::clearance::status::TermStatus;

fn compliant() -> TermStatus {
    TermStatus {
        valid_points: 6.0,
        required_points: 5.0,
        ..TermStatus::default()
    }
}

fn short_of_points() -> TermStatus {
    TermStatus {
        valid_points: 3.0,
        required_points: 5.0,
        ..TermStatus::default()
    }
}

#[test]
fn dashboard_access_follows_role_flags() {
    assert!(admin().can_view_dashboard());

    let staff = SessionUser {
        id: 5,
        is_staff: true,
        ..SessionUser::default()
    };
    assert!(staff.can_view_dashboard());
    assert!(staff.can_view_points_overview());

    // Admins get their own dashboard, not the HR overview.
    assert!(!admin().can_view_points_overview());

    let plain = SessionUser {
        id: 6,
        ..SessionUser::default()
    };
    assert!(!plain.can_view_dashboard());
}

#[test]
fn granting_requires_compliant_points() {
    let dept = department(1, "College of Computing");
    let alma = employee_in(10, None, "Alma", "Reyes", dept.clone());

    assert!(admin().can_grant_clearance(&alma, &compliant()));
    assert!(!admin().can_grant_clearance(&alma, &short_of_points()));

    // Revocation carries no point requirement.
    assert!(admin().can_revoke_clearance(&alma));
}

#[test]
fn heads_act_only_within_their_department() {
    let ccis = department(1, "College of Computing");
    let con = department(2, "College of Nursing");
    let alma = employee_in(10, None, "Alma", "Reyes", ccis.clone());
    let nadia = employee_in(11, None, "Nadia", "Sy", con);

    let head = head_of(ccis);
    assert!(head.can_review_employee(&alma));
    assert!(head.can_grant_clearance(&alma, &compliant()));
    assert!(!head.can_grant_clearance(&alma, &short_of_points()));
    assert!(head.can_revoke_clearance(&alma));

    assert!(!head.can_review_employee(&nadia));
    assert!(!head.can_grant_clearance(&nadia, &compliant()));
    assert!(!head.can_revoke_clearance(&nadia));
}

#[test]
fn promotion_is_superuser_only_and_needs_a_department() {
    let dept = department(1, "College of Computing");
    let with_dept = employee_in(10, None, "Alma", "Reyes", dept);
    let without_dept = employee(11, None, "Benjo", "Cruz");

    let superuser = SessionUser {
        id: 1,
        is_superuser: true,
        ..SessionUser::default()
    };
    assert!(superuser.can_manage_roles());
    assert!(superuser.can_promote_head(&with_dept));
    assert!(!superuser.can_promote_head(&without_dept));

    assert!(!admin().can_manage_roles());
    assert!(!admin().can_promote_head(&with_dept));
}
