//! Field-level checks for the registration and settings forms. The
//! derivation layer never calls these; malformed collections flow through
//! it untouched.

pub fn is_empty(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn has_min_length(value: &str, min: usize) -> bool {
    value.trim().chars().count() >= min
}

/// Single `@`, non-empty local part, dotted domain, no whitespace.
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.contains(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && tld.len() >= 2,
        None => false,
    }
}

/// At least eight characters mixing letters and digits.
pub fn is_valid_password(value: &str) -> bool {
    value.chars().count() >= 8
        && value.chars().any(|c| c.is_ascii_alphabetic())
        && value.chars().any(|c| c.is_ascii_digit())
}
