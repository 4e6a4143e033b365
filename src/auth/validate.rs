use crate::models::user::{ROLES, UserForm};

/// Validate an email: must contain '@' and '.', max 254 chars.
pub fn validate_email(email: &str) -> Option<String> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Some("Email is required".to_string());
    }
    if trimmed.len() > 254 {
        return Some("Email must be at most 254 characters".to_string());
    }
    if !trimmed.contains('@') || !trimmed.contains('.') {
        return Some("Email must be a valid address (contain '@' and '.')".to_string());
    }
    None
}

/// Validate a new password: min 6 chars, counted as typed.
pub fn validate_password(password: &str) -> Option<String> {
    if password.trim().is_empty() {
        return Some("Password is required".to_string());
    }
    if password.chars().count() < 6 {
        return Some("Password must be at least 6 characters".to_string());
    }
    None
}

/// Validate a required text field with a max length.
pub fn validate_required(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(format!("{field_name} is required"));
    }
    if trimmed.len() > max_len {
        return Some(format!("{field_name} must be at most {max_len} characters"));
    }
    None
}

pub fn validate_role(role: &str) -> Option<String> {
    if ROLES.contains(&role.trim()) {
        None
    } else {
        Some(format!("Role must be one of: {}", ROLES.join(", ")))
    }
}

/// Login form: both fields present, email well-formed.
pub fn validate_login(email: &str, password: &str) -> Vec<String> {
    let mut errors: Vec<String> = vec![];
    errors.extend(validate_email(email));
    if password.is_empty() {
        errors.push("Password is required".to_string());
    }
    errors
}

/// Create/edit user form. A password is only mandatory when creating.
pub fn validate_user_form(form: &UserForm, creating: bool) -> Vec<String> {
    let mut errors: Vec<String> = vec![];
    errors.extend(validate_required(&form.name, "Name", 100));
    errors.extend(validate_email(&form.email));
    errors.extend(validate_role(&form.role));
    if creating || !form.password.trim().is_empty() {
        errors.extend(validate_password(&form.password));
    }
    errors
}
