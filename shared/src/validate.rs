//! Form validation rules, shared so client and server agree on bounds.
//!
//! Each form gets an explicit validation function returning a structured
//! field-error map; a failure short-circuits before anything touches the
//! network.

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;

use std::collections::BTreeMap;
use std::fmt;

/// Field length bounds enforced on registration input.
pub mod limits {
    pub const NAME_MIN: usize = 2;
    pub const NAME_MAX: usize = 22;
    pub const PASSWORD_MIN: usize = 8;
    pub const PASSWORD_MAX: usize = 22;
}

// =============================================================================
// FIELD ERRORS
// =============================================================================

/// Per-field validation messages, keyed by form field name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl FieldErrors {
    fn push(&mut self, field: &str, message: impl Into<String>) {
        self.errors.entry(field.to_owned()).or_default().push(message.into());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Messages recorded for one field, empty if the field passed.
    #[must_use]
    pub fn field(&self, field: &str) -> &[String] {
        self.errors.get(field).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.errors {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

// =============================================================================
// FIELD CHECKS
// =============================================================================

/// Minimal email shape check: `local@domain` with no whitespace and at least
/// one dot in the domain part.
#[must_use]
pub fn valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    domain.split('.').count() >= 2 && !domain.starts_with('.') && !domain.ends_with('.')
}

fn check_email(errors: &mut FieldErrors, email: &str) {
    if email.is_empty() {
        errors.push("email", "Email is required");
    } else if !valid_email(email) {
        errors.push("email", "Invalid email address");
    }
}

fn check_password(errors: &mut FieldErrors, password: &str) {
    if password.is_empty() {
        errors.push("password", "Password is required");
    } else if password.len() < limits::PASSWORD_MIN {
        errors.push(
            "password",
            format!("Password must be at least {} characters long", limits::PASSWORD_MIN),
        );
    } else if password.len() > limits::PASSWORD_MAX {
        errors.push(
            "password",
            format!("Password must be at most {} characters long", limits::PASSWORD_MAX),
        );
    }
}

fn check_name(errors: &mut FieldErrors, name: &str) {
    if name.is_empty() {
        errors.push("name", "Name is required");
    } else if name.len() < limits::NAME_MIN {
        errors.push("name", format!("Name must be at least {} characters long", limits::NAME_MIN));
    } else if name.len() > limits::NAME_MAX {
        errors.push("name", format!("Name must be at most {} characters long", limits::NAME_MAX));
    }
}

// =============================================================================
// FORM VALIDATORS
// =============================================================================

/// Validate a login form.
///
/// # Errors
///
/// Returns the per-field error map when any field fails.
pub fn validate_login(email: &str, password: &str) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    check_email(&mut errors, email);
    check_password(&mut errors, password);
    errors.into_result()
}

/// Validate a registration form, including the password confirmation.
///
/// # Errors
///
/// Returns the per-field error map when any field fails.
pub fn validate_registration(
    email: &str,
    password: &str,
    confirm_password: &str,
    name: &str,
) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    check_email(&mut errors, email);
    check_password(&mut errors, password);
    check_name(&mut errors, name);
    if confirm_password.is_empty() {
        errors.push("confirmPassword", "Confirm password is required");
    } else if confirm_password != password {
        errors.push("confirmPassword", "Passwords must match");
    }
    errors.into_result()
}
