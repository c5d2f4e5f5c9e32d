use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use userdeck_model::{UserField, UserFormData};

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// A single rejected form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: UserField,
    pub message: &'static str,
}

/// Every problem found in a submitted form, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Error)]
#[error("form has {} invalid field(s)", .errors.len())]
pub struct FormErrors {
    errors: Vec<FieldError>,
}

impl FormErrors {
    pub fn get(&self, field: UserField) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Drop the message for `field`, e.g. once the user edits it again.
    pub fn clear_field(&mut self, field: UserField) {
        self.errors.retain(|error| error.field != field);
    }

    fn push(&mut self, field: UserField, message: &'static str) {
        self.errors.push(FieldError { field, message });
    }
}

/// Check the form before anything is sent to the remote service.
pub fn validate_form(form: &UserFormData) -> Result<(), FormErrors> {
    let mut errors = FormErrors::default();

    if form.first_name.trim().is_empty() {
        errors.push(UserField::FirstName, "First name is required");
    }

    if form.last_name.trim().is_empty() {
        errors.push(UserField::LastName, "Last name is required");
    }

    if form.email.trim().is_empty() {
        errors.push(UserField::Email, "Email is required");
    } else if !EMAIL_PATTERN.is_match(&form.email) {
        errors.push(UserField::Email, "Please enter a valid email address");
    }

    if form.department.trim().is_empty() {
        errors.push(UserField::Department, "Department is required");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        tracing::debug!("form rejected with {} error(s)", errors.len());
        Err(errors)
    }
}
