use userdeck_core::{FormErrors, display_to_form, validate_form};
use userdeck_model::{UserDisplay, UserField, UserFormData, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit(UserId),
}

/// State of the open create/edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserForm {
    pub mode: FormMode,
    pub data: UserFormData,
    pub errors: FormErrors,
    pub submitting: bool,
}

impl UserForm {
    pub fn add() -> Self {
        Self {
            mode: FormMode::Add,
            data: UserFormData::default(),
            errors: FormErrors::default(),
            submitting: false,
        }
    }

    /// Open the edit form seeded from the record's table row.
    pub fn edit(user: &UserDisplay) -> Self {
        Self {
            mode: FormMode::Edit(user.id),
            data: display_to_form(user),
            errors: FormErrors::default(),
            submitting: false,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Add => "Add New User",
            FormMode::Edit(_) => "Edit User",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Add => "Add User",
            FormMode::Edit(_) => "Update User",
        }
    }

    /// Edit one field; its validation message goes away until the next
    /// submit.
    pub fn set_field(&mut self, field: UserField, value: impl Into<String>) {
        self.data.set_field(field, value);
        self.errors.clear_field(field);
    }

    pub fn error(&self, field: UserField) -> Option<&'static str> {
        self.errors.get(field)
    }

    /// Run validation, keeping the messages for display. Returns whether the
    /// form may be sent.
    pub fn validate(&mut self) -> bool {
        match validate_form(&self.data) {
            Ok(()) => {
                self.errors = FormErrors::default();
                true
            }
            Err(errors) => {
                self.errors = errors;
                false
            }
        }
    }
}
