//! Form-facing and display-facing shapes derived from [`crate::User`].

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{ModelError, UserId};

/// The four editable fields shared by forms, filters and the display view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UserField {
    FirstName,
    LastName,
    Email,
    Department,
}

impl UserField {
    pub fn all() -> &'static [UserField] {
        use UserField::*;
        &[FirstName, LastName, Email, Department]
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserField::FirstName => "First Name",
            UserField::LastName => "Last Name",
            UserField::Email => "Email",
            UserField::Department => "Department",
        }
    }

    pub fn api_name(&self) -> &'static str {
        match self {
            UserField::FirstName => "firstName",
            UserField::LastName => "lastName",
            UserField::Email => "email",
            UserField::Department => "department",
        }
    }
}

impl fmt::Display for UserField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for UserField {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['_', '-'], "").as_str() {
            "firstname" => Ok(UserField::FirstName),
            "lastname" => Ok(UserField::LastName),
            "email" => Ok(UserField::Email),
            "department" => Ok(UserField::Department),
            _ => Err(ModelError::UnknownField(s.to_string())),
        }
    }
}

/// Values edited by the create/edit form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFormData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
}

impl UserFormData {
    pub fn field(&self, field: UserField) -> &str {
        match field {
            UserField::FirstName => &self.first_name,
            UserField::LastName => &self.last_name,
            UserField::Email => &self.email,
            UserField::Department => &self.department,
        }
    }

    pub fn set_field(&mut self, field: UserField, value: impl Into<String>) {
        let slot = match field {
            UserField::FirstName => &mut self.first_name,
            UserField::LastName => &mut self.last_name,
            UserField::Email => &mut self.email,
            UserField::Department => &mut self.department,
        };
        *slot = value.into();
    }
}

/// Table row projection of a user. Recomputed from the record on demand.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDisplay {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
}

impl UserDisplay {
    pub fn field(&self, field: UserField) -> &str {
        match field {
            UserField::FirstName => &self.first_name,
            UserField::LastName => &self.last_name,
            UserField::Email => &self.email,
            UserField::Department => &self.department,
        }
    }

    /// First and last name joined the way the record stores them.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}
