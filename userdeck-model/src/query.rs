//! Query parameter types: filters, sort specification and pagination.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{ModelError, UserField};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page sizes offered by the page-size selector.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

/// Per-field substring constraints. An empty string means "no constraint".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFilters {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
}

impl UserFilters {
    pub fn get(&self, field: UserField) -> &str {
        match field {
            UserField::FirstName => &self.first_name,
            UserField::LastName => &self.last_name,
            UserField::Email => &self.email,
            UserField::Department => &self.department,
        }
    }

    pub fn set(&mut self, field: UserField, value: impl Into<String>) {
        let slot = match field {
            UserField::FirstName => &mut self.first_name,
            UserField::LastName => &mut self.last_name,
            UserField::Email => &mut self.email,
            UserField::Department => &mut self.department,
        };
        *slot = value.into();
    }

    pub fn with(mut self, field: UserField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Fields carrying a constraint, paired with their value.
    pub fn active(&self) -> impl Iterator<Item = (UserField, &str)> + '_ {
        UserField::all()
            .iter()
            .map(|field| (*field, self.get(*field)))
            .filter(|(_, value)| !value.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }
}

/// Columns the table can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Id,
    FirstName,
    LastName,
    Email,
    Department,
}

impl SortKey {
    pub fn all() -> &'static [SortKey] {
        use SortKey::*;
        &[Id, FirstName, LastName, Email, Department]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Id => "ID",
            SortKey::FirstName => "First Name",
            SortKey::LastName => "Last Name",
            SortKey::Email => "Email",
            SortKey::Department => "Department",
        }
    }

    /// The text column behind this key, `None` for the numeric id.
    pub fn as_field(&self) -> Option<UserField> {
        match self {
            SortKey::Id => None,
            SortKey::FirstName => Some(UserField::FirstName),
            SortKey::LastName => Some(UserField::LastName),
            SortKey::Email => Some(UserField::Email),
            SortKey::Department => Some(UserField::Department),
        }
    }
}

impl From<UserField> for SortKey {
    fn from(field: UserField) -> Self {
        match field {
            UserField::FirstName => SortKey::FirstName,
            UserField::LastName => SortKey::LastName,
            UserField::Email => SortKey::Email,
            UserField::Department => SortKey::Department,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for SortKey {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("id") {
            return Ok(SortKey::Id);
        }
        s.parse::<UserField>()
            .map(SortKey::from)
            .map_err(|_| ModelError::UnknownSortKey(s.to_string()))
    }
}

/// Sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

impl FromStr for SortOrder {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            _ => Err(ModelError::UnknownSortOrder(s.to_string())),
        }
    }
}

/// Active sort. `key == None` keeps the collection's natural order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: Option<SortKey>,
    pub order: SortOrder,
}

impl SortConfig {
    pub fn new(key: SortKey, order: SortOrder) -> Self {
        Self {
            key: Some(key),
            order,
        }
    }

    /// Result of activating a column header: the same key flips the
    /// direction, a different key starts ascending.
    pub fn activate(self, key: SortKey) -> Self {
        let order = if self.key == Some(key) {
            self.order.toggled()
        } else {
            SortOrder::Ascending
        };
        Self {
            key: Some(key),
            order,
        }
    }
}

/// Pagination state. `total_items` follows the raw collection; derived
/// views report their own filtered count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    pub current_page: usize,
    pub page_size: usize,
    pub total_items: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total_items: 0,
        }
    }
}

/// One entry in the page selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageMarker {
    Page(usize),
    Ellipsis,
}

impl fmt::Display for PageMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageMarker::Page(page) => write!(f, "{page}"),
            PageMarker::Ellipsis => write!(f, "..."),
        }
    }
}
