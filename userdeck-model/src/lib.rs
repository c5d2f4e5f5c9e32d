//! Core data model definitions shared across Userdeck crates.
#![allow(missing_docs)]

pub mod error;
pub mod form;
pub mod query;
pub mod user;

// Intentionally curated re-exports for downstream consumers.
pub use error::{ModelError, Result as ModelResult};
pub use form::{UserDisplay, UserField, UserFormData};
pub use query::{
    DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS, PageMarker, PaginationState,
    SortConfig, SortKey, SortOrder, UserFilters,
};
pub use user::{Address, Company, Geo, User, UserId, UserPatch};
