//! # Userdeck Core
//!
//! Pure logic behind the Userdeck dashboard. Nothing in this crate performs
//! I/O; the dashboard crate owns the remote gateway and the stateful store and
//! calls into these functions to derive what it shows.
//!
//! ## Overview
//!
//! - **Record shaping** ([`transform`]): wire record to form data, form data
//!   back to a partial record, and the display projection used by the table.
//! - **Form validation** ([`validation`]): the required-field and email rules
//!   checked before any remote call.
//! - **Query pipeline** ([`query`]): free-text search, per-field filters,
//!   stable sorting and pagination over the full fetched collection.
//!
//! ## Examples
//!
//! ```
//! use userdeck_core::query::{UserQuery, run_query};
//! use userdeck_model::{User, SortConfig, SortKey, SortOrder};
//!
//! let users = vec![
//!     User { id: 1, name: "Leanne Graham".into(), ..Default::default() },
//!     User { id: 2, name: "Ervin Howell".into(), ..Default::default() },
//! ];
//! let query = UserQuery {
//!     search: "ervin".into(),
//!     sort: SortConfig::new(SortKey::Id, SortOrder::Descending),
//!     ..Default::default()
//! };
//!
//! let rows = run_query(&users, &query);
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0].first_name, "Ervin");
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Mapping between wire records, form data and display views
pub mod transform;

/// Local form validation rules
pub mod validation;

/// Client-side search, filter, sort and pagination
pub mod query;

pub use transform::{display_to_form, from_form_data, to_display, to_form_data};
pub use validation::{FieldError, FormErrors, validate_form};
