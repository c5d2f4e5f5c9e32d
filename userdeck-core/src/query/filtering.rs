//! Free-text search and per-field filters over display rows.
//!
//! Both predicates are case-insensitive substring matches. They are
//! independent of each other and combine with AND: a row must match the
//! search term (when one is set) and every non-empty filter.

use userdeck_model::{UserDisplay, UserField, UserFilters};

/// Whether `row` matches the free-text `term`.
///
/// Checks the four text columns and the decimal id. An empty term matches
/// everything.
pub fn matches_search(row: &UserDisplay, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    let needle = term.to_lowercase();
    UserField::all()
        .iter()
        .any(|field| row.field(*field).to_lowercase().contains(&needle))
        || row.id.to_string().contains(&needle)
}

/// Whether `row` satisfies every active filter.
pub fn matches_filters(row: &UserDisplay, filters: &UserFilters) -> bool {
    filters.active().all(|(field, value)| {
        row.field(field)
            .to_lowercase()
            .contains(&value.to_lowercase())
    })
}

/// Keep the rows matching both the search term and the filter set,
/// preserving input order.
pub fn filter_users(
    rows: Vec<UserDisplay>,
    search: &str,
    filters: &UserFilters,
) -> Vec<UserDisplay> {
    rows.into_iter()
        .filter(|row| matches_search(row, search) && matches_filters(row, filters))
        .collect()
}
