use std::cmp::Reverse;
use userdeck_model::{SortConfig, SortKey, SortOrder, UserDisplay};

/// Comparable value extracted from a row for one sort key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum RowKey {
    Id(u64),
    Text(String),
}

fn extract_key(row: &UserDisplay, key: SortKey) -> RowKey {
    match key.as_field() {
        None => RowKey::Id(row.id),
        Some(field) => RowKey::Text(row.field(field).to_lowercase()),
    }
}

/// Sort rows in-place. The sort is stable in both directions, and a config
/// without a key leaves the slice untouched.
pub fn sort_user_slice(items: &mut [UserDisplay], sort: SortConfig) {
    let Some(key) = sort.key else {
        return;
    };

    // Keys are extracted once per row; equal keys keep their input order.
    match sort.order {
        SortOrder::Ascending => items.sort_by_cached_key(|row| extract_key(row, key)),
        SortOrder::Descending => items.sort_by_cached_key(|row| Reverse(extract_key(row, key))),
    }
}
