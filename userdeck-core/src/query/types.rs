use serde::{Deserialize, Serialize};
use userdeck_model::{SortConfig, User, UserDisplay, UserFilters};

use crate::{
    query::{filtering::filter_users, sorting::sort_user_slice},
    transform::to_display,
};

/// Everything that decides which rows survive and in what order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserQuery {
    pub search: String,
    pub filters: UserFilters,
    pub sort: SortConfig,
}

/// Project every record, keep the ones matching the search term and all
/// active filters, then order them by the active sort.
///
/// The input order is the tie-breaker: records comparing equal (or every
/// record, when no sort key is set) keep their relative position.
pub fn run_query(users: &[User], query: &UserQuery) -> Vec<UserDisplay> {
    let rows = users.iter().map(to_display).collect();
    let mut rows = filter_users(rows, &query.search, &query.filters);
    sort_user_slice(&mut rows, query.sort);

    tracing::debug!(
        total = users.len(),
        matched = rows.len(),
        "user query evaluated"
    );

    rows
}
