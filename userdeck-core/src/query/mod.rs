pub mod filtering;
pub mod pagination;
pub mod sorting;
pub mod types;

pub use filtering::{filter_users, matches_filters, matches_search};
pub use pagination::{
    Page, PageSummary, page_slice, page_summary, page_window, paginate,
    total_pages,
};
pub use sorting::sort_user_slice;
pub use types::*;
