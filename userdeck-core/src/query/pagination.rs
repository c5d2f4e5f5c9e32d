//! Fixed-size pages over the filtered, ordered rows.
//!
//! Pages are 1-based. A page past the end is empty rather than an error, and
//! nothing here clamps the requested page to the available range.

use serde::{Deserialize, Serialize};
use userdeck_model::PageMarker;

/// Pages shown on each side of the current page in the selector.
const WINDOW_DELTA: usize = 2;

/// One page of rows plus the numbers needed to render its footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub current_page: usize,
    pub page_size: usize,
    /// Row count after filtering, before slicing.
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Selector entries for this page; empty when there are no rows.
    pub fn page_numbers(&self) -> Vec<PageMarker> {
        page_window(self.current_page, self.total_pages)
    }

    pub fn summary(&self) -> Option<PageSummary> {
        page_summary(self.current_page, self.page_size, self.total_items)
    }
}

/// "Showing `start_item` to `end_item` of `total_items` results".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSummary {
    pub start_item: usize,
    pub end_item: usize,
    pub total_items: usize,
}

impl std::fmt::Display for PageSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Showing {} to {} of {} results",
            self.start_item, self.end_item, self.total_items
        )
    }
}

/// `ceil(total_items / page_size)`; zero when there is nothing to page.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// The `[(page - 1) * size, page * size)` window of `items`, clamped to the
/// slice bounds.
pub fn page_slice<T>(items: &[T], current_page: usize, page_size: usize) -> &[T] {
    if current_page == 0 {
        return &[];
    }
    let start = (current_page - 1).saturating_mul(page_size).min(items.len());
    let end = current_page.saturating_mul(page_size).min(items.len());
    &items[start..end]
}

/// Slice an ordered row set into the requested page.
pub fn paginate<T: Clone>(items: &[T], current_page: usize, page_size: usize) -> Page<T> {
    Page {
        items: page_slice(items, current_page, page_size).to_vec(),
        current_page,
        page_size,
        total_items: items.len(),
        total_pages: total_pages(items.len(), page_size),
    }
}

/// Page selector entries: the first and last page are always present, up to
/// two pages either side of the current one are listed, and any skipped run
/// collapses into a single [`PageMarker::Ellipsis`].
pub fn page_window(current_page: usize, total_pages: usize) -> Vec<PageMarker> {
    if total_pages == 0 {
        return Vec::new();
    }

    let low = current_page.saturating_sub(WINDOW_DELTA).max(2);
    let high = current_page
        .saturating_add(WINDOW_DELTA)
        .min(total_pages - 1);

    let mut markers = vec![PageMarker::Page(1)];
    if current_page > WINDOW_DELTA + 2 {
        markers.push(PageMarker::Ellipsis);
    }

    markers.extend((low..=high).map(PageMarker::Page));

    if current_page.saturating_add(WINDOW_DELTA) < total_pages - 1 {
        markers.push(PageMarker::Ellipsis);
        markers.push(PageMarker::Page(total_pages));
    } else if total_pages > 1 {
        markers.push(PageMarker::Page(total_pages));
    }

    markers
}

/// Footer summary for a page, or `None` when there are no rows at all.
pub fn page_summary(
    current_page: usize,
    page_size: usize,
    total_items: usize,
) -> Option<PageSummary> {
    if total_items == 0 {
        return None;
    }

    let first_index = current_page
        .saturating_sub(1)
        .saturating_mul(page_size);
    Some(PageSummary {
        start_item: first_index.saturating_add(1).min(total_items),
        end_item: current_page.saturating_mul(page_size).min(total_items),
        total_items,
    })
}
