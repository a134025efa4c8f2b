//! Deterministic pagination over the filtered result set.
//!
//! Two jobs: slicing the result list into fixed-size pages, and deciding
//! which page-number controls to render (first, last, a window of two pages
//! around the current one, with a single ellipsis over each collapsed gap).

/// Results shown per page.
pub const PAGE_SIZE: usize = 10;

/// One element of the page-control row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    Page(usize),
    Ellipsis,
}

/// Number of pages needed for `total_items` results. Zero results means
/// zero pages (the control row is not rendered at all).
pub fn total_pages(total_items: usize) -> usize {
    total_items.div_ceil(PAGE_SIZE)
}

/// The half-open slice `[(page-1)*P, page*P)` of `items`, clamped to the
/// list. A page beyond the end yields an empty slice; callers are expected
/// to bounds-check page numbers before dispatching them (see the reducer).
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    let start = (page.saturating_sub(1) * PAGE_SIZE).min(items.len());
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}

/// Whether the "previous" control is enabled.
pub fn has_previous(current: usize) -> bool {
    current > 1
}

/// Whether the "next" control is enabled.
pub fn has_next(current: usize, total: usize) -> bool {
    current < total
}

/// The page-number controls to render for `current` of `total` pages.
///
/// Always shows page 1 and page `total`, plus the contiguous window
/// `current-2 ..= current+2`. A gap between the window and either end
/// collapses into one [`PageControl::Ellipsis`], emitted where the first
/// skipped page would sit (exactly `current-3` before the window and
/// `current+3` after it).
pub fn page_controls(current: usize, total: usize) -> Vec<PageControl> {
    let mut controls = Vec::new();
    for page in 1..=total {
        let in_window = page + 2 >= current && page <= current + 2;
        if page == 1 || page == total || in_window {
            controls.push(PageControl::Page(page));
        } else if page + 3 == current && page > 1 {
            controls.push(PageControl::Ellipsis);
        } else if page == current + 3 && page < total {
            controls.push(PageControl::Ellipsis);
        }
    }
    controls
}
