use serde::Serialize;

/// One page of items with the state of the Prev/Next controls.
///
/// The backend reports no totals, so the end of the list is inferred from a
/// page shorter than the page size.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    /// Zero-based page index.
    pub page: usize,
    /// One-based page number for display.
    pub number: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, page: usize, page_size: usize) -> Self {
        let has_next = items.len() >= page_size;
        Self {
            items,
            page,
            number: page + 1,
            has_prev: page > 0,
            has_next,
        }
    }
}
