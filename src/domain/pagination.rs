// src/domain/pagination.rs

use serde::Serialize;

/// Page counts above this get compressed with ellipses.
const MAX_UNCOMPRESSED_PAGES: usize = 7;

/// `ceil(len / page_size)`; zero for an empty list.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// The window `[(page-1)*size, page*size)` clamped to the slice.
/// A page past the end yields an empty slice.
pub fn paginate<T>(items: &[T], page_size: usize, page_number: usize) -> &[T] {
    let page_number = page_number.max(1);
    let start = (page_number - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Buttons to show in the pagination control. `None` is an ellipsis.
///
/// Up to seven pages are listed in full. Beyond that the first and last page
/// are always shown with a three-page window around the current one, widened
/// to four pages when the current page is near either end.
pub fn page_numbers(total_pages: usize, current_page: usize) -> Vec<Option<usize>> {
    if total_pages <= MAX_UNCOMPRESSED_PAGES {
        return (1..=total_pages).map(Some).collect();
    }

    let mut pages = vec![Some(1)];

    let mut start = current_page.saturating_sub(1).max(2);
    let mut end = current_page.saturating_add(1).min(total_pages - 1);

    if current_page <= 3 {
        end = 4;
    } else if current_page >= total_pages - 2 {
        start = total_pages - 3;
    }

    if start > 2 {
        pages.push(None);
    }
    pages.extend((start..=end).map(Some));
    if end < total_pages - 1 {
        pages.push(None);
    }

    pages.push(Some(total_pages));
    pages
}

/// One rendered page of results plus what the pagination control needs.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T: Clone> Paginated<T> {
    pub fn new(all: &[T], page_size: usize, current_page: usize) -> Self {
        let current_page = current_page.max(1);
        let total_pages = total_pages(all.len(), page_size);

        Self {
            items: paginate(all, page_size, current_page).to_vec(),
            pages: page_numbers(total_pages, current_page),
            page: current_page,
            total_pages,
            total_items: all.len(),
        }
    }
}

impl<T> Paginated<T> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}
