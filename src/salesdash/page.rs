//! View slice: the page-sized window of the visible list shown at one time.
//!
//! Pages are zero-based here. Clients that show 1-based page numbers convert at
//! their edge.

use serde::Serialize;

/// Page sizes the table offers.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 25, 50];
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Returns `items[page * size .. (page + 1) * size]`, clipped to the list.
///
/// Out-of-range pages and a zero size give an empty slice.
pub fn slice<T>(items: &[T], page: usize, size: usize) -> &[T] {
    if size == 0 {
        return &[];
    }
    let start = match page.checked_mul(size) {
        Some(start) if start < items.len() => start,
        _ => return &[],
    };
    let end = start.saturating_add(size).min(items.len());
    &items[start..end]
}

/// Number of pages needed to show `len` items.
pub fn page_count(len: usize, size: usize) -> usize {
    if size == 0 {
        return 0;
    }
    len.div_ceil(size)
}

/// Where a page sits in the visible list, for "1-10 of 25" style footers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub page: usize,
    pub size: usize,
    pub total: usize,
    pub pages: usize,
    /// 1-based position of the first row on the page, 0 when the page is empty.
    pub first: usize,
    /// 1-based position of the last row on the page, 0 when the page is empty.
    pub last: usize,
}

impl PageInfo {
    pub fn new(page: usize, size: usize, total: usize) -> Self {
        let shown = slice_len(total, page, size);
        let (first, last) = if shown == 0 {
            (0, 0)
        } else {
            let first = page * size + 1;
            (first, first + shown - 1)
        };
        Self {
            page,
            size,
            total,
            pages: page_count(total, size),
            first,
            last,
        }
    }
}

fn slice_len(total: usize, page: usize, size: usize) -> usize {
    match page.checked_mul(size) {
        Some(start) if size > 0 && start < total => size.min(total - start),
        _ => 0,
    }
}
