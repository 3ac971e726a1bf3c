/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;
/// Number of page buttons shown by the pager.
pub const VISIBLE_PAGE_WINDOW: usize = 5;

/// Slice one 1-based page out of the display list.
///
/// Out-of-range requests are not clamped: page `0`, a page past the last
/// one, or a zero page size all yield an empty slice.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }

    let Some(start) = (page - 1).checked_mul(page_size) else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }

    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Number of pages needed for `total` rows.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Page numbers for the pager, a window of at most `window` pages that
/// keeps `current` as centered as the bounds allow.
pub fn visible_pages(
    current: usize,
    total_pages: usize,
    window: usize,
) -> Vec<usize> {
    if total_pages == 0 || window == 0 {
        return Vec::new();
    }

    let window = window.min(total_pages);
    let current = current.clamp(1, total_pages);
    let half = window / 2;
    let start = current
        .saturating_sub(half)
        .max(1)
        .min(total_pages - window + 1);

    (start..start + window).collect()
}

#[cfg(test)]
mod tests {
    use super::{page_count, paginate, visible_pages};

    #[test]
    fn given_25_rows_when_paginating_by_10_then_pages_hold_10_10_5() {
        let rows: Vec<u32> = (0..25).collect();
        assert_eq!(paginate(&rows, 1, 10).len(), 10);
        assert_eq!(paginate(&rows, 2, 10).len(), 10);
        assert_eq!(paginate(&rows, 3, 10), &rows[20..25]);
        assert_eq!(page_count(rows.len(), 10), 3);
    }

    #[test]
    fn given_out_of_range_page_when_paginating_then_result_is_empty() {
        let rows: Vec<u32> = (0..25).collect();
        assert!(paginate(&rows, 0, 10).is_empty());
        assert!(paginate(&rows, 4, 10).is_empty());
        assert!(paginate(&rows, usize::MAX, 10).is_empty());
        assert!(paginate(&rows, 1, 0).is_empty());
    }

    #[test]
    fn given_zero_page_size_when_counting_pages_then_count_is_zero() {
        assert_eq!(page_count(25, 0), 0);
        assert_eq!(page_count(0, 10), 0);
    }

    #[test]
    fn given_many_pages_when_building_window_then_current_stays_centered() {
        assert_eq!(visible_pages(1, 9, 5), [1, 2, 3, 4, 5]);
        assert_eq!(visible_pages(5, 9, 5), [3, 4, 5, 6, 7]);
        assert_eq!(visible_pages(9, 9, 5), [5, 6, 7, 8, 9]);
    }

    #[test]
    fn given_fewer_pages_than_window_when_building_then_all_pages_listed() {
        assert_eq!(visible_pages(2, 3, 5), [1, 2, 3]);
        assert!(visible_pages(1, 0, 5).is_empty());
    }
}
