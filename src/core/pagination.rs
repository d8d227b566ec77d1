use std::ops::RangeInclusive;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Number of pages needed for `total_items`; never less than one.
#[must_use]
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1)).max(1)
}

/// Clamps a requested page into `[1, total_pages]`.
#[must_use]
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Half-open item bounds `[start, end)` of `page` (1-based).
///
/// Both bounds are capped at `total_items`, so an empty collection yields `(0, 0)`.
#[must_use]
pub fn page_bounds(page: usize, page_size: usize, total_items: usize) -> (usize, usize) {
    let page_size = page_size.max(1);
    let start = page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(total_items);
    let end = start.saturating_add(page_size).min(total_items);
    (start, end)
}

/// Contiguous run of at most `max_visible` page numbers around `current_page`.
///
/// The run is centered where possible and shifted to stay inside
/// `[1, total_pages]`. A `max_visible` of zero is treated as one.
#[must_use]
pub fn visible_page_range(
    current_page: usize,
    total_pages: usize,
    max_visible: usize,
) -> RangeInclusive<usize> {
    let total_pages = total_pages.max(1);
    let current_page = clamp_page(current_page, total_pages);
    let count = max_visible.clamp(1, total_pages);

    let mut start = current_page.saturating_sub(count / 2).max(1);
    if start + count - 1 > total_pages {
        start = total_pages - count + 1;
    }
    start..=start + count - 1
}

#[cfg(test)]
mod tests {
    use super::{clamp_page, page_bounds, total_pages, visible_page_range};

    #[test]
    fn total_pages_is_at_least_one() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn clamp_page_pins_both_ends() {
        assert_eq!(clamp_page(0, 4), 1);
        assert_eq!(clamp_page(3, 4), 3);
        assert_eq!(clamp_page(99, 4), 4);
    }

    #[test]
    fn page_bounds_cap_at_collection_length() {
        assert_eq!(page_bounds(1, 10, 0), (0, 0));
        assert_eq!(page_bounds(1, 10, 25), (0, 10));
        assert_eq!(page_bounds(3, 10, 25), (20, 25));
        assert_eq!(page_bounds(usize::MAX, 10, 25), (25, 25));
    }

    #[test]
    fn visible_page_range_centers_and_shifts_inside_bounds() {
        assert_eq!(visible_page_range(1, 10, 5), 1..=5);
        assert_eq!(visible_page_range(6, 10, 5), 4..=8);
        assert_eq!(visible_page_range(10, 10, 5), 6..=10);
        assert_eq!(visible_page_range(2, 3, 5), 1..=3);
        assert_eq!(visible_page_range(4, 10, 0), 4..=4);
        assert_eq!(visible_page_range(5, 10, 4), 3..=6);
    }
}
