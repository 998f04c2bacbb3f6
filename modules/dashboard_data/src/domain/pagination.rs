//! Page arithmetic for the invoices table

/// Rows per invoices page
pub const ITEMS_PER_PAGE: u64 = 6;

/// Largest offset the database drivers accept (a signed 64-bit bind).
pub const MAX_OFFSET: u64 = i64::MAX as u64;

/// Row offset of a 1-based page. Page 0 is read as page 1.
pub fn page_offset(page: u64, page_size: u64) -> u64 {
    (page.max(1) - 1).saturating_mul(page_size).min(MAX_OFFSET)
}

/// Pages needed to show `count` rows.
pub fn total_pages(count: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_of_first_pages() {
        assert_eq!(page_offset(1, ITEMS_PER_PAGE), 0);
        assert_eq!(page_offset(2, ITEMS_PER_PAGE), 6);
        assert_eq!(page_offset(3, ITEMS_PER_PAGE), 12);
    }

    #[test]
    fn page_zero_is_first_page() {
        assert_eq!(page_offset(0, ITEMS_PER_PAGE), 0);
    }

    #[test]
    fn huge_page_offset_is_capped() {
        assert_eq!(page_offset(u64::MAX, ITEMS_PER_PAGE), MAX_OFFSET);
        assert_eq!(page_offset(MAX_OFFSET / 2, ITEMS_PER_PAGE), MAX_OFFSET);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, ITEMS_PER_PAGE), 0);
        assert_eq!(total_pages(1, ITEMS_PER_PAGE), 1);
        assert_eq!(total_pages(6, ITEMS_PER_PAGE), 1);
        assert_eq!(total_pages(7, ITEMS_PER_PAGE), 2);
        assert_eq!(total_pages(13, ITEMS_PER_PAGE), 3);
    }

    #[test]
    fn zero_page_size_has_no_pages() {
        assert_eq!(total_pages(10, 0), 0);
    }
}
