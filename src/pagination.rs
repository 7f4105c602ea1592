//! Pagination parameters shared by repository queries.

/// Number of categories returned per listing page.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 2;

/// 1-based page window applied to repository listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Offset of the first record of the page. Pages below 1 are clamped to 1.
    pub fn offset(&self) -> usize {
        (self.page.max(1) - 1) * self.per_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_zero_based_window_start() {
        let pagination = Pagination {
            page: 3,
            per_page: DEFAULT_ITEMS_PER_PAGE,
        };
        assert_eq!(pagination.offset(), 4);
    }

    #[test]
    fn page_zero_is_clamped_to_first_page() {
        let pagination = Pagination {
            page: 0,
            per_page: DEFAULT_ITEMS_PER_PAGE,
        };
        assert_eq!(pagination.offset(), 0);
    }
}
