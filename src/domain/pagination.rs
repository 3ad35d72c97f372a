//! Page window math for listings ordered by id.

/// Fixed number of books per page.
pub const BOOKS_PER_PAGE: u32 = 25;

/// A requested page of an ordered listing.
///
/// Pages are 1-based. A page past the end is valid and simply yields no items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    /// Creates a request, clamping `page` and `per_page` to at least 1.
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Number of records to skip.
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.per_page)
    }

    /// Number of records to fetch.
    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }

    /// Number of pages needed for `total` records. Zero records means zero pages.
    pub fn total_pages(&self, total: i64) -> u32 {
        if total <= 0 {
            return 0;
        }
        let per_page = i64::from(self.per_page);
        let pages = (total + per_page - 1) / per_page;
        u32::try_from(pages).unwrap_or(u32::MAX)
    }
}

/// One page of records plus the totals needed to describe it.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: u32,
    pub total_pages: u32,
}

impl<T> Page<T> {
    pub fn new(request: PageRequest, items: Vec<T>, total: i64) -> Self {
        Self {
            items,
            total,
            page: request.page(),
            total_pages: request.total_pages(total),
        }
    }

    /// Pagination descriptor, e.g. `"2 of 3"`.
    pub fn descriptor(&self) -> String {
        format!("{} of {}", self.page, self.total_pages)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_window() {
        let request = PageRequest::new(1, BOOKS_PER_PAGE);
        assert_eq!(request.offset(), 0);
        assert_eq!(request.limit(), 25);
    }

    #[test]
    fn test_later_page_window() {
        let request = PageRequest::new(3, BOOKS_PER_PAGE);
        assert_eq!(request.offset(), 50);
        assert_eq!(request.limit(), 25);
    }

    #[test]
    fn test_page_zero_is_clamped() {
        let request = PageRequest::new(0, BOOKS_PER_PAGE);
        assert_eq!(request.page(), 1);
        assert_eq!(request.offset(), 0);
    }

    #[test]
    fn test_total_pages() {
        let request = PageRequest::new(1, BOOKS_PER_PAGE);
        assert_eq!(request.total_pages(0), 0);
        assert_eq!(request.total_pages(1), 1);
        assert_eq!(request.total_pages(25), 1);
        assert_eq!(request.total_pages(26), 2);
        assert_eq!(request.total_pages(55), 3);
    }

    #[test]
    fn test_descriptor() {
        let page = Page::new(PageRequest::new(2, BOOKS_PER_PAGE), vec![0; 25], 55);
        assert_eq!(page.descriptor(), "2 of 3");

        let past_end = Page::<u8>::new(PageRequest::new(9, BOOKS_PER_PAGE), vec![], 55);
        assert_eq!(past_end.descriptor(), "9 of 3");

        let empty = Page::<u8>::new(PageRequest::new(1, BOOKS_PER_PAGE), vec![], 0);
        assert_eq!(empty.descriptor(), "1 of 0");
    }

    #[test]
    fn test_large_page_offset_does_not_overflow() {
        let request = PageRequest::new(u32::MAX, BOOKS_PER_PAGE);
        assert!(request.offset() > 0);
    }
}
