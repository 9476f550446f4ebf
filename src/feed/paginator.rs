//! Fixed-size pagination for feeds.

use serde::Serialize;

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Metadata describing one page of a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    /// 1-based page number.
    pub number: u32,
    /// Items per page.
    pub per_page: u32,
    /// Items across all pages.
    pub total_items: u64,
    /// Number of pages; an empty result still has one (empty) page.
    pub num_pages: u32,
    /// Whether a later page has items.
    pub has_next: bool,
    /// Whether this is not the first page.
    pub has_previous: bool,
}

/// One page of items with its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// Items on this page, in feed order.
    pub items: Vec<T>,
    /// Page metadata.
    pub info: PageInfo,
}

impl<T> Page<T> {
    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Splits an ordered result set into pages of `per_page` items.
///
/// Page numbers below 1 are treated as page 1. Pages past the end are
/// empty rather than an error.
///
/// # Examples
///
/// ```
/// use yatube::feed::Paginator;
///
/// let paginator = Paginator::new(10);
/// assert_eq!(paginator.offset(3), 20);
/// assert!(!paginator.info(2, 11).has_next);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    per_page: u32,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Paginator {
    /// Create a paginator. A page size of 0 is raised to 1.
    pub fn new(per_page: u32) -> Self {
        Self {
            per_page: per_page.max(1),
        }
    }

    /// Items per page.
    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Clamp a requested page number to a valid one.
    pub fn normalize(&self, page: u32) -> u32 {
        page.max(1)
    }

    /// Row offset of the first item on `page`.
    pub fn offset(&self, page: u32) -> i64 {
        i64::from(self.normalize(page) - 1) * i64::from(self.per_page)
    }

    /// Row limit for one page.
    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }

    /// Compute the metadata for `page` of a result set with `total_items`.
    pub fn info(&self, page: u32, total_items: u64) -> PageInfo {
        let number = self.normalize(page);
        let per_page = u64::from(self.per_page);
        let num_pages = total_items.div_ceil(per_page).max(1);
        let num_pages = u32::try_from(num_pages).unwrap_or(u32::MAX);

        PageInfo {
            number,
            per_page: self.per_page,
            total_items,
            num_pages,
            has_next: number < num_pages,
            has_previous: number > 1,
        }
    }

    /// Assemble a page from already-sliced items.
    pub fn page<T>(&self, page: u32, items: Vec<T>, total_items: u64) -> Page<T> {
        Page {
            items,
            info: self.info(page, total_items),
        }
    }
}
