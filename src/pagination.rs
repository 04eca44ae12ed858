// ABOUTME: Page-based pagination types for list operations
// ABOUTME: Provides 1-based page slicing with total counts and has-more metadata
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recette

use serde::{Deserialize, Serialize};

/// Default number of items per page for list operations
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Upper bound on requested page size
pub const MAX_PAGE_SIZE: usize = 100;

/// Pagination parameters for page-based queries
///
/// Pages are 1-based: page 1 covers indexes `[0, page_size)` of the filtered
/// result set. Out-of-range parameters are normalized rather than rejected
/// (page is floored at 1, page size is clamped to `1..=MAX_PAGE_SIZE`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageParams {
    /// 1-based page number
    pub page: usize,
    /// Maximum number of items per page
    pub page_size: usize,
}

impl PageParams {
    /// Create normalized pagination parameters
    #[must_use]
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Zero-based index of the first item on this page
    #[must_use]
    pub const fn offset(&self) -> usize {
        (self.page - 1) * self.page_size
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Paginated response containing one page of items and pagination metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The items in this page
    pub data: Vec<T>,

    /// Echo of the requested 1-based page number
    pub page: usize,

    /// Echo of the requested page size
    pub page_size: usize,

    /// Total number of items in the filtered set (not just this page)
    pub total_count: usize,

    /// Whether items exist past the end of this page
    pub has_more: bool,
}

impl<T> Page<T> {
    /// Slice one page out of an already-filtered result set
    ///
    /// `total_count` reports the filtered set's size and `has_more` is true
    /// when the page's end index (`offset + page_size`) falls short of it. A
    /// page past the end of the set yields empty data with `has_more` false.
    #[must_use]
    pub fn paginate(items: Vec<T>, params: PageParams) -> Self {
        let total_count = items.len();
        let start = params.offset();
        let end = start + params.page_size;
        let data: Vec<T> = items
            .into_iter()
            .skip(start)
            .take(params.page_size)
            .collect();

        Self {
            data,
            page: params.page,
            page_size: params.page_size,
            total_count,
            has_more: end < total_count,
        }
    }

    /// Create an empty page for the given parameters
    #[must_use]
    pub const fn empty(params: PageParams) -> Self {
        Self {
            data: Vec::new(),
            page: params.page,
            page_size: params.page_size,
            total_count: 0,
            has_more: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_page_has_no_more() {
        let page = Page::paginate(vec![1, 2, 3], PageParams::new(1, 10));
        assert_eq!(page.data.len(), 3);
        assert_eq!(page.total_count, 3);
        assert!(!page.has_more);
    }

    #[test]
    fn test_split_pages_report_has_more() {
        let first = Page::paginate(vec![1, 2, 3], PageParams::new(1, 2));
        assert_eq!(first.data, vec![1, 2]);
        assert!(first.has_more);

        let second = Page::paginate(vec![1, 2, 3], PageParams::new(2, 2));
        assert_eq!(second.data, vec![3]);
        assert!(!second.has_more);
        assert_eq!(second.total_count, 3);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let page = Page::paginate(vec![1, 2, 3], PageParams::new(5, 2));
        assert!(page.data.is_empty());
        assert_eq!(page.total_count, 3);
        assert!(!page.has_more);
    }

    #[test]
    fn test_params_are_normalized() {
        let params = PageParams::new(0, 0);
        assert_eq!(params.page, 1);
        assert_eq!(params.page_size, 1);
        assert_eq!(PageParams::new(1, 10_000).page_size, MAX_PAGE_SIZE);
    }

    #[test]
    fn test_page_serializes_camel_case() {
        let page = Page::paginate(vec![1], PageParams::default());
        let json = serde_json::to_value(&page).unwrap();
        assert!(json.get("pageSize").is_some());
        assert!(json.get("totalCount").is_some());
        assert!(json.get("hasMore").is_some());
    }
}
