//! Read-only query operations
//!
//! Filtering, free-text search, sorting, and offset pagination over the tool
//! and employee collections. All queries return owned clones; callers may
//! mutate results freely without touching store state.

pub mod employee_queries;
pub mod tool_queries;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ToolCribError};

pub use employee_queries::{
    get_employees, get_employees_paginated, search_employees, EmployeePageRequest,
    EmployeeSortField, PaginatedEmployees,
};
pub use tool_queries::{
    filter_tools, get_tools, get_tools_paginated, search_tools, PaginatedTools, ToolFilter,
    ToolPageRequest, ToolSortField,
};

/// Largest accepted page size
pub const MAX_PAGE_SIZE: usize = 1000;

/// Sort direction for paginated queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Pagination metadata returned alongside every page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// 1-based page number of this page
    pub page: usize,
    /// Requested page size
    pub page_size: usize,
    /// Total items across all pages (after filter/search)
    pub total: usize,
    /// `ceil(total / page_size)`
    pub total_pages: usize,
    /// Whether a page after this one exists
    pub has_next: bool,
    /// Whether a page before this one exists
    pub has_previous: bool,
}

/// Validate pagination arguments against the query contract
///
/// Violations are contract errors (caller bugs), reported loudly rather than
/// clamped silently.
///
/// # Errors
/// * `InvalidPage` - If `page` is 0
/// * `InvalidPageSize` - If `page_size` is 0 or exceeds `MAX_PAGE_SIZE`
pub(crate) fn validate_page_request(page: usize, page_size: usize) -> Result<()> {
    if page < 1 {
        return Err(ToolCribError::InvalidPage { page: page as i64 });
    }
    if page_size < 1 || page_size > MAX_PAGE_SIZE {
        return Err(ToolCribError::InvalidPageSize {
            page_size: page_size as i64,
        });
    }
    Ok(())
}

/// Slice one page out of a sorted/filtered item list
///
/// Items beyond the last page yield an empty data vec with correct metadata.
pub(crate) fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> (Vec<T>, PageInfo) {
    let total = items.len();
    let total_pages = total.div_ceil(page_size);
    let start = (page - 1).saturating_mul(page_size);
    let end = start.saturating_add(page_size).min(total);
    let data = if start < total {
        items[start..end].to_vec()
    } else {
        Vec::new()
    };

    let info = PageInfo {
        page,
        page_size,
        total,
        total_pages,
        has_next: page < total_pages,
        has_previous: page > 1,
    };
    (data, info)
}

/// Case-insensitive string ordering with a case-sensitive tiebreak
///
/// Stands in for the original's locale-aware comparison; stable for equal
/// keys because callers use a stable sort.
pub(crate) fn compare_str(a: &str, b: &str) -> std::cmp::Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_zero_page() {
        assert!(matches!(
            validate_page_request(0, 10),
            Err(ToolCribError::InvalidPage { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_oversized_page_size() {
        assert!(matches!(
            validate_page_request(1, 1001),
            Err(ToolCribError::InvalidPageSize { .. })
        ));
        assert!(matches!(
            validate_page_request(1, 0),
            Err(ToolCribError::InvalidPageSize { .. })
        ));
        assert!(validate_page_request(1, 1000).is_ok());
    }

    #[test]
    fn test_paginate_metadata() {
        let items: Vec<u32> = (1..=7).collect();
        let (data, info) = paginate(&items, 2, 3);
        assert_eq!(data, vec![4, 5, 6]);
        assert_eq!(info.total, 7);
        assert_eq!(info.total_pages, 3);
        assert!(info.has_next);
        assert!(info.has_previous);
    }

    #[test]
    fn test_paginate_past_last_page_is_empty() {
        let items: Vec<u32> = (1..=3).collect();
        let (data, info) = paginate(&items, 5, 2);
        assert!(data.is_empty());
        assert_eq!(info.total_pages, 2);
        assert!(!info.has_next);
        assert!(info.has_previous);
    }

    #[test]
    fn test_compare_str_case_insensitive() {
        use std::cmp::Ordering;
        assert_eq!(compare_str("alpha", "BETA"), Ordering::Less);
        assert_ne!(compare_str("Alpha", "alpha"), Ordering::Equal);
    }
}
