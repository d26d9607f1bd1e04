//! Tool query operations
//!
//! Filter, search, sort, and paginate the tool collection. Filter narrows the
//! candidate set first; search then matches within the remaining rows. Sorting
//! is stable, so tools with equal keys keep their deterministic ID order.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::{compare_str, paginate, validate_page_request, PageInfo, SortOrder};
use crate::errors::Result;
use crate::model::Tool;
use crate::ops::Store;

/// Coarse partition of tools by assignment presence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ToolFilter {
    /// Keep every tool
    #[default]
    All,
    /// Keep tools with a current holder
    Assigned,
    /// Keep tools without a current holder
    Available,
}

/// Tool fields accepted as sort keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolSortField {
    Id,
    ToolType,
    Model,
    SerialNumber,
    CalibrationDueDate,
    AssignedTo,
    AssignedOn,
}

/// Parameters for a paginated tool query
#[derive(Debug, Clone)]
pub struct ToolPageRequest {
    /// 1-based page number
    pub page: usize,
    /// Items per page (1..=1000)
    pub page_size: usize,
    /// Assignment filter, applied before search
    pub filter: ToolFilter,
    /// Optional sort key; `None` keeps deterministic ID order
    pub sort_by: Option<ToolSortField>,
    /// Sort direction (ignored when `sort_by` is `None`)
    pub sort_order: SortOrder,
    /// Optional free-text search within the filtered set
    pub search: Option<String>,
}

impl ToolPageRequest {
    /// Request the given page with default filter/sort
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page,
            page_size,
            filter: ToolFilter::default(),
            sort_by: None,
            sort_order: SortOrder::default(),
            search: None,
        }
    }
}

impl Default for ToolPageRequest {
    fn default() -> Self {
        Self::new(1, 50)
    }
}

/// A page of tools plus pagination metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedTools {
    /// Cloned tools in this page
    pub data: Vec<Tool>,
    /// Pagination metadata for the whole filtered set
    pub pagination: PageInfo,
}

/// Check whether a tool matches a search needle (already lowercased)
///
/// Matches on tool type label, model, serial number, and ID; for assigned
/// tools, the resolved holder's name and ID also count.
fn tool_matches(store: &Store, tool: &Tool, needle: &str) -> bool {
    if tool.tool_type.label().to_lowercase().contains(needle)
        || tool.model.to_lowercase().contains(needle)
        || tool.serial_number.to_lowercase().contains(needle)
        || tool.id.to_lowercase().contains(needle)
    {
        return true;
    }

    if let Some(employee_id) = &tool.assigned_to {
        if employee_id.to_lowercase().contains(needle) {
            return true;
        }
        if let Ok(employee) = store.get_employee(employee_id) {
            if employee.name.to_lowercase().contains(needle) {
                return true;
            }
        }
    }

    false
}

/// Filter the tool collection, then search within the filtered rows
///
/// The search needle is trimmed and matched case-insensitively; a blank
/// needle leaves the filtered set unchanged.
pub fn filter_tools<'a>(
    store: &'a Store,
    filter: ToolFilter,
    search: Option<&str>,
) -> Vec<&'a Tool> {
    let filtered = store.list_tools().into_iter().filter(|tool| match filter {
        ToolFilter::All => true,
        ToolFilter::Assigned => tool.is_assigned(),
        ToolFilter::Available => !tool.is_assigned(),
    });

    match search.map(str::trim).filter(|s| !s.is_empty()) {
        Some(needle) => {
            let needle = needle.to_lowercase();
            filtered
                .filter(|tool| tool_matches(store, tool, &needle))
                .collect()
        }
        None => filtered.collect(),
    }
}

/// Ascending comparator for a sort field
///
/// Absent values (unassigned tools) order first; descending queries reverse
/// the whole ordering, which places them last.
fn compare_by_field(a: &Tool, b: &Tool, field: ToolSortField) -> Ordering {
    match field {
        ToolSortField::Id => compare_str(&a.id, &b.id),
        ToolSortField::ToolType => compare_str(a.tool_type.label(), b.tool_type.label()),
        ToolSortField::Model => compare_str(&a.model, &b.model),
        ToolSortField::SerialNumber => compare_str(&a.serial_number, &b.serial_number),
        ToolSortField::CalibrationDueDate => a.calibration_due_date.cmp(&b.calibration_due_date),
        ToolSortField::AssignedTo => match (&a.assigned_to, &b.assigned_to) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(x), Some(y)) => compare_str(x, y),
        },
        ToolSortField::AssignedOn => a.assigned_on.cmp(&b.assigned_on),
    }
}

/// Filtered, searched, sorted, and paginated view over the tool collection
///
/// Returns cloned tools; mutating the result never affects store state.
///
/// # Errors
/// * `InvalidPage` - If `request.page` is 0
/// * `InvalidPageSize` - If `request.page_size` is 0 or exceeds 1000
pub fn get_tools_paginated(store: &Store, request: &ToolPageRequest) -> Result<PaginatedTools> {
    validate_page_request(request.page, request.page_size)?;

    let mut rows = filter_tools(store, request.filter, request.search.as_deref());

    if let Some(field) = request.sort_by {
        rows.sort_by(|a, b| {
            let ordering = compare_by_field(a, b, field);
            match request.sort_order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });
    }

    let cloned: Vec<Tool> = rows.into_iter().cloned().collect();
    let (data, pagination) = paginate(&cloned, request.page, request.page_size);

    Ok(PaginatedTools { data, pagination })
}

/// Unpaginated filtered read over the tool collection
pub fn get_tools(store: &Store, filter: ToolFilter) -> Vec<Tool> {
    filter_tools(store, filter, None)
        .into_iter()
        .cloned()
        .collect()
}

/// Free-text tool search
///
/// A blank query returns no results: typing nothing in the global search box
/// means "show nothing", unlike an unfiltered listing. This differs from
/// employee search on purpose.
pub fn search_tools(store: &Store, query: &str) -> Vec<Tool> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    filter_tools(store, ToolFilter::All, Some(query))
        .into_iter()
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ToolCribError;
    use crate::model::{Employee, ToolType};
    use crate::ops::{assignment_ops, Clock};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn test_store() -> Store {
        let tools = vec![
            Tool::new(
                "T1".to_string(),
                ToolType::HydraulicWrench,
                "HW-500".to_string(),
                "SN-0001".to_string(),
                date(2099, 1, 1),
            ),
            Tool::new(
                "T2".to_string(),
                ToolType::Tensioner,
                "TN-10".to_string(),
                "SN-0002".to_string(),
                date(2099, 1, 1),
            ),
            Tool::new(
                "T3".to_string(),
                ToolType::TorqueGun,
                "TG-7".to_string(),
                "SN-0003".to_string(),
                date(2099, 1, 1),
            ),
        ];
        let employees = vec![
            Employee::new("E1".to_string(), "Alice".to_string()),
            Employee::new("E2".to_string(), "Bob".to_string()),
        ];
        Store::new(&tools, &employees, Clock::Fixed(date(2024, 6, 15)))
    }

    #[test]
    fn test_filter_partitions_by_assignment() {
        let mut store = test_store();
        assignment_ops::assign_tool(&mut store, "T1", "E1", None).unwrap();

        let assigned = filter_tools(&store, ToolFilter::Assigned, None);
        assert_eq!(assigned.len(), 1);
        assert_eq!(assigned[0].id, "T1");

        let available = filter_tools(&store, ToolFilter::Available, None);
        assert_eq!(available.len(), 2);

        assert_eq!(filter_tools(&store, ToolFilter::All, None).len(), 3);
    }

    #[test]
    fn test_search_applies_within_filtered_set() {
        let mut store = test_store();
        assignment_ops::assign_tool(&mut store, "T1", "E1", None).unwrap();

        // "T" matches every tool ID, but the Available filter narrows first
        let rows = filter_tools(&store, ToolFilter::Available, Some("T"));
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|t| t.id != "T1"));
    }

    #[test]
    fn test_search_matches_assigned_employee_name() {
        let mut store = test_store();
        assignment_ops::assign_tool(&mut store, "T1", "E1", None).unwrap();

        let rows = search_tools(&store, "alice");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "T1");

        // Unassigned tools never match on employee fields
        assert!(search_tools(&store, "bob").is_empty());
    }

    #[test]
    fn test_search_trims_and_ignores_case() {
        let store = test_store();
        let rows = search_tools(&store, "  hw-500  ");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "T1");
    }

    #[test]
    fn test_blank_search_returns_empty() {
        let store = test_store();
        assert!(search_tools(&store, "").is_empty());
        assert!(search_tools(&store, "   ").is_empty());
    }

    #[test]
    fn test_paginated_metadata_page_size_one() {
        let store = test_store();
        let request = ToolPageRequest {
            page: 1,
            page_size: 1,
            sort_by: Some(ToolSortField::ToolType),
            ..ToolPageRequest::default()
        };

        let result = get_tools_paginated(&store, &request).unwrap();
        assert_eq!(result.data.len(), 1);
        assert_eq!(result.pagination.total_pages, 3);
        assert!(result.pagination.has_next);
        assert!(!result.pagination.has_previous);
    }

    #[test]
    fn test_paginated_rejects_bad_arguments() {
        let store = test_store();
        assert!(matches!(
            get_tools_paginated(&store, &ToolPageRequest::new(0, 10)),
            Err(ToolCribError::InvalidPage { .. })
        ));
        assert!(matches!(
            get_tools_paginated(&store, &ToolPageRequest::new(1, 1001)),
            Err(ToolCribError::InvalidPageSize { .. })
        ));
    }

    #[test]
    fn test_sort_descending_reverses() {
        let store = test_store();
        let request = ToolPageRequest {
            page: 1,
            page_size: 10,
            sort_by: Some(ToolSortField::Model),
            sort_order: SortOrder::Descending,
            ..ToolPageRequest::default()
        };

        let result = get_tools_paginated(&store, &request).unwrap();
        let models: Vec<&str> = result.data.iter().map(|t| t.model.as_str()).collect();
        assert_eq!(models, vec!["TN-10", "TG-7", "HW-500"]);
    }

    #[test]
    fn test_sort_unassigned_first_ascending_last_descending() {
        let mut store = test_store();
        assignment_ops::assign_tool(&mut store, "T2", "E1", None).unwrap();

        let mut request = ToolPageRequest {
            page: 1,
            page_size: 10,
            sort_by: Some(ToolSortField::AssignedTo),
            ..ToolPageRequest::default()
        };

        let ascending = get_tools_paginated(&store, &request).unwrap();
        assert!(ascending.data.last().unwrap().is_assigned());

        request.sort_order = SortOrder::Descending;
        let descending = get_tools_paginated(&store, &request).unwrap();
        assert!(descending.data.first().unwrap().is_assigned());
        assert!(!descending.data.last().unwrap().is_assigned());
    }

    #[test]
    fn test_results_are_clones() {
        let store = test_store();
        let mut rows = get_tools(&store, ToolFilter::All);
        rows[0].model = "mutated".to_string();
        assert_ne!(store.get_tool(&rows[0].id).unwrap().model, "mutated");
    }
}
