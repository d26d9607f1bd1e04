//! Employee query operations
//!
//! Search and pagination over the employee collection. Note the deliberate
//! asymmetry with tool search: a blank employee query returns the full
//! collection, because the employee picker shows everyone until the user
//! starts typing.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::{compare_str, paginate, validate_page_request, PageInfo, SortOrder};
use crate::errors::Result;
use crate::model::Employee;
use crate::ops::Store;

/// Employee fields accepted as sort keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeSortField {
    Id,
    Name,
}

/// Parameters for a paginated employee query
#[derive(Debug, Clone)]
pub struct EmployeePageRequest {
    /// 1-based page number
    pub page: usize,
    /// Items per page (1..=1000)
    pub page_size: usize,
    /// Optional substring search on name or ID
    pub search: Option<String>,
    /// Optional sort key; `None` keeps deterministic ID order
    pub sort_by: Option<EmployeeSortField>,
    /// Sort direction (ignored when `sort_by` is `None`)
    pub sort_order: SortOrder,
}

impl EmployeePageRequest {
    /// Request the given page with default search/sort
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page,
            page_size,
            search: None,
            sort_by: None,
            sort_order: SortOrder::default(),
        }
    }
}

impl Default for EmployeePageRequest {
    fn default() -> Self {
        Self::new(1, 50)
    }
}

/// A page of employees plus pagination metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedEmployees {
    /// Cloned employees in this page
    pub data: Vec<Employee>,
    /// Pagination metadata for the whole matched set
    pub pagination: PageInfo,
}

fn matching_employees<'a>(store: &'a Store, query: Option<&str>) -> Vec<&'a Employee> {
    let employees = store.list_employees();
    match query.map(str::trim).filter(|q| !q.is_empty()) {
        Some(needle) => {
            let needle = needle.to_lowercase();
            employees
                .into_iter()
                .filter(|e| {
                    e.name.to_lowercase().contains(&needle)
                        || e.id.to_lowercase().contains(&needle)
                })
                .collect()
        }
        None => employees,
    }
}

/// The full employee collection, in deterministic ID order
pub fn get_employees(store: &Store) -> Vec<Employee> {
    store.list_employees().into_iter().cloned().collect()
}

/// Free-text employee search
///
/// Case-insensitive substring match on name or ID. A blank query returns the
/// full collection (the employee picker shows all candidates by default).
pub fn search_employees(store: &Store, query: &str) -> Vec<Employee> {
    matching_employees(store, Some(query))
        .into_iter()
        .cloned()
        .collect()
}

/// Searched, sorted, and paginated view over the employee collection
///
/// # Errors
/// * `InvalidPage` - If `request.page` is 0
/// * `InvalidPageSize` - If `request.page_size` is 0 or exceeds 1000
pub fn get_employees_paginated(
    store: &Store,
    request: &EmployeePageRequest,
) -> Result<PaginatedEmployees> {
    validate_page_request(request.page, request.page_size)?;

    let mut rows = matching_employees(store, request.search.as_deref());

    if let Some(field) = request.sort_by {
        rows.sort_by(|a, b| {
            let ordering = match field {
                EmployeeSortField::Id => compare_str(&a.id, &b.id),
                EmployeeSortField::Name => compare_str(&a.name, &b.name),
            };
            match request.sort_order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });
    }

    let cloned: Vec<Employee> = rows.into_iter().cloned().collect();
    let (data, pagination) = paginate(&cloned, request.page, request.page_size);

    Ok(PaginatedEmployees { data, pagination })
}
