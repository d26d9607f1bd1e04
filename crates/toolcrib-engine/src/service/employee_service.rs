use toolcrib_core::queries::{
    get_employees, get_employees_paginated, search_employees, EmployeePageRequest,
    PaginatedEmployees,
};
use toolcrib_core::{Employee, Result};

use crate::latency::Latency;
use crate::service::SharedStore;

/// Asynchronous facade over employee reads
///
/// Read-only: employees are never created, mutated, or deleted at runtime.
#[derive(Debug, Clone)]
pub struct EmployeeService {
    store: SharedStore,
    latency: Latency,
}

impl EmployeeService {
    /// Create a service over an existing store handle
    pub fn new(store: SharedStore, latency: Latency) -> Self {
        Self { store, latency }
    }

    /// The full employee collection
    pub async fn get_employees(&self) -> Vec<Employee> {
        self.latency.pause().await;
        let store = self.store.read().await;
        get_employees(&store)
    }

    /// Searched, sorted, and paginated employee view
    ///
    /// # Errors
    /// * `InvalidPage` / `InvalidPageSize` - Contract violations in `request`
    pub async fn get_employees_paginated(
        &self,
        request: &EmployeePageRequest,
    ) -> Result<PaginatedEmployees> {
        self.latency.pause().await;
        let store = self.store.read().await;
        get_employees_paginated(&store, request)
    }

    /// Free-text employee search; blank queries return everyone
    pub async fn search_employees(&self, query: &str) -> Vec<Employee> {
        self.latency.pause().await;
        let store = self.store.read().await;
        search_employees(&store, query)
    }

    /// Look up a single employee
    ///
    /// # Errors
    /// * `EmployeeNotFound` - If the employee doesn't exist
    pub async fn get_employee(&self, employee_id: &str) -> Result<Employee> {
        self.latency.pause().await;
        let store = self.store.read().await;
        store.get_employee(employee_id).cloned()
    }
}
