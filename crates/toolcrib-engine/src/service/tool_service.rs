use chrono::NaiveDate;
use tracing::instrument;

use toolcrib_core::certificate::render_certificate;
use toolcrib_core::ops::assignment_ops;
use toolcrib_core::queries::{get_tools, get_tools_paginated, search_tools, PaginatedTools};
use toolcrib_core::{Certificate, Result, Tool, ToolFilter, ToolPageRequest};

use crate::latency::Latency;
use crate::service::SharedStore;

/// Asynchronous facade over tool reads and assignment mutations
///
/// Every method awaits the injected latency first, then takes a read or write
/// guard as appropriate. Business-rule failures come back as `Err` values for
/// the caller to branch on; nothing here panics for them.
#[derive(Debug, Clone)]
pub struct ToolService {
    store: SharedStore,
    latency: Latency,
}

impl ToolService {
    /// Create a service over an existing store handle
    pub fn new(store: SharedStore, latency: Latency) -> Self {
        Self { store, latency }
    }

    /// Filtered, sorted, searched, and paginated tool view
    ///
    /// # Errors
    /// * `InvalidPage` / `InvalidPageSize` - Contract violations in `request`
    #[instrument(skip(self, request), fields(page = request.page, page_size = request.page_size))]
    pub async fn get_tools_paginated(&self, request: &ToolPageRequest) -> Result<PaginatedTools> {
        self.latency.pause().await;
        let store = self.store.read().await;
        get_tools_paginated(&store, request)
    }

    /// Unpaginated filtered tool listing
    pub async fn get_tools(&self, filter: ToolFilter) -> Vec<Tool> {
        self.latency.pause().await;
        let store = self.store.read().await;
        get_tools(&store, filter)
    }

    /// Free-text tool search; blank queries return no results
    pub async fn search(&self, query: &str) -> Vec<Tool> {
        self.latency.pause().await;
        let store = self.store.read().await;
        search_tools(&store, query)
    }

    /// Look up a single tool
    ///
    /// # Errors
    /// * `ToolNotFound` - If the tool doesn't exist
    pub async fn get_tool(&self, tool_id: &str) -> Result<Tool> {
        self.latency.pause().await;
        let store = self.store.read().await;
        store.get_tool(tool_id).cloned()
    }

    /// Assign an unassigned tool to an employee
    ///
    /// `assigned_on` defaults to the store's current day.
    ///
    /// # Errors
    /// See [`assignment_ops::assign_tool`].
    #[instrument(skip(self))]
    pub async fn assign_tool(
        &self,
        tool_id: &str,
        employee_id: &str,
        assigned_on: Option<NaiveDate>,
    ) -> Result<Tool> {
        self.latency.pause().await;
        let mut store = self.store.write().await;
        assignment_ops::assign_tool(&mut store, tool_id, employee_id, assigned_on)
    }

    /// Reassign a currently assigned tool
    ///
    /// # Errors
    /// See [`assignment_ops::reassign_tool`].
    #[instrument(skip(self))]
    pub async fn reassign_tool(
        &self,
        tool_id: &str,
        employee_id: &str,
        assigned_on: Option<NaiveDate>,
    ) -> Result<Tool> {
        self.latency.pause().await;
        let mut store = self.store.write().await;
        assignment_ops::reassign_tool(&mut store, tool_id, employee_id, assigned_on)
    }

    /// Return an assigned tool to the crib
    ///
    /// # Errors
    /// See [`assignment_ops::unassign_tool`].
    #[instrument(skip(self))]
    pub async fn unassign_tool(&self, tool_id: &str) -> Result<Tool> {
        self.latency.pause().await;
        let mut store = self.store.write().await;
        assignment_ops::unassign_tool(&mut store, tool_id)
    }

    /// Render the calibration certificate for a tool
    ///
    /// # Errors
    /// * `ToolNotFound` - If the tool doesn't exist
    pub async fn download_calibration_certificate(&self, tool_id: &str) -> Result<Certificate> {
        self.latency.pause().await;
        let store = self.store.read().await;
        render_certificate(&store, tool_id)
    }
}
