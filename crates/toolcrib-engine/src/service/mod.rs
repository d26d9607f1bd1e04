//! Service facades over the shared store
//!
//! The canonical surface is split per entity: `ToolService` owns every tool
//! read and all mutations, `EmployeeService` owns employee reads. Both hold
//! the same store handle, so mutations are immediately visible to reads.

pub mod employee_service;
pub mod tool_service;

use std::sync::Arc;

use tokio::sync::RwLock;

use toolcrib_core::{Clock, Employee, Store, Tool};

use crate::latency::Latency;

pub use employee_service::EmployeeService;
pub use tool_service::ToolService;

/// Shared handle to the entity store: one writer, many readers
pub type SharedStore = Arc<RwLock<Store>>;

/// Constructor facade bundling both services over one store
///
/// Seeds are cloned at construction; the running inventory never aliases the
/// caller's data.
#[derive(Debug, Clone)]
pub struct Inventory {
    /// Tool reads and assignment mutations
    pub tools: ToolService,
    /// Employee reads
    pub employees: EmployeeService,
}

impl Inventory {
    /// Build an inventory from seed collections
    pub fn new(tools: &[Tool], employees: &[Employee], clock: Clock, latency: Latency) -> Self {
        let store: SharedStore = Arc::new(RwLock::new(Store::new(tools, employees, clock)));
        Self {
            tools: ToolService::new(Arc::clone(&store), latency),
            employees: EmployeeService::new(store, latency),
        }
    }
}
