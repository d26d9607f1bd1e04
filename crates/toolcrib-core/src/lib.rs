//! Tool Crib Core - Canonical in-memory inventory kernel
//!
//! This crate provides the foundational data structures and operations for the
//! tool crib, including:
//! - Tool and Employee models with assignment state
//! - An entity store owning canonical copies of the seed collections
//! - Assignment operations (assign/reassign/unassign) with invariant enforcement
//! - Read-only query operations with filtering, search, sorting, and pagination
//! - Calibration certificate rendering for Markdown export
//!
//! The kernel is synchronous and performs no I/O; the asynchronous service
//! contract lives in `toolcrib-engine`.

pub mod certificate;
pub mod errors;
pub mod logging;
pub mod model;
pub mod ops;
pub mod queries;

// Re-export commonly used types
pub use certificate::Certificate;
pub use errors::{Result, ToolCribError};
pub use model::{Employee, Tool, ToolType};
pub use ops::{Clock, Store};
pub use queries::{
    EmployeeSortField, PageInfo, SortOrder, ToolFilter, ToolPageRequest, ToolSortField,
};
