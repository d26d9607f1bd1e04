//! Tool Crib Engine - Asynchronous service facade
//!
//! Wraps the synchronous kernel in the public asynchronous contract the UI
//! consumes: per-entity services over a shared store handle, with an
//! injectable artificial latency standing in for network round-trips. A real
//! networked backend is intended to replace these services without changing
//! the observable contract.
//!
//! Writes are serialized through a single-writer lock; reads run concurrently
//! against shared read guards.

pub mod latency;
pub mod service;

pub use latency::Latency;
pub use service::{EmployeeService, Inventory, SharedStore, ToolService};
