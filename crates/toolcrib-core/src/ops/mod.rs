pub mod assignment_ops;
pub mod store;

pub use store::{Clock, Store};
