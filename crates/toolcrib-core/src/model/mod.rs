pub mod employee;
pub mod tool;

pub use employee::Employee;
pub use tool::{Tool, ToolType};
