use serde::{Deserialize, Serialize};

/// Employee - a person eligible to hold tool assignments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier (convention "E<n>")
    pub id: String,

    /// Display name
    pub name: String,
}

impl Employee {
    /// Create a new Employee
    pub fn new(id: String, name: String) -> Self {
        Self { id, name }
    }
}
