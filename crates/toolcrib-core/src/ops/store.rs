use std::collections::HashMap;

use chrono::{Local, NaiveDate};

use crate::errors::{Result, ToolCribError};
use crate::model::{Employee, Tool};

/// Source of the day-granularity "current date"
///
/// Calibration comparisons and default assignment dates go through the store's
/// clock so tests can pin a fixed day while production uses the system clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    /// Local system date
    #[default]
    System,
    /// Fixed date, used by tests for deterministic calibration checks
    Fixed(NaiveDate),
}

impl Clock {
    /// Resolve the current day
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System => Local::now().date_naive(),
            Clock::Fixed(date) => *date,
        }
    }
}

/// In-memory store for Tools and Employees
///
/// Owns the canonical working copies of both collections, keyed by ID.
/// Construction clones the seed data, so the store's state and the caller's
/// seed never alias. Not thread-safe on its own; the engine facade wraps it
/// in a single-writer lock.
#[derive(Debug, Clone, Default)]
pub struct Store {
    /// Map of Tool ID to Tool
    pub(crate) tools: HashMap<String, Tool>,
    /// Map of Employee ID to Employee
    pub(crate) employees: HashMap<String, Employee>,
    /// Clock used for calibration checks and default assignment dates
    clock: Clock,
}

/// Sort key for conventional "T<n>" / "E<n>" identifiers
///
/// Splits the ID into a letter prefix and a numeric suffix so that T2 sorts
/// before T10. IDs without a numeric suffix fall back to plain string order.
pub(crate) fn id_sort_key(id: &str) -> (String, u64, String) {
    let split = id.find(|c: char| c.is_ascii_digit()).unwrap_or(id.len());
    let (prefix, rest) = id.split_at(split);
    match rest.parse::<u64>() {
        Ok(n) => (prefix.to_string(), n, String::new()),
        Err(_) => (prefix.to_string(), u64::MAX, rest.to_string()),
    }
}

impl Store {
    /// Create a new Store seeded with the given collections
    ///
    /// The seed slices are cloned; subsequent mutation of the caller's data
    /// does not affect the store, and vice versa.
    pub fn new(tools: &[Tool], employees: &[Employee], clock: Clock) -> Self {
        Self {
            tools: tools.iter().cloned().map(|t| (t.id.clone(), t)).collect(),
            employees: employees
                .iter()
                .cloned()
                .map(|e| (e.id.clone(), e))
                .collect(),
            clock,
        }
    }

    /// Create an empty Store with a fixed clock (test convenience)
    pub fn empty(clock: Clock) -> Self {
        Self {
            tools: HashMap::new(),
            employees: HashMap::new(),
            clock,
        }
    }

    /// The current day according to the store's clock
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Get a Tool by ID
    ///
    /// # Errors
    ///
    /// Returns `ToolNotFound` if the tool doesn't exist.
    pub fn get_tool(&self, id: &str) -> Result<&Tool> {
        self.tools.get(id).ok_or_else(|| ToolCribError::ToolNotFound {
            tool_id: id.to_string(),
        })
    }

    /// Get a mutable reference to a Tool by ID
    ///
    /// # Errors
    ///
    /// Returns `ToolNotFound` if the tool doesn't exist.
    pub fn get_tool_mut(&mut self, id: &str) -> Result<&mut Tool> {
        self.tools
            .get_mut(id)
            .ok_or_else(|| ToolCribError::ToolNotFound {
                tool_id: id.to_string(),
            })
    }

    /// Get an Employee by ID
    ///
    /// # Errors
    ///
    /// Returns `EmployeeNotFound` if the employee doesn't exist.
    pub fn get_employee(&self, id: &str) -> Result<&Employee> {
        self.employees
            .get(id)
            .ok_or_else(|| ToolCribError::EmployeeNotFound {
                employee_id: id.to_string(),
            })
    }

    /// List all Tools in deterministic ID order (T2 before T10)
    pub fn list_tools(&self) -> Vec<&Tool> {
        let mut tools: Vec<&Tool> = self.tools.values().collect();
        tools.sort_by_key(|t| id_sort_key(&t.id));
        tools
    }

    /// List all Employees in deterministic ID order
    pub fn list_employees(&self) -> Vec<&Employee> {
        let mut employees: Vec<&Employee> = self.employees.values().collect();
        employees.sort_by_key(|e| id_sort_key(&e.id));
        employees
    }

    /// Insert a Tool into the store
    ///
    /// This is an internal method used by test helpers.
    pub fn insert_tool(&mut self, tool: Tool) {
        self.tools.insert(tool.id.clone(), tool);
    }

    /// Insert an Employee into the store
    ///
    /// This is an internal method used by test helpers.
    pub fn insert_employee(&mut self, employee: Employee) {
        self.employees.insert(employee.id.clone(), employee);
    }

    /// Number of tools in the store
    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// Number of employees in the store
    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }
}
