use thiserror::Error;

/// Result type alias using ToolCribError
pub type Result<T> = std::result::Result<T, ToolCribError>;

/// Canonical error type for the tool crib kernel
///
/// Two classes of error share this enum:
///
/// - **Contract errors** (`InvalidPage`, `InvalidPageSize`): caller bugs in the
///   query surface. These indicate malformed arguments and should be treated as
///   programmer errors by the caller.
/// - **Business-rule failures** (everything else): expected outcomes of
///   assignment operations that the UI surfaces to the user. They are always
///   returned as values and never cause a panic.
///
/// Use [`ToolCribError::is_business_rule`] to distinguish the two classes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolCribError {
    // ===== Contract Errors =====
    /// Page number is out of contract (must be >= 1)
    #[error("Invalid page: {page} (page must be >= 1)")]
    InvalidPage { page: i64 },

    /// Page size is out of contract (must be between 1 and 1000)
    #[error("Invalid page size: {page_size} (page size must be between 1 and 1000)")]
    InvalidPageSize { page_size: i64 },

    // ===== Business-Rule Failures =====
    /// Tool not found in store
    #[error("Tool not found: {tool_id}")]
    ToolNotFound { tool_id: String },

    /// Employee not found in store
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound { employee_id: String },

    /// Tool is already assigned to the same employee (distinct from AlreadyAssignedToOther)
    #[error("Tool {tool_id} is already assigned to employee {employee_id}")]
    AlreadyAssignedToEmployee {
        tool_id: String,
        employee_id: String,
    },

    /// Tool is already assigned to a different employee
    #[error("Tool {tool_id} is already assigned to a different employee ({employee_id})")]
    AlreadyAssignedToOther {
        tool_id: String,
        employee_id: String,
    },

    /// Tool calibration is overdue and the tool may not be assigned
    #[error("Tool {tool_id} calibration is overdue (due {due_date})")]
    CalibrationOverdue {
        tool_id: String,
        due_date: chrono::NaiveDate,
    },

    /// Tool is not currently assigned
    #[error("Tool {tool_id} is not currently assigned")]
    NotAssigned { tool_id: String },
}

impl ToolCribError {
    /// Get the stable error code for this error
    ///
    /// Codes are stable across releases and suitable for programmatic handling
    /// and external API responses.
    pub fn code(&self) -> &'static str {
        match self {
            ToolCribError::InvalidPage { .. } => "ERR_INVALID_PAGE",
            ToolCribError::InvalidPageSize { .. } => "ERR_INVALID_PAGE_SIZE",
            ToolCribError::ToolNotFound { .. } => "ERR_TOOL_NOT_FOUND",
            ToolCribError::EmployeeNotFound { .. } => "ERR_EMPLOYEE_NOT_FOUND",
            ToolCribError::AlreadyAssignedToEmployee { .. } => "ERR_ALREADY_ASSIGNED_SAME",
            ToolCribError::AlreadyAssignedToOther { .. } => "ERR_ALREADY_ASSIGNED_OTHER",
            ToolCribError::CalibrationOverdue { .. } => "ERR_CALIBRATION_OVERDUE",
            ToolCribError::NotAssigned { .. } => "ERR_NOT_ASSIGNED",
        }
    }

    /// Whether this error is a business-rule failure (vs. a caller contract error)
    ///
    /// Business-rule failures are expected outcomes that callers branch on and
    /// surface to the user. Contract errors indicate a caller bug.
    pub fn is_business_rule(&self) -> bool {
        !matches!(
            self,
            ToolCribError::InvalidPage { .. } | ToolCribError::InvalidPageSize { .. }
        )
    }
}
