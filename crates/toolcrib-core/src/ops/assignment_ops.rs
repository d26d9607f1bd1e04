//! Assignment state transitions
//!
//! Each tool moves between two stored states, Unassigned and Assigned, with
//! calibration expiry as an orthogonal computed predicate (never stored).
//! All precondition checks run before any field is written, so a failed
//! operation leaves the tool untouched.

use chrono::NaiveDate;
use tracing::{debug, info};

use super::store::Store;
use crate::errors::{Result, ToolCribError};
use crate::model::Tool;

/// Assign an unassigned tool to an employee
///
/// `assigned_on` defaults to the store's current day when not supplied.
///
/// # Arguments
/// * `store` - Mutable reference to the Store
/// * `tool_id` - The tool to assign
/// * `employee_id` - The employee receiving the tool
/// * `assigned_on` - Optional assignment start day (defaults to today)
///
/// # Returns
/// A clone of the updated tool.
///
/// # Errors
/// * `ToolNotFound` - If the tool doesn't exist
/// * `EmployeeNotFound` - If the employee doesn't exist
/// * `AlreadyAssignedToEmployee` - If the tool is already held by this employee
/// * `AlreadyAssignedToOther` - If the tool is held by a different employee
/// * `CalibrationOverdue` - If the calibration due date is strictly before today
pub fn assign_tool(
    store: &mut Store,
    tool_id: &str,
    employee_id: &str,
    assigned_on: Option<NaiveDate>,
) -> Result<Tool> {
    debug!(op = "assign_tool", tool_id, employee_id, "starting");

    let today = store.today();
    store.get_employee(employee_id)?;

    let tool = store.get_tool(tool_id)?;
    if let Some(holder) = &tool.assigned_to {
        return Err(if holder == employee_id {
            ToolCribError::AlreadyAssignedToEmployee {
                tool_id: tool_id.to_string(),
                employee_id: employee_id.to_string(),
            }
        } else {
            ToolCribError::AlreadyAssignedToOther {
                tool_id: tool_id.to_string(),
                employee_id: holder.clone(),
            }
        });
    }
    if tool.is_overdue(today) {
        return Err(ToolCribError::CalibrationOverdue {
            tool_id: tool_id.to_string(),
            due_date: tool.calibration_due_date,
        });
    }

    let effective_date = assigned_on.unwrap_or(today);
    let tool = store.get_tool_mut(tool_id)?;
    tool.assigned_to = Some(employee_id.to_string());
    tool.assigned_on = Some(effective_date);

    info!(
        op = "assign_tool",
        tool_id,
        employee_id,
        assigned_on = %effective_date,
        "tool assigned"
    );
    Ok(tool.clone())
}

/// Reassign a currently assigned tool to an employee
///
/// Overwrites both assignment fields, regardless of whether the new employee
/// equals the current holder. `assigned_on` defaults to the store's current day.
///
/// # Errors
/// * `ToolNotFound` - If the tool doesn't exist
/// * `EmployeeNotFound` - If the employee doesn't exist
/// * `NotAssigned` - If the tool is not currently assigned
/// * `CalibrationOverdue` - If the calibration due date is strictly before today
pub fn reassign_tool(
    store: &mut Store,
    tool_id: &str,
    employee_id: &str,
    assigned_on: Option<NaiveDate>,
) -> Result<Tool> {
    debug!(op = "reassign_tool", tool_id, employee_id, "starting");

    let today = store.today();
    store.get_employee(employee_id)?;

    let tool = store.get_tool(tool_id)?;
    if !tool.is_assigned() {
        return Err(ToolCribError::NotAssigned {
            tool_id: tool_id.to_string(),
        });
    }
    if tool.is_overdue(today) {
        return Err(ToolCribError::CalibrationOverdue {
            tool_id: tool_id.to_string(),
            due_date: tool.calibration_due_date,
        });
    }

    let effective_date = assigned_on.unwrap_or(today);
    let tool = store.get_tool_mut(tool_id)?;
    tool.assigned_to = Some(employee_id.to_string());
    tool.assigned_on = Some(effective_date);

    info!(
        op = "reassign_tool",
        tool_id,
        employee_id,
        assigned_on = %effective_date,
        "tool reassigned"
    );
    Ok(tool.clone())
}

/// Return an assigned tool to the crib
///
/// Clears both assignment fields. Repeating an already-completed unassign
/// fails with `NotAssigned` rather than silently succeeding; callers inspect
/// that error to decide whether to refresh state.
///
/// # Errors
/// * `ToolNotFound` - If the tool doesn't exist
/// * `NotAssigned` - If the tool is not currently assigned
pub fn unassign_tool(store: &mut Store, tool_id: &str) -> Result<Tool> {
    debug!(op = "unassign_tool", tool_id, "starting");

    let tool = store.get_tool(tool_id)?;
    if !tool.is_assigned() {
        return Err(ToolCribError::NotAssigned {
            tool_id: tool_id.to_string(),
        });
    }

    let tool = store.get_tool_mut(tool_id)?;
    tool.assigned_to = None;
    tool.assigned_on = None;

    info!(op = "unassign_tool", tool_id, "tool unassigned");
    Ok(tool.clone())
}
