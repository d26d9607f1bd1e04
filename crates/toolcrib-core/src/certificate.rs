//! Calibration certificate rendering
//!
//! Produces an opaque certificate document for a tool. The backing format is
//! a collaborator concern; this module renders Markdown bytes with a filename
//! deterministic from tool ID and calibration due date, so repeated downloads
//! of the same tool overwrite rather than accumulate.

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::ops::Store;

/// A rendered calibration certificate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    /// Document bytes
    pub document: Vec<u8>,
    /// Deterministic filename: `calibration-certificate-{tool_id}-{due_date}.md`
    pub filename: String,
}

/// Render a calibration certificate for a tool
///
/// Includes the tool's identity, type, model, serial number, and due date,
/// plus the resolved holder when the tool is assigned.
///
/// # Errors
/// * `ToolNotFound` - If the tool doesn't exist
pub fn render_certificate(store: &Store, tool_id: &str) -> Result<Certificate> {
    let tool = store.get_tool(tool_id)?;

    let mut output = String::new();
    output.push_str("# Calibration Certificate\n\n");
    output.push_str(&format!("**Tool**: {}\n\n", tool.id));
    output.push_str(&format!("**Type**: {}\n\n", tool.tool_type));
    output.push_str(&format!("**Model**: {}\n\n", tool.model));
    output.push_str(&format!("**Serial Number**: {}\n\n", tool.serial_number));
    output.push_str(&format!(
        "**Calibration Valid Through**: {}\n\n",
        tool.calibration_due_date
    ));

    if let Some(employee_id) = &tool.assigned_to {
        // Employee resolution is best-effort: the certificate is about the
        // tool, and seed data never deletes employees anyway
        if let Ok(employee) = store.get_employee(employee_id) {
            output.push_str(&format!(
                "**Assigned To**: {} ({})\n\n",
                employee.name, employee.id
            ));
        }
        if let Some(assigned_on) = tool.assigned_on {
            output.push_str(&format!("**Assigned On**: {assigned_on}\n\n"));
        }
    } else {
        output.push_str("**Assigned To**: Unassigned\n\n");
    }

    let filename = format!(
        "calibration-certificate-{}-{}.md",
        tool.id, tool.calibration_due_date
    );

    Ok(Certificate {
        document: output.into_bytes(),
        filename,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ToolCribError;
    use crate::model::{Employee, Tool, ToolType};
    use crate::ops::{assignment_ops, Clock};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn test_store() -> Store {
        let tools = vec![Tool::new(
            "T1".to_string(),
            ToolType::HydraulicWrench,
            "HW-500".to_string(),
            "SN-0001".to_string(),
            date(2099, 1, 1),
        )];
        let employees = vec![Employee::new("E1".to_string(), "Alice".to_string())];
        Store::new(&tools, &employees, Clock::Fixed(date(2024, 6, 15)))
    }

    #[test]
    fn test_filename_is_deterministic() {
        let store = test_store();
        let cert = render_certificate(&store, "T1").unwrap();
        assert_eq!(cert.filename, "calibration-certificate-T1-2099-01-01.md");

        let again = render_certificate(&store, "T1").unwrap();
        assert_eq!(cert, again);
    }

    #[test]
    fn test_unknown_tool_is_structured_error() {
        let store = test_store();
        let result = render_certificate(&store, "T99");
        assert!(matches!(result, Err(ToolCribError::ToolNotFound { .. })));
    }

    #[test]
    fn test_assigned_tool_names_holder() {
        let mut store = test_store();
        assignment_ops::assign_tool(&mut store, "T1", "E1", None).unwrap();

        let cert = render_certificate(&store, "T1").unwrap();
        let text = String::from_utf8(cert.document).unwrap();
        assert!(text.contains("Alice (E1)"));
        assert!(text.contains("2024-06-15"));
    }
}
