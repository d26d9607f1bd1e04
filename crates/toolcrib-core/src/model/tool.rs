use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Closed enumeration of tool categories tracked by the crib
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolType {
    HydraulicWrench,
    PneumaticWrench,
    Tensioner,
    TorqueGun,
    TorqueMultiplier,
}

impl ToolType {
    /// All known tool types, in display order
    pub const ALL: [ToolType; 5] = [
        ToolType::HydraulicWrench,
        ToolType::PneumaticWrench,
        ToolType::Tensioner,
        ToolType::TorqueGun,
        ToolType::TorqueMultiplier,
    ];

    /// Human-readable label used in search matching and rendering
    pub fn label(&self) -> &'static str {
        match self {
            ToolType::HydraulicWrench => "Hydraulic Wrench",
            ToolType::PneumaticWrench => "Pneumatic Wrench",
            ToolType::Tensioner => "Tensioner",
            ToolType::TorqueGun => "Torque Gun",
            ToolType::TorqueMultiplier => "Torque Multiplier",
        }
    }
}

impl fmt::Display for ToolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ToolType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Hydraulic Wrench" | "HydraulicWrench" => Ok(ToolType::HydraulicWrench),
            "Pneumatic Wrench" | "PneumaticWrench" => Ok(ToolType::PneumaticWrench),
            "Tensioner" => Ok(ToolType::Tensioner),
            "Torque Gun" | "TorqueGun" => Ok(ToolType::TorqueGun),
            "Torque Multiplier" | "TorqueMultiplier" => Ok(ToolType::TorqueMultiplier),
            other => Err(format!("Unknown tool type: {other}")),
        }
    }
}

/// Tool - a trackable calibrated instrument with an assignment state
///
/// A Tool is either unassigned or assigned to exactly one Employee. The
/// calibration due date is the last day the tool counts as calibrated;
/// strictly past it, the tool is overdue and may not be (re)assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Unique identifier, stable and immutable (convention "T<n>")
    pub id: String,

    /// Tool category
    #[serde(rename = "type")]
    pub tool_type: ToolType,

    /// Free-text model designation
    pub model: String,

    /// Free-text serial string (unique in practice)
    pub serial_number: String,

    /// Last day the tool is considered calibrated (day granularity)
    pub calibration_due_date: NaiveDate,

    /// Employee ID currently holding the tool, if any
    pub assigned_to: Option<String>,

    /// Day the current assignment started; set iff `assigned_to` is set
    pub assigned_on: Option<NaiveDate>,
}

impl Tool {
    /// Create a new unassigned Tool
    pub fn new(
        id: String,
        tool_type: ToolType,
        model: String,
        serial_number: String,
        calibration_due_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            tool_type,
            model,
            serial_number,
            calibration_due_date,
            assigned_to: None,
            assigned_on: None,
        }
    }

    /// Check if this tool is currently assigned to an employee
    pub fn is_assigned(&self) -> bool {
        self.assigned_to.is_some()
    }

    /// Check if calibration is overdue relative to the given day
    ///
    /// A due date equal to `today` is still valid; only strictly past due
    /// dates count as overdue.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.calibration_due_date < today
    }

    /// Check the assignment invariant: `assigned_to` and `assigned_on` are
    /// both set or both absent
    pub fn assignment_fields_consistent(&self) -> bool {
        self.assigned_to.is_some() == self.assigned_on.is_some()
    }
}
