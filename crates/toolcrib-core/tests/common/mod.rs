use chrono::NaiveDate;
use toolcrib_core::{Clock, Employee, Store, Tool, ToolType};

/// Day used as "today" by the fixture clock
#[allow(dead_code)]
pub fn fixture_today() -> NaiveDate {
    date(2024, 6, 15)
}

#[allow(dead_code)]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Build the standard seed store used across the integration suites
///
/// Five tools (T4 with an overdue calibration), three employees, and a clock
/// pinned to 2024-06-15.
#[allow(dead_code)]
pub fn seed_store() -> Store {
    let tools = vec![
        Tool::new(
            "T1".to_string(),
            ToolType::HydraulicWrench,
            "HW-500".to_string(),
            "SN-0001".to_string(),
            date(2099, 1, 1),
        ),
        Tool::new(
            "T2".to_string(),
            ToolType::PneumaticWrench,
            "PW-220".to_string(),
            "SN-0002".to_string(),
            date(2025, 3, 1),
        ),
        Tool::new(
            "T3".to_string(),
            ToolType::Tensioner,
            "TN-10".to_string(),
            "SN-0003".to_string(),
            date(2024, 6, 15),
        ),
        Tool::new(
            "T4".to_string(),
            ToolType::TorqueGun,
            "TG-7".to_string(),
            "SN-0004".to_string(),
            date(2000, 1, 1),
        ),
        Tool::new(
            "T5".to_string(),
            ToolType::TorqueMultiplier,
            "TM-3".to_string(),
            "SN-0005".to_string(),
            date(2030, 12, 31),
        ),
    ];
    let employees = vec![
        Employee::new("E1".to_string(), "Alice".to_string()),
        Employee::new("E2".to_string(), "Bob".to_string()),
        Employee::new("E3".to_string(), "Carol".to_string()),
    ];
    Store::new(&tools, &employees, Clock::Fixed(fixture_today()))
}

/// Assert the assignment invariant for every tool in the store
#[allow(dead_code)]
pub fn assert_assignment_invariant(store: &Store) {
    for tool in store.list_tools() {
        assert!(
            tool.assignment_fields_consistent(),
            "tool {} violates the assignment invariant: assigned_to={:?}, assigned_on={:?}",
            tool.id,
            tool.assigned_to,
            tool.assigned_on
        );
    }
}
