//! Display-model projection for the directory.
//!
//! These are pure functions that convert domain data into renderable card
//! records. All decisions (initials, accent colors, the empty-state flag,
//! the stats counter) are made here; renderers only map the result onto
//! widgets or text.

use crewdir_types::Employee;
use serde::Serialize;

/// Departments with a dedicated accent in the fixed palette.
pub const KNOWN_DEPARTMENTS: [&str; 6] = [
    "Engineering",
    "Marketing",
    "Sales",
    "HR",
    "Finance",
    "Operations",
];

/// Accent color chosen per department. Closed palette; unknown or absent
/// departments fall back to the default accent (same as Engineering).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccentColor {
    Indigo,
    Magenta,
    Cyan,
    Green,
    Rose,
    Teal,
}

/// Map a department to its accent.
pub fn department_accent(department: Option<&str>) -> AccentColor {
    match department {
        Some("Engineering") => AccentColor::Indigo,
        Some("Marketing") => AccentColor::Magenta,
        Some("Sales") => AccentColor::Cyan,
        Some("HR") => AccentColor::Green,
        Some("Finance") => AccentColor::Rose,
        Some("Operations") => AccentColor::Teal,
        _ => AccentColor::Indigo,
    }
}

/// Avatar initials: first letter of each whitespace-separated name token,
/// uppercased, truncated to two characters. An empty name yields an empty
/// string.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(|c| c.to_uppercase())
        .take(2)
        .collect()
}

/// One employee card, ready to draw.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeCardViewModel {
    pub id: String,
    pub name: String,
    pub role: String,
    pub email: String,
    pub department: String,
    pub has_department: bool,
    pub initials: String,
    pub accent: AccentColor,
}

impl EmployeeCardViewModel {
    fn from_employee(employee: &Employee) -> Self {
        Self {
            id: employee.id.to_string(),
            name: employee.name.clone(),
            role: employee.role.clone(),
            email: employee.email.clone(),
            department: employee.department_label().to_string(),
            has_department: employee.department.is_some(),
            initials: initials(&employee.name),
            accent: department_accent(employee.department.as_deref()),
        }
    }
}

/// The complete directory view: filtered cards plus stats.
///
/// `total_count` is the size of the unfiltered cache, not the filtered
/// view; `is_empty` asks the renderer for the dedicated empty-state
/// presentation instead of a zero-row list.
#[derive(Debug, Clone, Serialize)]
pub struct DirectoryViewModel {
    pub cards: Vec<EmployeeCardViewModel>,
    pub total_count: usize,
    pub shown_count: usize,
    pub is_empty: bool,
}

/// Build the directory view from the full cache and the filtered slice.
pub fn build_directory_view(all: &[Employee], filtered: &[Employee]) -> DirectoryViewModel {
    let cards: Vec<EmployeeCardViewModel> = filtered
        .iter()
        .map(EmployeeCardViewModel::from_employee)
        .collect();

    DirectoryViewModel {
        total_count: all.len(),
        shown_count: cards.len(),
        is_empty: cards.is_empty(),
        cards,
    }
}
