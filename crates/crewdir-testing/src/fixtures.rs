//! Sample employee records for tests.

use crewdir_types::Employee;

/// Shorthand for building an employee record in tests.
pub fn employee(id: &str, name: &str, role: &str, email: &str, department: Option<&str>) -> Employee {
    Employee::new(id, name, role, email, department.map(|d| d.to_string()))
}

/// A small directory covering the interesting shapes: known departments,
/// and one record with no department at all.
pub fn sample_directory() -> Vec<Employee> {
    vec![
        employee(
            "1",
            "Ann Lee",
            "Backend Engineer",
            "ann@corp.example",
            Some("Engineering"),
        ),
        employee(
            "2",
            "Bo Reyes",
            "Account Executive",
            "bo@corp.example",
            Some("Sales"),
        ),
        employee("3", "Cy Tran", "Contractor", "cy@corp.example", None),
    ]
}
