//! Client-side filtering over the cached employee list.
//!
//! Filtering is a pure function of (cache snapshot, search text, department
//! selector). It never mutates the cache and preserves cache order, so the
//! rendered view is always a stable subsequence of what the server returned.

use crewdir_types::Employee;

/// Filter inputs as entered by the user.
///
/// Both predicates are conjunctive when active. Empty inputs match
/// everything, so clearing filters is the same as applying the default
/// filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryFilter {
    pub search: String,
    pub department: String,
}

impl DirectoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.department.is_empty()
    }

    fn matches(&self, employee: &Employee) -> bool {
        if !self.search.is_empty() {
            let term = self.search.to_lowercase();
            let hit = employee.name.to_lowercase().contains(&term)
                || employee.role.to_lowercase().contains(&term)
                || employee.email.to_lowercase().contains(&term)
                || employee
                    .department
                    .as_ref()
                    .is_some_and(|d| d.to_lowercase().contains(&term));
            if !hit {
                return false;
            }
        }

        if !self.department.is_empty() {
            // Exact match, unlike the substring search above
            if employee.department.as_deref() != Some(self.department.as_str()) {
                return false;
            }
        }

        true
    }
}

/// Derive the filtered view from a cache snapshot.
///
/// Stable: the result preserves the input order and, with empty filter
/// inputs, is identical to the input in content and order.
pub fn apply(employees: &[Employee], filter: &DirectoryFilter) -> Vec<Employee> {
    employees
        .iter()
        .filter(|e| filter.matches(e))
        .cloned()
        .collect()
}
