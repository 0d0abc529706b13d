use chrono::{DateTime, Utc};
use crewdir_types::{Employee, EmployeeId};

/// In-memory mirror of the server's employee collection.
///
/// The cache is only ever replaced wholesale, never patched in place, so it
/// can never drift from server-confirmed state. A failed refresh leaves the
/// previous contents untouched (stale data beats a blank screen).
#[derive(Debug, Clone, Default)]
pub struct EmployeeCache {
    employees: Vec<Employee>,
    last_refreshed: Option<DateTime<Utc>>,
}

impl EmployeeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire cached collection and stamp the refresh time.
    pub fn replace(&mut self, employees: Vec<Employee>) {
        self.employees = employees;
        self.last_refreshed = Some(Utc::now());
    }

    /// Read-only snapshot of the cached collection.
    pub fn all(&self) -> &[Employee] {
        &self.employees
    }

    /// Lookup by id. Absence (e.g. a stale id from an outdated view) is a
    /// normal outcome, not an error.
    pub fn find_by_id(&self, id: &EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| &e.id == id)
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// When the cache last successfully mirrored the server, if ever.
    pub fn last_refreshed(&self) -> Option<DateTime<Utc>> {
        self.last_refreshed
    }
}
