use serde::{Deserialize, Serialize};
use std::fmt;

/// Employee identifier assigned at creation time and immutable afterwards.
/// Used as the correlation key for update and delete requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Create a new EmployeeId from a string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for EmployeeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EmployeeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for EmployeeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A single employee record as exchanged with the directory API.
///
/// `department` is optional on the wire: a missing field deserializes to
/// `None` and `None` is omitted on serialization. Absent and empty-string
/// departments are distinct states; only the former is produced by this
/// client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub role: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl Employee {
    pub fn new(
        id: impl Into<EmployeeId>,
        name: impl Into<String>,
        role: impl Into<String>,
        email: impl Into<String>,
        department: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
            email: email.into(),
            department,
        }
    }

    /// Department label with the canonical fallback for absent departments.
    pub fn department_label(&self) -> &str {
        self.department.as_deref().unwrap_or("N/A")
    }
}
