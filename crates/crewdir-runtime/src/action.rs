use crate::form::FormField;
use crewdir_types::EmployeeId;

/// Semantic commands produced by UI layers and consumed by the session.
///
/// The board renderer maps key events to these; console handlers build
/// them from flags. Business logic never sees raw input events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SearchInput(char),
    SearchBackspace,
    CycleDepartment,
    ClearFilters,
    FieldInput(FormField, char),
    FieldBackspace(FormField),
    StartEdit(EmployeeId),
    Cancel,
    Submit,
    RequestDelete(EmployeeId),
    ConfirmDelete,
    DeclineDelete,
    Refresh,
    Quit,
}
