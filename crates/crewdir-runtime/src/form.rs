//! Add/Edit form state machine.
//!
//! The controller owns the field buffers and the current mode. In `Edit`
//! the id field is immutable: an identifier is never editable once
//! assigned, and the submitted employee always carries the id captured at
//! `start_edit` time regardless of buffer contents.

use crate::cache::EmployeeCache;
use crewdir_types::{Employee, EmployeeId};

/// Current form mode. `Edit` carries the id of the record being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit(EmployeeId),
}

/// The individually addressable form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Id,
    Name,
    Role,
    Email,
    Department,
}

/// Raw field buffers as typed by the user. Submission is validation-free;
/// the only mapping applied is empty-department-to-absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub id: String,
    pub name: String,
    pub role: String,
    pub email: String,
    pub department: String,
}

impl FormFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Id => &self.id,
            FormField::Name => &self.name,
            FormField::Role => &self.role,
            FormField::Email => &self.email,
            FormField::Department => &self.department,
        }
    }

    fn buffer_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Id => &mut self.id,
            FormField::Name => &mut self.name,
            FormField::Role => &mut self.role,
            FormField::Email => &mut self.email,
            FormField::Department => &mut self.department,
        }
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone)]
pub struct FormController {
    mode: FormMode,
    fields: FormFields,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl FormController {
    pub fn new() -> Self {
        Self {
            mode: FormMode::Add,
            fields: FormFields::default(),
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn editing_id(&self) -> Option<&EmployeeId> {
        match &self.mode {
            FormMode::Edit(id) => Some(id),
            FormMode::Add => None,
        }
    }

    /// The id field is locked while editing an existing record.
    pub fn id_locked(&self) -> bool {
        self.is_editing()
    }

    /// Back to add mode with a blank form; the id field is editable again.
    pub fn start_add(&mut self) {
        self.mode = FormMode::Add;
        self.fields.clear();
    }

    /// Enter edit mode for a cached employee. An id that is no longer in
    /// the cache (stale view) is silently ignored: no state change.
    pub fn start_edit(&mut self, cache: &EmployeeCache, id: &EmployeeId) -> bool {
        let Some(employee) = cache.find_by_id(id) else {
            return false;
        };

        self.fields = FormFields {
            id: employee.id.to_string(),
            name: employee.name.clone(),
            role: employee.role.clone(),
            email: employee.email.clone(),
            department: employee.department.clone().unwrap_or_default(),
        };
        self.mode = FormMode::Edit(employee.id.clone());
        true
    }

    /// Same state transition as `start_add`; the session layer adds the
    /// user-facing notification.
    pub fn cancel(&mut self) {
        self.start_add();
    }

    /// Append a character to a field buffer. Ignored for the id field
    /// while it is locked.
    pub fn input(&mut self, field: FormField, c: char) {
        if field == FormField::Id && self.id_locked() {
            return;
        }
        self.fields.buffer_mut(field).push(c);
    }

    /// Delete the last character of a field buffer, honoring the id lock.
    pub fn backspace(&mut self, field: FormField) {
        if field == FormField::Id && self.id_locked() {
            return;
        }
        self.fields.buffer_mut(field).pop();
    }

    /// Overwrite a field wholesale (flag-driven console input), honoring
    /// the id lock.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        if field == FormField::Id && self.id_locked() {
            return;
        }
        *self.fields.buffer_mut(field) = value.into();
    }

    /// Construct the employee to submit. In `Edit` the id comes from the
    /// mode, not the buffer; an empty department buffer maps to absent.
    pub fn build_employee(&self) -> Employee {
        let id = match &self.mode {
            FormMode::Edit(id) => id.clone(),
            FormMode::Add => EmployeeId::from(self.fields.id.clone()),
        };

        let department = if self.fields.department.is_empty() {
            None
        } else {
            Some(self.fields.department.clone())
        };

        Employee {
            id,
            name: self.fields.name.clone(),
            role: self.fields.role.clone(),
            email: self.fields.email.clone(),
            department,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crewdir_types::Employee;

    fn cache_with_ann() -> EmployeeCache {
        let mut cache = EmployeeCache::new();
        cache.replace(vec![Employee::new(
            "1",
            "Ann Lee",
            "Eng",
            "a@x.com",
            Some("Engineering".to_string()),
        )]);
        cache
    }

    #[test]
    fn test_starts_in_add_mode_with_blank_fields() {
        let controller = FormController::new();
        assert_eq!(controller.mode(), &FormMode::Add);
        assert_eq!(controller.fields(), &FormFields::default());
        assert!(!controller.id_locked());
    }

    #[test]
    fn test_start_edit_populates_fields_and_locks_id() {
        let cache = cache_with_ann();
        let mut controller = FormController::new();

        assert!(controller.start_edit(&cache, &"1".into()));
        assert_eq!(controller.mode(), &FormMode::Edit("1".into()));
        assert_eq!(controller.fields().id, "1");
        assert_eq!(controller.fields().name, "Ann Lee");
        assert_eq!(controller.fields().role, "Eng");
        assert_eq!(controller.fields().email, "a@x.com");
        assert_eq!(controller.fields().department, "Engineering");
        assert!(controller.id_locked());
    }

    #[test]
    fn test_start_edit_absent_id_is_silent_noop() {
        let cache = cache_with_ann();
        let mut controller = FormController::new();
        controller.input(FormField::Name, 'x');

        assert!(!controller.start_edit(&cache, &"gone".into()));
        assert_eq!(controller.mode(), &FormMode::Add);
        assert_eq!(controller.fields().name, "x");
    }

    #[test]
    fn test_id_input_ignored_while_locked() {
        let cache = cache_with_ann();
        let mut controller = FormController::new();
        controller.start_edit(&cache, &"1".into());

        controller.input(FormField::Id, '9');
        controller.backspace(FormField::Id);
        controller.set_field(FormField::Id, "hijack");

        assert_eq!(controller.fields().id, "1");
    }

    #[test]
    fn test_cancel_returns_to_blank_add_mode() {
        let cache = cache_with_ann();
        let mut controller = FormController::new();
        controller.start_edit(&cache, &"1".into());

        controller.cancel();

        assert_eq!(controller.mode(), &FormMode::Add);
        assert_eq!(controller.fields(), &FormFields::default());
        assert!(!controller.id_locked());
    }

    #[test]
    fn test_build_employee_maps_empty_department_to_absent() {
        let mut controller = FormController::new();
        controller.set_field(FormField::Id, "7");
        controller.set_field(FormField::Name, "Di Sousa");
        controller.set_field(FormField::Role, "Analyst");
        controller.set_field(FormField::Email, "di@x.com");

        let employee = controller.build_employee();
        assert_eq!(employee.id.as_str(), "7");
        assert_eq!(employee.department, None);
    }

    #[test]
    fn test_build_employee_in_edit_mode_uses_mode_id() {
        let cache = cache_with_ann();
        let mut controller = FormController::new();
        controller.start_edit(&cache, &"1".into());
        controller.set_field(FormField::Name, "Ann B. Lee");

        let employee = controller.build_employee();
        assert_eq!(employee.id.as_str(), "1");
        assert_eq!(employee.name, "Ann B. Lee");
        assert_eq!(employee.department, Some("Engineering".to_string()));
    }
}
