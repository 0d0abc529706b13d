//! The directory session: one owned state object tying together the remote
//! store, the employee cache, the form controller, the notification slot
//! and the active filter inputs.
//!
//! Control flow for every mutating action: store call, then on success a
//! wholesale cache refresh, then a notification. Failures become
//! notifications and never propagate out of the session.

use crate::action::Action;
use crate::cache::EmployeeCache;
use crate::form::{FormController, FormMode};
use crate::notify::{Notification, NotificationKind, NotificationSlot};
use crewdir_client::{Error, RemoteStore};
use crewdir_engine::DirectoryFilter;
use crewdir_types::{Employee, EmployeeId};
use tracing::warn;

/// Outcome of a form submission. Notifications are already posted when the
/// caller receives this; console handlers use it for exit status.
#[derive(Debug)]
pub enum SubmitOutcome {
    Created(EmployeeId),
    Updated(EmployeeId),
    /// Create was rejected because the id is taken; form state and field
    /// contents are intact so the user can correct and resubmit.
    DuplicateId(EmployeeId),
    Failed(Error),
}

/// Outcome of the delete flow.
#[derive(Debug)]
pub enum RemoveOutcome {
    Removed(EmployeeId),
    /// Nothing was pending confirmation; no request was sent.
    NothingPending,
    Failed(Error),
}

pub struct DirectorySession {
    store: RemoteStore,
    cache: EmployeeCache,
    form: FormController,
    notifications: NotificationSlot,
    filter: DirectoryFilter,
    pending_delete: Option<EmployeeId>,
}

impl DirectorySession {
    pub fn new(store: RemoteStore) -> Self {
        Self {
            store,
            cache: EmployeeCache::new(),
            form: FormController::new(),
            notifications: NotificationSlot::new(),
            filter: DirectoryFilter::new(),
            pending_delete: None,
        }
    }

    pub fn store(&self) -> &RemoteStore {
        &self.store
    }

    pub fn cache(&self) -> &EmployeeCache {
        &self.cache
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormController {
        &mut self.form
    }

    pub fn filter(&self) -> &DirectoryFilter {
        &self.filter
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notifications.current()
    }

    pub fn pending_delete(&self) -> Option<&EmployeeId> {
        self.pending_delete.as_ref()
    }

    /// The filtered view, recomputed on demand; never stored.
    pub fn filtered(&self) -> Vec<Employee> {
        crewdir_engine::apply(self.cache.all(), &self.filter)
    }

    /// Periodic housekeeping while the board is idle.
    pub fn tick(&mut self) {
        self.notifications.clear_expired();
    }

    /// Reload the cache from the server. On failure the previous cache is
    /// kept and an error notification is posted; the error is also
    /// returned for callers that report through other channels.
    pub async fn refresh(&mut self) -> Result<(), Error> {
        match self.store.list_all().await {
            Ok(employees) => {
                self.cache.replace(employees);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "refresh failed; keeping stale cache");
                self.notifications
                    .post("Failed to load employees", NotificationKind::Error);
                Err(err)
            }
        }
    }

    /// Submit the form according to the current mode: create in `Add`,
    /// update in `Edit`. Success returns the controller to `Add` and
    /// triggers exactly one cache refresh.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let employee = self.form.build_employee();

        match self.form.mode().clone() {
            FormMode::Add => match self.store.create(&employee).await {
                Ok(()) => {
                    self.notifications
                        .post("Employee added", NotificationKind::Success);
                    self.form.start_add();
                    let _ = self.refresh().await;
                    SubmitOutcome::Created(employee.id)
                }
                Err(err @ Error::DuplicateId { .. }) => {
                    // State and fields stay as typed; the user can fix the
                    // id and resubmit.
                    self.notifications.post(err.to_string(), NotificationKind::Error);
                    SubmitOutcome::DuplicateId(employee.id)
                }
                Err(err) => {
                    self.notifications
                        .post(failure_message("add", &err), NotificationKind::Error);
                    SubmitOutcome::Failed(err)
                }
            },
            FormMode::Edit(id) => match self.store.update(&id, &employee).await {
                Ok(()) => {
                    self.notifications
                        .post("Employee updated", NotificationKind::Success);
                    self.form.start_add();
                    let _ = self.refresh().await;
                    SubmitOutcome::Updated(id)
                }
                Err(err) => {
                    self.notifications
                        .post(failure_message("update", &err), NotificationKind::Error);
                    SubmitOutcome::Failed(err)
                }
            },
        }
    }

    /// Enter edit mode for a cached employee; a stale id is silently
    /// ignored.
    pub fn start_edit(&mut self, id: &EmployeeId) -> bool {
        let entered = self.form.start_edit(&self.cache, id);
        if entered {
            self.notifications
                .post(format!("Editing employee {}", id), NotificationKind::Neutral);
        }
        entered
    }

    pub fn cancel(&mut self) {
        self.form.cancel();
        self.notifications
            .post("Edit cancelled", NotificationKind::Neutral);
    }

    /// Mark an employee for deletion pending user confirmation. No request
    /// is sent until `confirm_delete`.
    pub fn request_delete(&mut self, id: EmployeeId) {
        self.pending_delete = Some(id);
    }

    /// Decline the pending deletion: state unchanged, no notification.
    pub fn decline_delete(&mut self) {
        self.pending_delete = None;
    }

    pub async fn confirm_delete(&mut self) -> RemoveOutcome {
        let Some(id) = self.pending_delete.take() else {
            return RemoveOutcome::NothingPending;
        };

        match self.store.remove(&id).await {
            Ok(()) => {
                self.notifications
                    .post("Employee deleted", NotificationKind::Success);
                let _ = self.refresh().await;
                RemoveOutcome::Removed(id)
            }
            Err(err) => {
                self.notifications
                    .post(failure_message("delete", &err), NotificationKind::Error);
                RemoveOutcome::Failed(err)
            }
        }
    }

    pub fn push_search(&mut self, c: char) {
        self.filter.search.push(c);
    }

    pub fn pop_search(&mut self) {
        self.filter.search.pop();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
    }

    pub fn set_department_filter(&mut self, department: impl Into<String>) {
        self.filter.department = department.into();
    }

    /// Step the department selector through the known set and back to
    /// "all departments".
    pub fn cycle_department(&mut self) {
        use crewdir_engine::KNOWN_DEPARTMENTS;

        self.filter.department = match KNOWN_DEPARTMENTS
            .iter()
            .position(|d| *d == self.filter.department)
        {
            Some(i) if i + 1 < KNOWN_DEPARTMENTS.len() => KNOWN_DEPARTMENTS[i + 1].to_string(),
            Some(_) => String::new(),
            None => KNOWN_DEPARTMENTS[0].to_string(),
        };
    }

    /// Reset both filter inputs; the result is the full cache again.
    pub fn clear_filters(&mut self) {
        self.filter = DirectoryFilter::new();
        self.notifications
            .post("Filters cleared", NotificationKind::Neutral);
    }

    /// Apply one semantic action. `Quit` is the caller's concern and is a
    /// no-op here.
    pub async fn dispatch(&mut self, action: Action) {
        match action {
            Action::SearchInput(c) => self.push_search(c),
            Action::SearchBackspace => self.pop_search(),
            Action::CycleDepartment => self.cycle_department(),
            Action::ClearFilters => self.clear_filters(),
            Action::FieldInput(field, c) => self.form.input(field, c),
            Action::FieldBackspace(field) => self.form.backspace(field),
            Action::StartEdit(id) => {
                self.start_edit(&id);
            }
            Action::Cancel => self.cancel(),
            Action::Submit => {
                self.submit().await;
            }
            Action::RequestDelete(id) => self.request_delete(id),
            Action::ConfirmDelete => {
                self.confirm_delete().await;
            }
            Action::DeclineDelete => self.decline_delete(),
            Action::Refresh => {
                let _ = self.refresh().await;
            }
            Action::Quit => {}
        }
    }
}

fn failure_message(operation: &str, err: &Error) -> String {
    match err {
        Error::Network(_) => "Network error: is the server running?".to_string(),
        _ => format!("Failed to {} employee", operation),
    }
}
