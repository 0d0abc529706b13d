//! Board presenter.
//!
//! Pure function from session state to a complete screen snapshot. All
//! mode-dependent decisions (form labels, confirm prompt wording, status
//! level mapping) happen here; the renderer only maps data to widgets.

use crate::presentation::view_models::{
    BoardScreenViewModel, ConfirmViewModel, FilterBarViewModel, FormPanelViewModel,
    HeaderViewModel, NotificationViewModel, StatusBarViewModel, StatusLevel,
};
use crewdir_engine::build_directory_view;
use crewdir_runtime::{DirectorySession, NotificationKind};

const BOARD_HINT: &str =
    "Tab focus · Enter submit · e edit · d delete · f dept · c clear · r reload · q quit";

/// Build the complete board snapshot from current session state.
pub fn build_board_view_model(session: &DirectorySession) -> BoardScreenViewModel {
    let filtered = session.filtered();
    let directory = build_directory_view(session.cache().all(), &filtered);

    let editing = session.form().is_editing();
    let fields = session.form().fields();

    let form = FormPanelViewModel {
        title: if editing {
            "Update Employee".to_string()
        } else {
            "Add New Employee".to_string()
        },
        submit_label: if editing {
            "Update Employee".to_string()
        } else {
            "Add Employee".to_string()
        },
        id: fields.id.clone(),
        name: fields.name.clone(),
        role: fields.role.clone(),
        email: fields.email.clone(),
        department: fields.department.clone(),
        id_locked: session.form().id_locked(),
        cancel_visible: editing,
    };

    let confirm = session.pending_delete().map(|id| {
        let label = session
            .cache()
            .find_by_id(id)
            .map(|e| e.name.clone())
            .unwrap_or_else(|| id.to_string());
        ConfirmViewModel {
            id: id.to_string(),
            message: format!("Delete employee '{}'? This cannot be undone.", label),
        }
    });

    let notification = session.notification().map(|n| NotificationViewModel {
        message: n.message.clone(),
        level: match n.kind {
            NotificationKind::Success => StatusLevel::Success,
            NotificationKind::Error => StatusLevel::Error,
            NotificationKind::Neutral => StatusLevel::Neutral,
        },
    });

    BoardScreenViewModel {
        header: HeaderViewModel {
            title: "CREWDIR".to_string(),
            endpoint: session.store().endpoint().to_string(),
            total_count: directory.total_count,
            shown_count: directory.shown_count,
            last_refreshed: session.cache().last_refreshed(),
        },
        filter_bar: FilterBarViewModel {
            search: session.filter().search.clone(),
            department: session.filter().department.clone(),
        },
        directory,
        form,
        status_bar: StatusBarViewModel {
            notification,
            hint: BOARD_HINT.to_string(),
        },
        confirm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crewdir_client::RemoteStore;
    use crewdir_runtime::DirectorySession;

    #[test]
    fn test_add_mode_labels() {
        let session = DirectorySession::new(RemoteStore::new("http://localhost:8080"));
        let vm = build_board_view_model(&session);

        assert_eq!(vm.form.title, "Add New Employee");
        assert_eq!(vm.form.submit_label, "Add Employee");
        assert!(!vm.form.id_locked);
        assert!(!vm.form.cancel_visible);
        assert!(vm.confirm.is_none());
        assert!(vm.directory.is_empty);
    }

    #[test]
    fn test_pending_delete_produces_confirm_modal() {
        let mut session = DirectorySession::new(RemoteStore::new("http://localhost:8080"));
        session.request_delete("9".into());

        let vm = build_board_view_model(&session);
        let confirm = vm.confirm.expect("confirm modal");
        assert_eq!(confirm.id, "9");
        assert!(confirm.message.contains("Delete employee"));
    }
}
