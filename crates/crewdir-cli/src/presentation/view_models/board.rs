//! Board-specific view models.
//!
//! A `BoardScreenViewModel` is a complete snapshot of what the board
//! should display. The handler builds one after every action (and on idle
//! ticks, so notification expiry shows up) and ships it to the renderer;
//! the renderer keeps no domain state of its own.

use super::common::StatusLevel;
use chrono::{DateTime, Utc};
use crewdir_engine::DirectoryViewModel;
use serde::Serialize;

/// Complete screen state for board rendering
#[derive(Debug, Clone, Serialize)]
pub struct BoardScreenViewModel {
    pub header: HeaderViewModel,
    pub filter_bar: FilterBarViewModel,
    pub directory: DirectoryViewModel,
    pub form: FormPanelViewModel,
    pub status_bar: StatusBarViewModel,
    /// Present while a delete awaits confirmation; the renderer shows a
    /// modal and routes only y/n/Esc.
    pub confirm: Option<ConfirmViewModel>,
}

/// Top strip: identity and stats. `total_count` counts the unfiltered
/// cache.
#[derive(Debug, Clone, Serialize)]
pub struct HeaderViewModel {
    pub title: String,
    pub endpoint: String,
    pub total_count: usize,
    pub shown_count: usize,
    pub last_refreshed: Option<DateTime<Utc>>,
}

/// Current filter inputs; an empty department means "all departments".
#[derive(Debug, Clone, Serialize)]
pub struct FilterBarViewModel {
    pub search: String,
    pub department: String,
}

/// The add/edit form panel. Labels are decided here so the renderer only
/// draws them.
#[derive(Debug, Clone, Serialize)]
pub struct FormPanelViewModel {
    pub title: String,
    pub submit_label: String,
    pub id: String,
    pub name: String,
    pub role: String,
    pub email: String,
    pub department: String,
    pub id_locked: bool,
    pub cancel_visible: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusBarViewModel {
    pub notification: Option<NotificationViewModel>,
    pub hint: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NotificationViewModel {
    pub message: String,
    pub level: StatusLevel,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfirmViewModel {
    pub id: String,
    pub message: String,
}
