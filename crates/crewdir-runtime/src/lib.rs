pub mod action;
pub mod cache;
pub mod form;
pub mod notify;
pub mod session;

pub use action::Action;
pub use cache::EmployeeCache;
pub use form::{FormController, FormField, FormFields, FormMode};
pub use notify::{NOTIFICATION_TTL, Notification, NotificationKind, NotificationSlot};
pub use session::{DirectorySession, RemoveOutcome, SubmitOutcome};
