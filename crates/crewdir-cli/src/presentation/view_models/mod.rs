pub mod board;
pub mod common;
pub mod directory;

pub use board::{
    BoardScreenViewModel, ConfirmViewModel, FilterBarViewModel, FormPanelViewModel,
    HeaderViewModel, NotificationViewModel, StatusBarViewModel,
};
pub use common::StatusLevel;
pub use directory::DirectoryListViewModel;
