pub mod filter;
pub mod view;

pub use filter::{DirectoryFilter, apply};
pub use view::{
    AccentColor, DirectoryViewModel, EmployeeCardViewModel, KNOWN_DEPARTMENTS,
    build_directory_view, department_accent, initials,
};
