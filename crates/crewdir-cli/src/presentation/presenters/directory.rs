use crate::presentation::view_models::DirectoryListViewModel;
use crewdir_engine::build_directory_view;
use crewdir_runtime::DirectorySession;
use crewdir_types::Employee;

/// Build the console `list` view from the session and its filtered slice.
pub fn present_directory(
    session: &DirectorySession,
    filtered: &[Employee],
) -> DirectoryListViewModel {
    let filter = session.filter();

    DirectoryListViewModel {
        endpoint: session.store().endpoint().to_string(),
        search: (!filter.search.is_empty()).then(|| filter.search.clone()),
        department: (!filter.department.is_empty()).then(|| filter.department.clone()),
        directory: build_directory_view(session.cache().all(), filtered),
    }
}
