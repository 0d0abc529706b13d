use crewdir_engine::DirectoryViewModel;
use serde::Serialize;

/// Console `list` output: the directory view plus the filter inputs that
/// produced it, for context in both plain and JSON renderings.
#[derive(Debug, Clone, Serialize)]
pub struct DirectoryListViewModel {
    pub endpoint: String,
    pub search: Option<String>,
    pub department: Option<String>,
    pub directory: DirectoryViewModel,
}
