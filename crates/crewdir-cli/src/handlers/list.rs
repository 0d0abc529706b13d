use crate::args::OutputFormat;
use crate::presentation::renderers::ConsoleRenderer;
use crate::presentation::presenters;
use anyhow::{Context, Result};
use crewdir_runtime::DirectorySession;

pub async fn handle(
    mut session: DirectorySession,
    search: Option<String>,
    department: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    session
        .refresh()
        .await
        .context("failed to load employees")?;

    if let Some(search) = search {
        session.set_search(search);
    }
    if let Some(department) = department {
        session.set_department_filter(department);
    }

    let filtered = session.filtered();
    let view_model = presenters::present_directory(&session, &filtered);

    ConsoleRenderer::new(format).render_directory(&view_model)
}
