use anyhow::{Result, anyhow};
use crewdir_runtime::{DirectorySession, RemoveOutcome};
use crewdir_types::EmployeeId;
use owo_colors::OwoColorize;
use std::io::{self, Write};

pub async fn handle(mut session: DirectorySession, id: String, yes: bool) -> Result<()> {
    let id = EmployeeId::from(id);
    session.request_delete(id.clone());

    if !yes && !confirm(&format!("Delete employee '{}'? [y/N] ", id))? {
        // Declined: nothing was sent, nothing to report.
        session.decline_delete();
        return Ok(());
    }

    match session.confirm_delete().await {
        RemoveOutcome::Removed(id) => {
            println!("{} employee '{}'", "Deleted".green(), id);
            Ok(())
        }
        RemoveOutcome::NothingPending => Ok(()),
        RemoveOutcome::Failed(err) => Err(anyhow!(err).context("failed to delete employee")),
    }
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
