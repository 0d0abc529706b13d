use anyhow::{Context, Result, anyhow, bail};
use crewdir_runtime::{DirectorySession, FormField, SubmitOutcome};
use crewdir_types::EmployeeId;
use owo_colors::OwoColorize;

pub async fn handle(
    mut session: DirectorySession,
    id: String,
    name: Option<String>,
    role: Option<String>,
    email: Option<String>,
    department: Option<String>,
) -> Result<()> {
    session
        .refresh()
        .await
        .context("failed to load employees")?;

    let id = EmployeeId::from(id);
    if !session.start_edit(&id) {
        bail!("no employee with id '{}'", id);
    }

    // Unset flags keep the values populated from the cache.
    let form = session.form_mut();
    if let Some(name) = name {
        form.set_field(FormField::Name, name);
    }
    if let Some(role) = role {
        form.set_field(FormField::Role, role);
    }
    if let Some(email) = email {
        form.set_field(FormField::Email, email);
    }
    if let Some(department) = department {
        form.set_field(FormField::Department, department);
    }

    match session.submit().await {
        SubmitOutcome::Created(id) | SubmitOutcome::Updated(id) => {
            println!("{} employee '{}'", "Updated".green(), id);
            Ok(())
        }
        SubmitOutcome::DuplicateId(id) => {
            Err(anyhow!("employee id '{}' already exists", id))
        }
        SubmitOutcome::Failed(err) => Err(anyhow!(err).context("failed to update employee")),
    }
}
