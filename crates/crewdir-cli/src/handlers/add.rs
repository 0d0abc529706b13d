use anyhow::{Result, anyhow};
use crewdir_runtime::{DirectorySession, FormField, SubmitOutcome};
use owo_colors::OwoColorize;

pub async fn handle(
    mut session: DirectorySession,
    id: String,
    name: String,
    role: String,
    email: String,
    department: Option<String>,
) -> Result<()> {
    let form = session.form_mut();
    form.set_field(FormField::Id, id);
    form.set_field(FormField::Name, name);
    form.set_field(FormField::Role, role);
    form.set_field(FormField::Email, email);
    form.set_field(FormField::Department, department.unwrap_or_default());

    match session.submit().await {
        SubmitOutcome::Created(id) | SubmitOutcome::Updated(id) => {
            println!("{} employee '{}'", "Added".green(), id);
            Ok(())
        }
        SubmitOutcome::DuplicateId(id) => Err(anyhow!(
            "employee id '{}' already exists; pick another id",
            id
        )),
        SubmitOutcome::Failed(err) => Err(anyhow!(err).context("failed to add employee")),
    }
}
