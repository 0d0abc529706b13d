use super::enums::OutputFormat;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List employees with optional client-side filters")]
    List {
        #[arg(
            long,
            help = "Substring match on name, role, email or department (case-insensitive)"
        )]
        search: Option<String>,

        #[arg(long, help = "Exact department match")]
        department: Option<String>,

        #[arg(long, default_value = "plain")]
        format: OutputFormat,
    },

    #[command(about = "Add a new employee")]
    Add {
        #[arg(long)]
        id: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        role: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        department: Option<String>,
    },

    #[command(about = "Update an existing employee (unset flags keep current values)")]
    Update {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        role: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long, help = "Pass an empty string to clear the department")]
        department: Option<String>,
    },

    #[command(about = "Delete an employee")]
    Remove {
        id: String,

        #[arg(long, help = "Skip the confirmation prompt")]
        yes: bool,
    },

    #[command(about = "Interactive directory board")]
    Board,

    #[command(about = "Write the config file")]
    Init {
        #[arg(long, help = "API base URL to store in the config")]
        api_url: Option<String>,
    },
}
