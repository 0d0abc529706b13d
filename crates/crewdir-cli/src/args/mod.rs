mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "crewdir")]
#[command(about = "Manage an employee directory from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Base URL of the directory API")]
    pub api_url: Option<String>,

    #[arg(long, global = true, help = "Directory holding config.toml")]
    pub config_dir: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
