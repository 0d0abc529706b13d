use super::args::{Cli, Commands};
use super::handlers;
use crate::config::{self, Config};
use anyhow::Result;
use crewdir_client::RemoteStore;
use crewdir_runtime::DirectorySession;

pub fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        show_guidance();
        return Ok(());
    };

    let config_dir = config::resolve_config_dir(cli.config_dir.as_deref())?;
    let config_path = config::config_file(&config_dir);
    let config = Config::load_from(&config_path)?;

    if let Commands::Init { api_url } = command {
        return handlers::init::handle(&config_path, config, api_url);
    }

    // The board owns the alternate screen; keep stderr logging to console
    // commands only.
    if !matches!(command, Commands::Board) {
        init_tracing();
    }

    let api_url = config::resolve_api_url(cli.api_url, &config);
    let session = DirectorySession::new(RemoteStore::new(api_url));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    match command {
        Commands::List {
            search,
            department,
            format,
        } => runtime.block_on(handlers::list::handle(session, search, department, format)),

        Commands::Add {
            id,
            name,
            role,
            email,
            department,
        } => runtime.block_on(handlers::add::handle(
            session, id, name, role, email, department,
        )),

        Commands::Update {
            id,
            name,
            role,
            email,
            department,
        } => runtime.block_on(handlers::update::handle(
            session, id, name, role, email, department,
        )),

        Commands::Remove { id, yes } => runtime.block_on(handlers::remove::handle(session, id, yes)),

        Commands::Board => handlers::board::handle(&runtime, session),

        Commands::Init { .. } => Ok(()),
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn show_guidance() {
    println!("crewdir - manage an employee directory from the terminal");
    println!();
    println!("Common commands:");
    println!("  crewdir list                 Show the directory");
    println!("  crewdir board                Interactive board (search, edit, delete)");
    println!("  crewdir add --id .. --name .. --role .. --email ..");
    println!("  crewdir init --api-url ..    Remember the API base URL");
    println!();
    println!("Run 'crewdir --help' for the full command list.");
}
