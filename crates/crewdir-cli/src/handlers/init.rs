use crate::config::Config;
use anyhow::Result;
use std::path::Path;

pub fn handle(config_path: &Path, mut config: Config, api_url: Option<String>) -> Result<()> {
    if let Some(api_url) = api_url {
        config.api_url = Some(api_url);
    }

    config.save_to(config_path)?;

    println!("Wrote {}", config_path.display());
    match &config.api_url {
        Some(api_url) => println!("API base URL: {}", api_url),
        None => println!("API base URL: {} (default)", crate::config::DEFAULT_API_URL),
    }

    Ok(())
}
