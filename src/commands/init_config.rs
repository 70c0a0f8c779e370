use crate::config::LauncherConfig;
use crate::result::{Result, ToolwsError};
use std::path::PathBuf;

pub async fn execute(path: Option<&str>, force: bool) -> Result<()> {
    let config_path = match path {
        Some(path) => PathBuf::from(path),
        None => LauncherConfig::default_path()
            .ok_or_else(|| ToolwsError::config("Could not determine config directory"))?,
    };

    log::info!(
        "Writing default config to {} with force: {}",
        config_path.display(),
        force
    );

    if config_path.exists() && !force {
        log::warn!("{} already exists, init aborted", config_path.display());
        return Err(ToolwsError::Config(
            format!(
                "{} already exists. Use --force to overwrite.",
                config_path.display()
            )
            .into(),
        ));
    }

    LauncherConfig::default().save_to_file(&config_path).await?;

    println!("{} created successfully!", config_path.display());
    Ok(())
}
