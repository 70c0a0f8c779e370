use super::checked_command;
use crate::cli::TargetArgs;
use crate::result::Result;
use crate::utils::process::ProcessManager;
use crate::wstypes::display_command;

pub async fn execute(target: &TargetArgs, port: u16, dry_run: bool) -> Result<()> {
    log::info!(
        "Starting {} on port {} (dry run: {})",
        target.wstype,
        port,
        dry_run
    );

    let argv = checked_command(target, port).await?;
    let rendered = display_command(&argv).join(" ");
    log::info!("Command line: {}", rendered);

    if dry_run {
        println!("{}", rendered);
        return Ok(());
    }

    let mut process_manager = ProcessManager::new();
    let result = process_manager.exec_server(&argv).await;

    match &result {
        Ok(_) => log::info!("Webservice exited cleanly"),
        Err(e) => log::error!("Webservice execution failed: {}", e),
    }

    result
}
