use super::prepare;
use crate::cli::TargetArgs;
use crate::result::Result;

pub async fn execute(target: &TargetArgs) -> Result<()> {
    let service = prepare(target).await?;

    match service.check() {
        Ok(()) => {
            log::info!("Check passed for {}", service.name());
            println!("{}: ready", service.name());
            Ok(())
        }
        Err(e) => {
            log::warn!("Check failed for {}: {}", service.name(), e);
            Err(e)
        }
    }
}
