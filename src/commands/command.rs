use super::checked_command;
use crate::cli::TargetArgs;
use crate::result::Result;
use crate::wstypes::display_command;

pub async fn execute(target: &TargetArgs, port: u16, json: bool) -> Result<()> {
    let argv = display_command(&checked_command(target, port).await?);

    if json {
        println!("{}", serde_json::to_string(&argv)?);
    } else {
        println!("{}", argv.join(" "));
    }

    Ok(())
}
