pub mod check;
pub mod command;
pub mod init_config;
pub mod run;
pub mod types;

use crate::cli::TargetArgs;
use crate::config::LauncherConfig;
use crate::result::Result;
use crate::tool::Tool;
use crate::wstypes::WebService;
use smol_str::SmolStr;
use std::ffi::OsString;

#[derive(Debug)]
pub enum CommandType {
    Run {
        target: TargetArgs,
        port: u16,
        dry_run: bool,
    },
    Check {
        target: TargetArgs,
    },
    Command {
        target: TargetArgs,
        port: u16,
        json: bool,
    },
    Types {
        json: bool,
    },
    InitConfig {
        path: Option<SmolStr>,
        force: bool,
    },
}

impl CommandType {
    pub async fn execute(self) -> Result<()> {
        match self {
            CommandType::Run {
                target,
                port,
                dry_run,
            } => run::execute(&target, port, dry_run).await,
            CommandType::Check { target } => check::execute(&target).await,
            CommandType::Command { target, port, json } => {
                command::execute(&target, port, json).await
            }
            CommandType::Types { json } => types::execute(json).await,
            CommandType::InitConfig { path, force } => {
                init_config::execute(path.as_deref(), force).await
            }
        }
    }
}

#[derive(Default)]
pub struct CommandExecutor;

impl CommandExecutor {
    pub fn new() -> Self {
        Self
    }

    pub async fn run_webservice(
        &mut self,
        target: TargetArgs,
        port: u16,
        dry_run: bool,
    ) -> Result<()> {
        CommandType::Run {
            target,
            port,
            dry_run,
        }
        .execute()
        .await
    }

    pub async fn check_webservice(&mut self, target: TargetArgs) -> Result<()> {
        CommandType::Check { target }.execute().await
    }

    pub async fn print_command(&mut self, target: TargetArgs, port: u16, json: bool) -> Result<()> {
        CommandType::Command { target, port, json }.execute().await
    }

    pub async fn list_types(&mut self, json: bool) -> Result<()> {
        CommandType::Types { json }.execute().await
    }

    pub async fn init_config(&mut self, path: Option<String>, force: bool) -> Result<()> {
        CommandType::InitConfig {
            path: path.map(|s| s.into()),
            force,
        }
        .execute()
        .await
    }
}

/// Loads config, resolves the tool and builds the requested webservice.
pub(crate) async fn prepare(target: &TargetArgs) -> Result<Box<dyn WebService>> {
    let config = LauncherConfig::load(target.config.as_deref()).await?;
    let tool = Tool::resolve(target.tool.as_deref(), target.home.as_deref(), &config.tool)?;

    log::info!(
        "Preparing {} for tool {} in {}",
        target.wstype,
        tool.name(),
        tool.home().display()
    );

    Ok(target.wstype.build(tool, config.uwsgi))
}

/// Checks first, then renders the command line for `port`.
pub(crate) async fn checked_command(target: &TargetArgs, port: u16) -> Result<Vec<OsString>> {
    let service = prepare(target).await?;
    service.check()?;
    Ok(service.command(port))
}
