use crate::commands::CommandExecutor;
use crate::result::Result;
use crate::wstypes::WebServiceType;
use clap::{value_parser, Args, Parser};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "toolws")]
#[command(about = "Launch uWSGI webservices for hosted tools")]
#[command(version)]
#[command(arg_required_else_help = true)]
#[command(
    help_template = "{before-help}{name} v{version}\n\n{about-with-newline}\n{usage-heading} {usage}\n\n{all-args}{after-help}"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
pub enum Commands {
    #[command(about = "Check prerequisites and run the webservice in the foreground")]
    Run {
        #[command(flatten)]
        target: TargetArgs,

        #[arg(short, long, value_parser = value_parser!(u16).range(1..), help = "Port for the HTTP socket")]
        port: u16,

        #[arg(long, help = "Print the command line instead of executing it")]
        dry_run: bool,
    },

    #[command(about = "Check that the tool has what the webservice type needs")]
    Check {
        #[command(flatten)]
        target: TargetArgs,
    },

    #[command(about = "Print the uWSGI command line for a webservice")]
    Command {
        #[command(flatten)]
        target: TargetArgs,

        #[arg(short, long, value_parser = value_parser!(u16).range(1..), help = "Port for the HTTP socket")]
        port: u16,

        #[arg(long, help = "Print as a JSON array")]
        json: bool,
    },

    #[command(about = "List supported webservice types")]
    Types {
        #[arg(long, help = "Print as JSON")]
        json: bool,
    },

    #[command(about = "Write a default toolws.toml")]
    InitConfig {
        #[arg(long, help = "Destination (default: user config directory)")]
        path: Option<String>,

        #[arg(long, help = "Force overwrite existing config")]
        force: bool,
    },
}

/// Which webservice to launch, for which tool.
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    #[arg(help = "Webservice type (uwsgi-plain or uwsgi-python)")]
    pub wstype: WebServiceType,

    #[arg(long, help = "Tool name (default: current account without its prefix)")]
    pub tool: Option<String>,

    #[arg(long, help = "Tool home directory (default: current home)")]
    pub home: Option<PathBuf>,

    #[arg(short, long, help = "Launcher config file")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let mut executor = CommandExecutor::new();

        match self.command {
            Commands::Run {
                target,
                port,
                dry_run,
            } => executor.run_webservice(target, port, dry_run).await,
            Commands::Check { target } => executor.check_webservice(target).await,
            Commands::Command { target, port, json } => {
                executor.print_command(target, port, json).await
            }
            Commands::Types { json } => executor.list_types(json).await,
            Commands::InitConfig { path, force } => executor.init_config(path, force).await,
        }
    }
}
