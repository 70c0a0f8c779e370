/// toolws - uWSGI webservice launcher for hosted tools
///
/// Checks that a tool has what its webservice type needs, builds the uWSGI
/// command line and runs it in the foreground with inherited stdio.
///
/// Main modules:
/// - cli: Command-line interface parsing and execution
/// - commands: Implementation of the subcommands
/// - config: Launcher configuration (`toolws.toml`)
/// - result: Error handling and result types
/// - tool: The hosted tool and its home directory
/// - utils: Process execution helpers
/// - wstypes: Supported webservice types
pub mod cli;
pub mod commands;
pub mod config;
pub mod result;
pub mod tool;
pub mod utils;
pub mod wstypes;
