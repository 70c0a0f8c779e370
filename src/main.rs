use clap::Parser;
use dirs::config_dir;
use env_logger::Builder;
use log::LevelFilter;
use std::fs::OpenOptions;
use std::path::PathBuf;
use toolws::cli::Cli;

/** Main entry point for toolws
 *
 * # Process Flow
 * 1. Initialize logging with file output
 * 2. Parse command line arguments using Clap
 * 3. Execute the requested command
 * 4. Report errors on stderr and exit with the matching code
 *
 * # Exit Codes
 * - uWSGI's own exit code when it fails
 * - 1 for launcher errors (failed check, bad config, missing binary)
 * - Clap's code for usage errors
 */
#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also arrive here
            let _ = e.print();
            std::process::exit(e.exit_code());
        }
    };

    if let Err(e) = cli.execute().await {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

/** Initializes logging to a file, falling back to stderr
 *
 * # Configuration
 * - Log file: `TOOLWS_LOG_FILE`, else `<config_dir>/toolws/toolws.log`
 * - Log level: Info and above unless `RUST_LOG` says otherwise
 * - Output: Append mode to preserve historical logs
 *
 * # Notes
 * - Never fatal: a launch must not fail because the log is unwritable
 */
fn init_logging() {
    let log_file = get_log_file_path();

    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent).ok();
    }

    let mut builder = Builder::new();
    builder.filter_level(LevelFilter::Info);
    builder.parse_default_env();

    match OpenOptions::new().create(true).append(true).open(&log_file) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            builder.target(env_logger::Target::Stderr);
        }
    }

    builder.init();

    log::info!("toolws started");
}

fn get_log_file_path() -> PathBuf {
    if let Some(path) = std::env::var_os("TOOLWS_LOG_FILE") {
        return PathBuf::from(path);
    }

    if let Some(config_dir) = config_dir() {
        config_dir.join("toolws").join("toolws.log")
    } else {
        std::env::current_dir()
            .map(|p| p.join("toolws.log"))
            .unwrap_or_else(|_| "toolws.log".into())
    }
}
