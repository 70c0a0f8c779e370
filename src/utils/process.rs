use crate::result::{Result, ToolwsError};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use which::which;

#[derive(Default)]
pub struct ProcessManager;

impl ProcessManager {
    pub fn new() -> Self {
        Self
    }

    /// Paths (anything with a separator) must exist; bare names go through PATH.
    pub fn find_executable(&self, name: &OsStr) -> Result<PathBuf> {
        let path = Path::new(name);
        let not_found = || {
            ToolwsError::NotFound(format!("Executable not found: {}", path.display()).into())
        };

        if path.components().count() > 1 {
            if path.exists() {
                return Ok(path.to_path_buf());
            }
            return Err(not_found());
        }

        which(name).map_err(|_| not_found())
    }

    /** Runs `argv` in the foreground with inherited standard streams
     *
     * # Behavior
     * - `argv[0]` is resolved with `find_executable`
     * - stdin, stdout and stderr are shared with the launcher
     * - Returns once the server exits
     *
     * # Errors
     * - `ToolwsError::Process` for an empty argv or spawn/wait failures
     * - `ToolwsError::NotFound` if the program cannot be located
     * - `ToolwsError::ServerExited` for a non-success exit status
     */
    pub async fn exec_server(&mut self, argv: &[OsString]) -> Result<()> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| ToolwsError::process(ToolwsError::EMPTY_COMMAND))?;

        let executable = self.find_executable(program)?;

        let mut command = Command::new(&executable);
        command.args(args);
        command.stdout(Stdio::inherit());
        command.stderr(Stdio::inherit());
        command.stdin(Stdio::inherit());

        let mut child = command.spawn().map_err(|e| {
            ToolwsError::Process(format!("{}: {}", ToolwsError::SERVER_START_FAILED, e).into())
        })?;

        log::info!("Started {} (pid {:?})", executable.display(), child.id());

        let status = child.wait().await.map_err(|e| {
            ToolwsError::Process(format!("Failed to wait for server: {}", e).into())
        })?;

        if !status.success() {
            return Err(ToolwsError::ServerExited {
                code: status.code(),
            });
        }

        Ok(())
    }
}
