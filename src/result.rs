use std::borrow::Cow;
use std::path::PathBuf;
use thiserror::Error;

/** Main Result type alias for toolws operations
 *
 * # Usage
 * ```no_run
 * use toolws::result::Result;
 * use toolws::config::LauncherConfig;
 *
 * async fn read_config() -> Result<LauncherConfig> {
 *     // Function automatically propagates ToolwsError
 *     let content = std::fs::read_to_string("toolws.toml")?;
 *     Ok(toml::from_str(&content)?)
 * }
 * ```
 */
pub type Result<T> = std::result::Result<T, ToolwsError>;

/** Error enumeration for the webservice launcher
 *
 * # Error Categories
 * - **Io**: File system and I/O operations
 * - **Process**: uWSGI spawn and wait failures
 * - **Config**: Launcher configuration and tool resolution errors
 * - **NotFound**: Missing files or executables
 * - **InvalidWebService**: Capability check failed before launch
 * - **UnknownWebService**: Unsupported webservice type name
 * - **ServerExited**: uWSGI ran but exited unsuccessfully
 * - **TomlParse** / **TomlSerialize**: launcher config TOML failures
 * - **JsonError**: JSON rendering failures
 */
#[derive(Error, Debug)]
pub enum ToolwsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Process error: {0}")]
    Process(Cow<'static, str>),

    #[error("Config error: {0}")]
    Config(Cow<'static, str>),

    #[error("Not found: {0}")]
    NotFound(Cow<'static, str>),

    #[error("Could not find {}. {hint}", .path.display())]
    InvalidWebService {
        path: PathBuf,
        hint: Cow<'static, str>,
    },

    #[error("Unknown webservice type: {0}")]
    UnknownWebService(Cow<'static, str>),

    #[error("Server exited with {}", describe_exit(.code))]
    ServerExited { code: Option<i32> },

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/** Error constants and constructor methods
 *
 * # Usage Examples
 * ```ignore
 * use toolws::result::ToolwsError;
 *
 * return Err(ToolwsError::process(ToolwsError::SERVER_START_FAILED));
 * return Err(ToolwsError::config("Workers must be at least 1"));
 * return Err(ToolwsError::not_found(format!("{} not found", binary)));
 * ```
 */
impl ToolwsError {
    pub const SERVER_START_FAILED: &'static str = "Failed to start server";
    pub const EMPTY_COMMAND: &'static str = "Refusing to execute an empty command line";

    pub fn process(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::Process(msg.into())
    }

    pub fn config(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::Config(msg.into())
    }

    pub fn not_found(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::NotFound(msg.into())
    }

    /** Creates the capability-check failure for a missing prerequisite
     *
     * # Arguments
     * * `path` - Absolute path that was expected to exist
     * * `hint` - Human-readable advice naming the path relative to `~`
     */
    pub fn invalid_webservice(
        path: impl Into<PathBuf>,
        hint: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::InvalidWebService {
            path: path.into(),
            hint: hint.into(),
        }
    }

    /** Exit code the launcher should terminate with for this error
     *
     * The child's own code is passed through so the orchestrator sees what
     * uWSGI reported. Everything else, including signal deaths, maps to 1.
     */
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ServerExited { code: Some(code) } => *code,
            _ => 1,
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (killed by signal)".to_string(),
    }
}
