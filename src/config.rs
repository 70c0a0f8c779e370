use crate::result::{Result, ToolwsError};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

pub const CONFIG_FILE_NAME: &str = "toolws.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    pub uwsgi: UwsgiSettings,
    pub tool: ToolSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UwsgiSettings {
    /// Program to exec. Bare names are looked up on PATH.
    pub binary: String,
    pub workers: u32,
    /// Relative to the tool home.
    pub log_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    pub user_prefix: String,
}

impl Default for UwsgiSettings {
    fn default() -> Self {
        Self {
            binary: "/usr/bin/uwsgi".to_string(),
            workers: 4,
            log_file: "uwsgi.log".into(),
        }
    }
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            user_prefix: "tools.".to_string(),
        }
    }
}

impl LauncherConfig {
    pub async fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        Ok(toml::from_str(&content)?)
    }

    /** Loads the launcher configuration
     *
     * # Lookup Order
     * 1. `explicit` path, which must be an existing regular file
     * 2. `<config_dir>/toolws/toolws.toml` when present
     * 3. Built-in defaults
     *
     * The result is validated before it is returned.
     */
    pub async fn load(explicit: Option<&Path>) -> Result<Self> {
        let config = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ToolwsError::not_found(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                if !path.is_file() {
                    return Err(ToolwsError::config(format!(
                        "Config path is not a file: {}",
                        path.display()
                    )));
                }
                log::info!("Loading launcher config from {}", path.display());
                Self::from_file(path).await?
            }
            None => match Self::default_path() {
                Some(path) if path.exists() => {
                    log::info!("Loading launcher config from {}", path.display());
                    Self::from_file(&path).await?
                }
                _ => {
                    log::debug!("No launcher config found, using defaults");
                    Self::default()
                }
            },
        };

        config.validate()?;
        Ok(config)
    }

    pub async fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        fs::write(path, content).await?;
        Ok(())
    }

    pub fn default_path() -> Option<PathBuf> {
        config_dir().map(|dir| dir.join("toolws").join(CONFIG_FILE_NAME))
    }

    pub fn validate(&self) -> Result<()> {
        if self.uwsgi.binary.trim().is_empty() {
            return Err(ToolwsError::Config("uWSGI binary cannot be empty".into()));
        }

        if self.uwsgi.workers == 0 {
            return Err(ToolwsError::Config(
                "uWSGI workers must be at least 1".into(),
            ));
        }

        if self.uwsgi.log_file.as_os_str().is_empty() {
            return Err(ToolwsError::Config("Log file cannot be empty".into()));
        }

        if self.uwsgi.log_file.is_absolute() {
            return Err(ToolwsError::Config(
                "Log file must be relative to the tool home".into(),
            ));
        }

        Ok(())
    }
}
