use crate::config::ToolSettings;
use crate::result::{Result, ToolwsError};
use dirs::home_dir;
use smol_str::SmolStr;
use std::path::{Path, PathBuf};

/// A hosted tool: the service account a webservice runs as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tool {
    name: SmolStr,
    home: PathBuf,
}

impl Tool {
    pub fn new(name: impl Into<SmolStr>, home: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            home: home.into(),
        }
    }

    /** Resolves the tool from explicit values or the running account
     *
     * # Resolution
     * - `name`: explicit value, else `USER`/`LOGNAME` with the account
     *   prefix (e.g. `tools.`) stripped
     * - `home`: explicit value made absolute against the working
     *   directory, else the current user's home directory
     *
     * # Errors
     * - `ToolwsError::Config` if either value cannot be determined or the
     *   name is empty
     */
    pub fn resolve(
        name: Option<&str>,
        home: Option<&Path>,
        settings: &ToolSettings,
    ) -> Result<Self> {
        let name = match name {
            Some(name) => name.to_string(),
            None => {
                let account = std::env::var("USER")
                    .or_else(|_| std::env::var("LOGNAME"))
                    .map_err(|_| {
                        ToolwsError::config("Could not determine tool name; pass --tool")
                    })?;
                strip_account_prefix(&account, &settings.user_prefix).to_string()
            }
        };

        if name.trim().is_empty() {
            return Err(ToolwsError::config("Tool name cannot be empty"));
        }

        let home = match home {
            Some(home) => std::path::absolute(home)?,
            None => home_dir().ok_or_else(|| {
                ToolwsError::config("Could not determine home directory; pass --home")
            })?,
        };

        log::debug!("Resolved tool {} with home {}", name, home.display());

        Ok(Self::new(name, home))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn homedir_subpath(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.home.join(rel)
    }
}

fn strip_account_prefix<'a>(account: &'a str, prefix: &str) -> &'a str {
    if prefix.is_empty() {
        return account;
    }
    account.strip_prefix(prefix).unwrap_or(account)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subpaths_are_joined_onto_home() {
        let tool = Tool::new("demo", "/data/project/demo");
        assert_eq!(
            tool.homedir_subpath("www/python/src"),
            PathBuf::from("/data/project/demo/www/python/src")
        );
        assert_eq!(tool.name(), "demo");
    }

    #[test]
    fn explicit_values_win() {
        let settings = ToolSettings::default();
        let tool = Tool::resolve(Some("demo"), Some(Path::new("/srv/demo")), &settings).unwrap();
        assert_eq!(tool, Tool::new("demo", "/srv/demo"));
    }

    #[test]
    fn relative_home_is_made_absolute() {
        let settings = ToolSettings::default();
        let tool = Tool::resolve(Some("demo"), Some(Path::new("rel/demo")), &settings).unwrap();
        assert!(tool.home().is_absolute());
        assert!(tool.home().ends_with("rel/demo"));
        assert_eq!(
            tool.home(),
            std::env::current_dir().unwrap().join("rel/demo")
        );
    }

    #[test]
    fn empty_name_is_rejected() {
        let settings = ToolSettings::default();
        let err = Tool::resolve(Some("  "), Some(Path::new("/srv/demo")), &settings).unwrap_err();
        assert!(matches!(err, ToolwsError::Config(_)));
    }

    #[test]
    fn account_prefix_is_stripped() {
        assert_eq!(strip_account_prefix("tools.demo", "tools."), "demo");
        assert_eq!(strip_account_prefix("alice", "tools."), "alice");
        assert_eq!(strip_account_prefix("tools.demo", ""), "tools.demo");
    }
}
