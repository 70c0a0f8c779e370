use super::{path_arg, socket_arg, WebService, WEBGRID_GENERIC};
use crate::config::UwsgiSettings;
use crate::result::{Result, ToolwsError};
use crate::tool::Tool;
use std::ffi::OsString;

pub const NAME: &str = "uwsgi-plain";

const INI_FILE: &str = "uwsgi.ini";

/// Generic uWSGI driven entirely by the tool's `~/uwsgi.ini`.
pub struct UwsgiWebService {
    tool: Tool,
    settings: UwsgiSettings,
}

impl UwsgiWebService {
    pub fn new(tool: Tool, settings: UwsgiSettings) -> Self {
        Self { tool, settings }
    }
}

impl WebService for UwsgiWebService {
    fn name(&self) -> &'static str {
        NAME
    }

    fn queue(&self) -> &'static str {
        WEBGRID_GENERIC
    }

    fn check(&self) -> Result<()> {
        let ini_path = self.tool.homedir_subpath(INI_FILE);
        if !ini_path.exists() {
            return Err(ToolwsError::invalid_webservice(
                ini_path,
                "Are you sure you have a proper uwsgi config setup in ~/uwsgi.ini?",
            ));
        }
        Ok(())
    }

    fn command(&self, port: u16) -> Vec<OsString> {
        vec![
            self.settings.binary.clone().into(),
            "--http-socket".into(),
            socket_arg(port),
            "--logto".into(),
            path_arg(self.tool.homedir_subpath(&self.settings.log_file)),
            "--ini".into(),
            path_arg(self.tool.homedir_subpath(INI_FILE)),
            "--workers".into(),
            self.settings.workers.to_string().into(),
            "--die-on-term".into(),
            "--strict".into(),
            "--master".into(),
        ]
    }
}
