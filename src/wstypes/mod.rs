pub mod python;
pub mod uwsgi;

pub use python::PythonWebService;
pub use uwsgi::UwsgiWebService;

use crate::config::UwsgiSettings;
use crate::result::{Result, ToolwsError};
use crate::tool::Tool;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Grid queue both uWSGI types are scheduled on.
pub const WEBGRID_GENERIC: &str = "webgrid-generic";

/** A webservice type that can be checked and launched for a tool
 *
 * # Contract
 * - `check` inspects the filesystem only and must be called before
 *   `command`; a failed check means nothing gets launched
 * - `command` returns the full argv, program first, in a stable order;
 *   paths keep their raw bytes
 */
pub trait WebService {
    fn name(&self) -> &'static str;

    fn queue(&self) -> &'static str;

    fn check(&self) -> Result<()>;

    fn command(&self, port: u16) -> Vec<OsString>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebServiceType {
    UwsgiPlain,
    UwsgiPython,
}

impl WebServiceType {
    pub const ALL: [WebServiceType; 2] = [WebServiceType::UwsgiPlain, WebServiceType::UwsgiPython];

    pub fn name(self) -> &'static str {
        match self {
            WebServiceType::UwsgiPlain => uwsgi::NAME,
            WebServiceType::UwsgiPython => python::NAME,
        }
    }

    pub fn queue(self) -> &'static str {
        WEBGRID_GENERIC
    }

    pub fn build(self, tool: Tool, settings: UwsgiSettings) -> Box<dyn WebService> {
        match self {
            WebServiceType::UwsgiPlain => Box::new(UwsgiWebService::new(tool, settings)),
            WebServiceType::UwsgiPython => Box::new(PythonWebService::new(tool, settings)),
        }
    }
}

impl fmt::Display for WebServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WebServiceType {
    type Err = ToolwsError;

    fn from_str(s: &str) -> Result<Self> {
        WebServiceType::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = WebServiceType::ALL.iter().map(|k| k.name()).collect();
                ToolwsError::UnknownWebService(
                    format!("{} (expected one of: {})", s, known.join(", ")).into(),
                )
            })
    }
}

pub(crate) fn socket_arg(port: u16) -> OsString {
    format!(":{}", port).into()
}

pub(crate) fn path_arg(path: impl AsRef<Path>) -> OsString {
    path.as_ref().as_os_str().to_owned()
}

/// Lossy rendering of an argv for printing and logs.
pub fn display_command(argv: &[OsString]) -> Vec<String> {
    argv.iter()
        .map(|arg| OsStr::to_string_lossy(arg).into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for kind in WebServiceType::ALL {
            assert_eq!(kind.name().parse::<WebServiceType>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_type_lists_known_ones() {
        let err = "lighttpd".parse::<WebServiceType>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("lighttpd"));
        assert!(message.contains("uwsgi-plain"));
        assert!(message.contains("uwsgi-python"));
    }

    #[test]
    fn display_command_keeps_order() {
        let argv: Vec<OsString> = vec!["uwsgi".into(), socket_arg(80), path_arg("/srv/demo")];
        assert_eq!(display_command(&argv), vec!["uwsgi", ":80", "/srv/demo"]);
    }

    #[test]
    fn built_services_report_their_identity() {
        let tool = Tool::new("demo", "/srv/demo");
        for kind in WebServiceType::ALL {
            let service = kind.build(tool.clone(), UwsgiSettings::default());
            assert_eq!(service.name(), kind.name());
            assert_eq!(service.queue(), WEBGRID_GENERIC);
        }
    }
}
