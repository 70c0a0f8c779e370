use super::{path_arg, socket_arg, WebService, WEBGRID_GENERIC};
use crate::config::UwsgiSettings;
use crate::result::{Result, ToolwsError};
use crate::tool::Tool;
use std::ffi::OsString;

pub const NAME: &str = "uwsgi-python";

const SRC_DIR: &str = "www/python/src";
const APP_FILE: &str = "www/python/src/app.py";
const VENV_DIR: &str = "www/python/venv";
const INI_FILE: &str = "www/python/uwsgi.ini";

/** uWSGI serving the WSGI callable `app` from `~/www/python/src/app.py`
 *
 * # Conditional Flags
 * - `--venv ~/www/python/venv` when the virtualenv exists
 * - `--ini ~/www/python/uwsgi.ini` when the tool ships extra settings
 *
 * The application is mounted under `/<tool name>`.
 */
pub struct PythonWebService {
    tool: Tool,
    settings: UwsgiSettings,
}

impl PythonWebService {
    pub fn new(tool: Tool, settings: UwsgiSettings) -> Self {
        Self { tool, settings }
    }
}

impl WebService for PythonWebService {
    fn name(&self) -> &'static str {
        NAME
    }

    fn queue(&self) -> &'static str {
        WEBGRID_GENERIC
    }

    fn check(&self) -> Result<()> {
        let src_path = self.tool.homedir_subpath(SRC_DIR);
        if !src_path.exists() {
            return Err(ToolwsError::invalid_webservice(
                src_path,
                "Are you sure you have a proper uwsgi application in ~/www/python/src?",
            ));
        }
        Ok(())
    }

    fn command(&self, port: u16) -> Vec<OsString> {
        let mut mount = OsString::from(format!("/{}=", self.tool.name()));
        mount.push(self.tool.homedir_subpath(APP_FILE));

        let mut command: Vec<OsString> = vec![
            self.settings.binary.clone().into(),
            // uWSGI skips plugins that fail to load
            "--plugin".into(),
            "python,python3".into(),
            "--http-socket".into(),
            socket_arg(port),
            "--chdir".into(),
            path_arg(self.tool.homedir_subpath(SRC_DIR)),
            "--logto".into(),
            path_arg(self.tool.homedir_subpath(&self.settings.log_file)),
            "--callable".into(),
            "app".into(),
            "--manage-script-name".into(),
            "--workers".into(),
            self.settings.workers.to_string().into(),
            "--mount".into(),
            mount,
            "--die-on-term".into(),
            "--strict".into(),
            "--master".into(),
        ];

        let venv = self.tool.homedir_subpath(VENV_DIR);
        if venv.exists() {
            log::debug!("Using virtualenv {}", venv.display());
            command.push("--venv".into());
            command.push(venv.into_os_string());
        }

        let ini = self.tool.homedir_subpath(INI_FILE);
        if ini.exists() {
            log::debug!("Using extra uwsgi settings {}", ini.display());
            command.push("--ini".into());
            command.push(ini.into_os_string());
        }

        command
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wstypes::display_command;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn service(home: &TempDir) -> PythonWebService {
        PythonWebService::new(Tool::new("demo", home.path()), UwsgiSettings::default())
    }

    fn home_str(home: &TempDir) -> String {
        home.path().to_string_lossy().into_owned()
    }

    #[test]
    fn check_requires_source_dir() {
        let home = tempdir().unwrap();
        let err = service(&home).check().unwrap_err();
        assert!(err.to_string().contains("www/python/src"));

        fs::create_dir_all(home.path().join(SRC_DIR)).unwrap();
        assert!(service(&home).check().is_ok());
    }

    #[test]
    fn base_command_without_optional_paths() {
        let home = tempdir().unwrap();
        let h = home_str(&home);

        assert_eq!(
            display_command(&service(&home).command(4321)),
            vec![
                "/usr/bin/uwsgi".to_string(),
                "--plugin".to_string(),
                "python,python3".to_string(),
                "--http-socket".to_string(),
                ":4321".to_string(),
                "--chdir".to_string(),
                format!("{}/www/python/src", h),
                "--logto".to_string(),
                format!("{}/uwsgi.log", h),
                "--callable".to_string(),
                "app".to_string(),
                "--manage-script-name".to_string(),
                "--workers".to_string(),
                "4".to_string(),
                "--mount".to_string(),
                format!("/demo={}/www/python/src/app.py", h),
                "--die-on-term".to_string(),
                "--strict".to_string(),
                "--master".to_string(),
            ]
        );
    }

    #[test]
    fn venv_then_ini_are_appended_in_order() {
        let home = tempdir().unwrap();
        let h = home_str(&home);
        fs::create_dir_all(home.path().join(VENV_DIR)).unwrap();
        fs::write(home.path().join(INI_FILE), "[uwsgi]\n").unwrap();

        let command = display_command(&service(&home).command(8000));
        assert_eq!(
            command[command.len() - 4..].to_vec(),
            vec![
                "--venv".to_string(),
                format!("{}/www/python/venv", h),
                "--ini".to_string(),
                format!("{}/www/python/uwsgi.ini", h),
            ]
        );
    }

    #[test]
    fn ini_alone_is_appended() {
        let home = tempdir().unwrap();
        fs::create_dir_all(home.path().join("www/python")).unwrap();
        fs::write(home.path().join(INI_FILE), "[uwsgi]\n").unwrap();

        let command = service(&home).command(8000);
        assert!(!command.iter().any(|arg| arg == "--venv"));
        assert_eq!(command[command.len() - 2], "--ini");
    }

    #[test]
    fn venv_that_is_a_file_still_counts() {
        let home = tempdir().unwrap();
        fs::create_dir_all(home.path().join("www/python")).unwrap();
        fs::write(home.path().join(VENV_DIR), "").unwrap();

        let command = service(&home).command(8000);
        assert_eq!(command[command.len() - 2], "--venv");
        assert_eq!(command[command.len() - 1], home.path().join(VENV_DIR).into_os_string());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn non_utf8_home_reaches_argv_unchanged() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;
        use std::path::Path;

        let root = tempdir().unwrap();
        let home = root.path().join(OsStr::from_bytes(b"tool\xff"));
        fs::create_dir_all(home.join(SRC_DIR)).unwrap();
        fs::create_dir_all(home.join(VENV_DIR)).unwrap();

        let service = PythonWebService::new(Tool::new("demo", &home), UwsgiSettings::default());
        service.check().unwrap();

        let command = service.command(8000);
        let after = |flag: &str| {
            let pos = command.iter().position(|arg| arg == flag).unwrap();
            command[pos + 1].clone()
        };

        assert!(Path::new(&after("--chdir")).is_dir());
        assert!(Path::new(&after("--venv")).is_dir());

        let mount = after("--mount");
        let mut expected = OsString::from("/demo=");
        expected.push(home.join(APP_FILE));
        assert_eq!(mount, expected);
    }
}
