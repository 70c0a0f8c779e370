// Helpers shared by the integration test files.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

/// A `toolws` command that logs into `log_dir` instead of the user config dir.
pub fn toolws_cmd(log_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("toolws").expect("Failed to find toolws binary for testing");
    cmd.env("TOOLWS_LOG_FILE", log_dir.join("toolws.log"));
    cmd.env_remove("RUST_LOG");
    cmd
}

/// A tool home containing `www/python/src`.
pub fn python_home() -> TempDir {
    let home = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(home.path().join("www/python/src")).unwrap();
    home
}

/// A tool home containing `uwsgi.ini`.
pub fn plain_home() -> TempDir {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(home.path().join("uwsgi.ini"), "[uwsgi]\n").unwrap();
    home
}

pub fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
