//! Shared helpers for CLI end-to-end tests.

use std::path::PathBuf;
use std::process::ExitStatus;

use assert_cmd::Command;
use tempfile::TempDir;

/// A temporary working directory the binary runs in.
pub struct PodiumWorkspace {
    pub root: PathBuf,
    _temp: TempDir,
}

impl PodiumWorkspace {
    #[must_use]
    pub fn new() -> Self {
        let temp = TempDir::new().expect("create temp workspace");
        Self {
            root: temp.path().to_path_buf(),
            _temp: temp,
        }
    }
}

/// Captured output of one binary invocation.
pub struct CmdOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Run `podium` with `args` in the workspace; `label` tags failures.
pub fn run_podium<const N: usize>(
    workspace: &PodiumWorkspace,
    args: [&str; N],
    label: &str,
) -> CmdOutput {
    run_podium_with_stdin(workspace, args, None, label)
}

/// Same as [`run_podium`] with text piped to stdin.
pub fn run_podium_with_stdin<const N: usize>(
    workspace: &PodiumWorkspace,
    args: [&str; N],
    stdin: Option<&str>,
    label: &str,
) -> CmdOutput {
    let mut command = Command::cargo_bin("podium").expect("podium binary builds");
    command.current_dir(&workspace.root).args(args);
    if let Some(stdin) = stdin {
        command.write_stdin(stdin);
    }
    let output = command
        .output()
        .unwrap_or_else(|e| panic!("{label}: failed to run podium: {e}"));

    CmdOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
