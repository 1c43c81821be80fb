use std::path::Path;
use std::process::{Command, Stdio};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("unknown platform {0}")]
    UnsupportedPlatform(String),

    #[error("command `{command}` failed: {detail}")]
    CommandFailed { command: String, detail: String },
}

/// Shell and read-from-string flag for each supported platform.
pub fn interpreter_for(os: &str) -> Result<(&'static str, &'static str), ShellError> {
    match os {
        "windows" => Ok(("cmd", "/C")),
        "linux" | "macos" => Ok(("sh", "-c")),
        other => Err(ShellError::UnsupportedPlatform(other.to_string())),
    }
}

fn command_failed(command: &str, detail: impl ToString) -> ShellError {
    ShellError::CommandFailed {
        command: command.to_string(),
        detail: detail.to_string(),
    }
}

/// Runs `command` through the platform shell in `dir`, streaming output to
/// the caller's console and blocking until the command completes. There is
/// no timeout; a hung command blocks the caller.
pub fn run(command: &str, dir: &Path) -> Result<(), ShellError> {
    let (shell, flag) = interpreter_for(std::env::consts::OS)?;
    let shell = which::which(shell)
        .map_err(|err| command_failed(command, format!("{shell} not found in PATH: {err}")))?;

    tracing::info!(command, dir = %dir.display(), "running command");

    let status = Command::new(shell)
        .arg(flag)
        .arg(command)
        .current_dir(dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|err| command_failed(command, err))?;

    if !status.success() {
        return Err(command_failed(command, status));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn known_platforms_map_to_their_interpreter() {
        assert_eq!(interpreter_for("windows").unwrap(), ("cmd", "/C"));
        assert_eq!(interpreter_for("linux").unwrap(), ("sh", "-c"));
        assert_eq!(interpreter_for("macos").unwrap(), ("sh", "-c"));
    }

    #[test]
    fn unknown_platform_is_named_in_the_error() {
        let err = interpreter_for("plan9").unwrap_err();
        match &err {
            ShellError::UnsupportedPlatform(os) => assert_eq!(os, "plan9"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("plan9"));
    }

    #[test]
    fn successful_command_returns_ok() {
        run("exit 0", &PathBuf::from(".")).unwrap();
    }

    #[test]
    fn failing_command_reports_the_command_line() {
        let err = run("exit 7", &PathBuf::from(".")).unwrap_err();
        match err {
            ShellError::CommandFailed { command, detail } => {
                assert_eq!(command, "exit 7");
                assert!(detail.contains('7'), "detail was: {detail}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
