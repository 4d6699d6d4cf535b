//! External command execution.
use std::process::Command;
use thiserror::Error;

use crate::result::Result;

/// Failure of an external command, carrying the command line, exit code,
/// and captured stderr.
#[derive(Debug, Error)]
#[error("command `{command}` exited with code {code}: {stderr}")]
pub struct CommandFailure {
    pub command: String,
    pub code: i32,
    pub stderr: String,
}

/// Run a command and return its decoded stdout. A non-zero exit fails the
/// whole run.
pub fn run(program: &str, args: &[&str]) -> Result<String> {
    let output = Command::new(program).args(args).output()?;

    if !output.status.success() {
        let command = std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<&str>>()
            .join(" ");

        return Err(CommandFailure {
            command,
            code: output.status.code().unwrap_or(-1),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
        .into());
    }

    Ok(String::from_utf8(output.stdout)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_stdout_on_success() {
        let stdout = run("echo", &["hello"]).unwrap();
        assert_eq!(stdout, "hello\n");
    }

    #[test]
    fn fails_with_command_line_and_exit_code() {
        let err = run("false", &[]).unwrap_err();

        let failure = err.downcast_ref::<CommandFailure>().unwrap();
        assert_eq!(failure.command, "false");
        assert_eq!(failure.code, 1);
    }
}
