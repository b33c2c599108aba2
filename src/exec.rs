use anyhow::{Context, Result};
use std::process::Command;

#[derive(Debug)]
pub struct ExecResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Run a command and return an error if it exits non-zero.
pub fn run_cmd(cmd: &str, args: &[&str]) -> Result<ExecResult> {
    let result = run_cmd_unchecked(cmd, args)?;
    if result.exit_code != 0 {
        anyhow::bail!(
            "{} {} failed (exit {}): {}",
            cmd,
            args.join(" "),
            result.exit_code,
            result.stderr.trim()
        );
    }
    Ok(result)
}

/// Run a command and return the result regardless of exit code.
pub fn run_cmd_unchecked(cmd: &str, args: &[&str]) -> Result<ExecResult> {
    let output = Command::new(cmd)
        .args(args)
        .output()
        .with_context(|| format!("failed to execute {cmd}"))?;

    Ok(ExecResult {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_cmd_unchecked_captures_exit_code() {
        let result = run_cmd_unchecked("sh", &["-c", "exit 3"]).unwrap();
        assert_eq!(result.exit_code, 3);
    }

    #[test]
    fn test_run_cmd_fails_on_nonzero_exit() {
        let result = run_cmd("sh", &["-c", "echo oops >&2; exit 1"]);
        let err = format!("{:#}", result.unwrap_err());
        assert!(err.contains("exit 1"));
        assert!(err.contains("oops"));
    }

    #[test]
    fn test_run_cmd_missing_binary() {
        let result = run_cmd_unchecked("definitely-not-a-real-binary", &[]);
        assert!(result.is_err());
    }
}
