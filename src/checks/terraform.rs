use anyhow::Result;
use std::path::Path;

use crate::exec::run_cmd_unchecked;

/// The submitted plan file path is non-empty, ends with `.tf`, and exists.
pub fn plan_file(path: &str) -> Result<()> {
    if path.is_empty() {
        anyhow::bail!("the file path cannot be empty");
    }
    if !path.ends_with(".tf") {
        anyhow::bail!("the file path '{path}' does not have the required suffix '.tf'");
    }
    if !Path::new(path).exists() {
        anyhow::bail!("the file path '{path}' does not exist");
    }
    Ok(())
}

/// The directory `terraform` commands should run in for a given plan file.
pub fn working_dir(path: &str) -> String {
    Path::new(path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| ".".to_string())
}

/// Spawn a tool and require exit code 0; output is discarded.
pub fn tool_succeeds(cmd: &str, args: &[&str]) -> Result<()> {
    let result = run_cmd_unchecked(cmd, args)?;
    if result.exit_code != 0 {
        anyhow::bail!("command exited with code {}", result.exit_code);
    }
    Ok(())
}
