use anyhow::{Context, Result};
use dialoguer::Input;

/// Student ID and full name, as published with the submission. The ID prompt
/// re-asks until it parses as an integer.
pub fn collect_identity() -> Result<(u64, String)> {
    let student_id: u64 = Input::new()
        .with_prompt("👉 StudentID")
        .interact_text()
        .context("failed to read StudentID")?;

    let full_name: String = Input::new()
        .with_prompt("👉 Full Name (TH)")
        .interact_text()
        .context("failed to read full name")?;

    Ok((student_id, full_name.trim().to_string()))
}

/// Prompt for a value with a default used when the answer is left blank.
pub fn with_default(label: &str, default: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(format!("👉 Enter {label}"))
        .default(default.to_string())
        .interact_text()
        .with_context(|| format!("failed to read {label}"))?;
    Ok(value.trim().to_string())
}

/// Prompt for a value that has no sensible default; blank answers are
/// passed through for the downstream check to reject.
pub fn required(label: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(format!("👉 Enter [REQUIRED] {label}"))
        .allow_empty(true)
        .interact_text()
        .with_context(|| format!("failed to read {label}"))?;
    Ok(value.trim().to_string())
}
