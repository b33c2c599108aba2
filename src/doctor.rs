use anyhow::Result;
use console::Style;

use crate::exec::run_cmd_unchecked;
use crate::progress::{finish_spinner, stage_spinner};

struct ToolSpec {
    name: &'static str,
    version_args: &'static [&'static str],
    fix_hint: &'static str,
}

const TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "docker",
        version_args: &["--version"],
        fix_hint: "Install Docker Desktop or Docker Engine: https://docs.docker.com/get-docker/",
    },
    ToolSpec {
        name: "kubectl",
        version_args: &["version", "--client"],
        fix_hint: "Install kubectl: https://kubernetes.io/docs/tasks/tools/",
    },
    ToolSpec {
        name: "terraform",
        version_args: &["version"],
        fix_hint: "Install Terraform: https://developer.hashicorp.com/terraform/install",
    },
];

struct ToolStatus {
    name: &'static str,
    passed: bool,
    detail: String,
    fix_hint: Option<&'static str>,
}

/// Check that the tools the graded activities shell out to are available.
/// Returns true when everything is in place.
pub fn run() -> Result<bool> {
    let mut results: Vec<ToolStatus> = Vec::new();

    for tool in TOOLS {
        let pb = stage_spinner(&format!("Checking {}...", tool.name));

        let status = if which::which(tool.name).is_ok() {
            match run_cmd_unchecked(tool.name, tool.version_args) {
                Ok(exec) if exec.exit_code == 0 => {
                    let detail = exec.stdout.lines().next().unwrap_or("").trim().to_string();
                    ToolStatus {
                        name: tool.name,
                        passed: true,
                        detail,
                        fix_hint: None,
                    }
                }
                _ => ToolStatus {
                    name: tool.name,
                    passed: false,
                    detail: "Found on PATH but failed to report a version".to_string(),
                    fix_hint: Some(tool.fix_hint),
                },
            }
        } else {
            ToolStatus {
                name: tool.name,
                passed: false,
                detail: "Not found on PATH".to_string(),
                fix_hint: Some(tool.fix_hint),
            }
        };

        finish_spinner(&pb, status.passed);
        results.push(status);
    }

    println!();
    let green = Style::new().green().bold();
    let red = Style::new().red().bold();

    for r in &results {
        if r.passed {
            println!("  {} {}: {}", green.apply_to("PASS"), r.name, r.detail);
        } else {
            println!("  {} {}: {}", red.apply_to("FAIL"), r.name, r.detail);
            if let Some(hint) = r.fix_hint {
                println!("       hint: {hint}");
            }
        }
    }
    println!();

    Ok(results.iter().all(|r| r.passed))
}
