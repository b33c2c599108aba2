use console::Style;
use std::future::Future;

use crate::progress::{finish_spinner, stage_spinner};

/// Outcome of a single environment probe, in checklist order.
#[derive(Debug)]
pub struct CheckReport {
    pub name: String,
    pub passed: bool,
    pub detail: String,
}

/// Ordered list of check results for one activity run.
///
/// Every probe is recorded; the overall grade is the AND across all of them.
/// `run` returns the individual result so a follow-up probe can be gated on
/// it (a gated-out probe is simply never recorded).
pub struct Checklist {
    reports: Vec<CheckReport>,
    verbose: bool,
}

impl Checklist {
    pub fn new(verbose: bool) -> Self {
        Self {
            reports: Vec::new(),
            verbose,
        }
    }

    /// Execute one probe under a stage spinner and record its result.
    pub async fn run<F>(&mut self, name: &str, probe: F, pass_detail: &str) -> bool
    where
        F: Future<Output = anyhow::Result<()>>,
    {
        let pb = stage_spinner(&format!("Checking {name}..."));
        let outcome = probe.await;
        finish_spinner(&pb, outcome.is_ok());

        let (passed, detail) = match outcome {
            Ok(()) => (true, pass_detail.to_string()),
            Err(e) => (false, format!("{e:#}")),
        };
        if self.verbose && !passed {
            eprintln!("    {detail}");
        }
        self.reports.push(CheckReport {
            name: name.to_string(),
            passed,
            detail,
        });
        passed
    }

    pub fn all_passed(&self) -> bool {
        self.reports.iter().all(|r| r.passed)
    }

    pub fn reports(&self) -> &[CheckReport] {
        &self.reports
    }

    /// Print the per-check summary and the aggregate result.
    pub fn print_summary(&self) {
        println!();
        let green = Style::new().green().bold();
        let red = Style::new().red().bold();

        for r in self.reports() {
            if r.passed {
                println!("  {} {}: {}", green.apply_to("PASS"), r.name, r.detail);
            } else {
                println!("  {} {}: {}", red.apply_to("FAIL"), r.name, r.detail);
            }
        }
        println!();
        println!("Result: {}", self.all_passed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_all_passed_when_every_check_passes() {
        let mut list = Checklist::new(false);
        list.run("first", async { Ok(()) }, "ok").await;
        list.run("second", async { Ok(()) }, "ok").await;
        assert!(list.all_passed());
        assert_eq!(list.reports().len(), 2);
    }

    #[tokio::test]
    async fn test_single_failure_fails_the_aggregate() {
        let mut list = Checklist::new(false);
        list.run("first", async { Ok(()) }, "ok").await;
        list.run("second", async { anyhow::bail!("boom") }, "ok").await;
        list.run("third", async { Ok(()) }, "ok").await;
        assert!(!list.all_passed());
    }

    #[tokio::test]
    async fn test_empty_checklist_passes() {
        let list = Checklist::new(false);
        assert!(list.all_passed());
    }

    #[tokio::test]
    async fn test_run_returns_result_for_gating() {
        let mut list = Checklist::new(false);
        let ok = list.run("gate", async { anyhow::bail!("down") }, "ok").await;
        assert!(!ok);
        // The gated follow-up never runs, so only the gate is recorded.
        assert_eq!(list.reports().len(), 1);
    }

    #[tokio::test]
    async fn test_failure_detail_carries_context_chain() {
        use anyhow::Context;
        let mut list = Checklist::new(false);
        list.run(
            "probe",
            async { Err(anyhow::anyhow!("inner")).context("outer") },
            "ok",
        )
        .await;
        let report = &list.reports()[0];
        assert!(report.detail.contains("outer"));
        assert!(report.detail.contains("inner"));
    }
}
