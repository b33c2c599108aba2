use anyhow::Result;

use crate::exec::run_cmd;

/// Tokens that must all appear in `kubectl get all` for the To-Do workload.
pub const TODO_WORKLOAD_TOKENS: &[&str] = &[
    "service/todo",
    "deployment.apps/todo",
    "pod/todo",
    "Running",
    "80",
];

/// The namespace is listed by `kubectl get namespace`.
pub fn namespace_exists(namespace: &str) -> Result<()> {
    let result = run_cmd("kubectl", &["get", "namespace"])?;
    if !result.stdout.contains(namespace) {
        anyhow::bail!("namespace {namespace} not found");
    }
    Ok(())
}

/// Every expected token appears in `kubectl get all -n <namespace>`.
pub fn workload_ready(namespace: &str, expected: &[&str]) -> Result<()> {
    let result = run_cmd("kubectl", &["get", "all", "-n", namespace])?;
    if let Some(missing) = first_missing_token(&result.stdout, expected) {
        anyhow::bail!("missing from kubectl get all output: {missing}");
    }
    Ok(())
}

/// At least one ingress resource exists in the namespace.
pub fn ingress_exists(namespace: &str) -> Result<()> {
    let result = run_cmd("kubectl", &["get", "ingress", "-n", namespace])?;
    if !result.stdout.contains("ingress") {
        anyhow::bail!("no ingress found in namespace {namespace}");
    }
    Ok(())
}

fn first_missing_token<'a>(output: &str, tokens: &[&'a str]) -> Option<&'a str> {
    tokens.iter().find(|t| !output.contains(*t)).copied()
}
