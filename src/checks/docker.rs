use anyhow::Result;

use crate::exec::run_cmd;

/// Template that prints the network names a container is attached to.
const NETWORKS_TEMPLATE: &str =
    "{{range $key, $value := .NetworkSettings.Networks}}{{$key}}{{end}}";

/// A named Docker network exists.
pub fn network_exists(name: &str) -> Result<()> {
    let result = run_cmd("docker", &["network", "ls"])?;
    if !result.stdout.contains(name) {
        anyhow::bail!("network {name} does not exist");
    }
    Ok(())
}

/// Every named container appears in `docker ps`.
pub fn containers_running(names: &[&str]) -> Result<()> {
    let result = run_cmd("docker", &["ps", "--format", "{{.Names}}"])?;
    if let Some(missing) = first_missing_container(&result.stdout, names) {
        anyhow::bail!("container {missing} is not running");
    }
    Ok(())
}

/// All named containers are attached to the same network as the first one.
pub fn containers_on_same_network(names: &[&str]) -> Result<()> {
    let [first, rest @ ..] = names else {
        return Ok(());
    };
    if rest.is_empty() {
        return Ok(());
    }

    let expected = container_network(first)?;
    for name in rest {
        let network = container_network(name)?;
        if network != expected {
            anyhow::bail!(
                "container {name} is on network '{network}', but should be on '{expected}'"
            );
        }
    }
    Ok(())
}

/// At least one `docker compose` project is in the `running` state.
pub fn compose_running() -> Result<()> {
    let result = run_cmd("docker", &["compose", "ls"])?;
    if !compose_has_running_project(&result.stdout) {
        anyhow::bail!("no running docker compose projects found");
    }
    Ok(())
}

fn container_network(name: &str) -> Result<String> {
    let result = run_cmd("docker", &["inspect", "-f", NETWORKS_TEMPLATE, name])?;
    Ok(result.stdout.trim().to_string())
}

fn first_missing_container<'a>(ps_output: &str, names: &[&'a str]) -> Option<&'a str> {
    names
        .iter()
        .find(|name| !ps_output.contains(*name))
        .copied()
}

fn compose_has_running_project(output: &str) -> bool {
    // First line of `docker compose ls` is the column header.
    output
        .trim()
        .lines()
        .skip(1)
        .any(|line| line.contains("running"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_containers_present() {
        let ps = "a\nb\nredis\n";
        assert_eq!(first_missing_container(ps, &["a", "b"]), None);
    }

    #[test]
    fn test_missing_container_is_named() {
        let ps = "a\nredis\n";
        assert_eq!(first_missing_container(ps, &["a", "b"]), Some("b"));
    }

    #[test]
    fn test_empty_ps_output_reports_first_name() {
        assert_eq!(first_missing_container("", &["grafana"]), Some("grafana"));
    }

    #[test]
    fn test_compose_running_project_detected() {
        let output = "NAME         STATUS      CONFIG FILES\n\
                      monitoring   running(3)  /home/s/compose.yaml\n";
        assert!(compose_has_running_project(output));
    }

    #[test]
    fn test_compose_header_only_is_not_running() {
        let output = "NAME  STATUS  CONFIG FILES\n";
        assert!(!compose_has_running_project(output));
    }

    #[test]
    fn test_compose_stopped_project_is_not_running() {
        let output = "NAME  STATUS     CONFIG FILES\n\
                      todo  exited(2)  /home/s/compose.yaml\n";
        assert!(!compose_has_running_project(output));
    }

    #[test]
    fn test_same_network_trivially_true_below_two_containers() {
        // No docker invocation happens for fewer than two names.
        assert!(containers_on_same_network(&[]).is_ok());
        assert!(containers_on_same_network(&["only"]).is_ok());
    }
}
