//! Monitoring stack: Apache with exporters, Prometheus, and Grafana running
//! as containers on one network, every service answering on its port.

use anyhow::Result;
use chrono::Utc;
use reqwest::StatusCode;

use crate::checklist::Checklist;
use crate::checks::{docker, http};
use crate::{profile, prompt, report};

const CONTAINERS: &[&str] = &[
    "grafana",
    "prometheus",
    "apache-exporter",
    "apache",
    "node-exporter",
];

pub async fn run(verbose: bool) -> Result<()> {
    let started = Utc::now();
    println!("Current timestamp: {}", started.to_rfc3339());

    let client = http::client()?;
    let domain = http::ensure_http_prefix(&prompt::with_default("domain", "http://localhost")?);

    let apache_url = format!("{domain}:8080");
    let apache_exporter_url = format!("{domain}:9117/metrics");
    let grafana_url = format!("{domain}:3000");
    let prometheus_url = format!("{domain}:9090");
    let node_exporter_url = format!("{domain}:9100/metrics");
    let server_status_url = format!("{domain}:8080/server-status/?auto");

    let mut list = Checklist::new(verbose);
    list.run(
        "running containers",
        async { docker::containers_running(CONTAINERS) },
        "All specified containers are running.",
    )
    .await;
    list.run(
        "shared network",
        async { docker::containers_on_same_network(CONTAINERS) },
        "All containers are on the same network.",
    )
    .await;
    list.run(
        "apache",
        http::expect_status(&client, &apache_url, StatusCode::OK),
        &format!("Apache is up and running at {apache_url}"),
    )
    .await;
    list.run(
        "apache-exporter",
        http::expect_status(&client, &apache_exporter_url, StatusCode::OK),
        &format!("Apache-exporter is up and running at {apache_exporter_url}"),
    )
    .await;
    list.run(
        "grafana",
        http::expect_status(&client, &grafana_url, StatusCode::OK),
        &format!("Grafana is up and running at {grafana_url}"),
    )
    .await;
    list.run(
        "prometheus",
        http::expect_status(&client, &prometheus_url, StatusCode::OK),
        &format!("Prometheus is up and running at {prometheus_url}"),
    )
    .await;
    list.run(
        "node-exporter",
        http::expect_status(&client, &node_exporter_url, StatusCode::OK),
        &format!("Node-exporter is up and running at {node_exporter_url}"),
    )
    .await;
    list.run(
        "apache server-status",
        http::body_contains(&client, &server_status_url, "localhost"),
        &format!("Server status is reported at {server_status_url}"),
    )
    .await;

    list.print_summary();

    if list.all_passed() {
        report::submit(&client, started, &profile::ACTIVITY1).await?;
    }
    Ok(())
}
