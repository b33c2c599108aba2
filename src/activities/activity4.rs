//! Kubernetes deployment: the To-Do workload behind an nginx ingress, with
//! direct service ports closed. The write path is verified with a POST and a
//! follow-up GET, both gated on the ingress answering at all.

use anyhow::Result;
use chrono::Utc;
use reqwest::StatusCode;

use crate::checklist::Checklist;
use crate::checks::{http, kube};
use crate::{profile, prompt, report};

pub async fn run(verbose: bool) -> Result<()> {
    let started = Utc::now();
    println!("Current timestamp: {}", started.to_rfc3339());

    let client = http::client()?;
    let namespace = prompt::with_default("Kubernetes namespace", "default")?;
    let domain = http::ensure_http_prefix(&prompt::with_default("domain", "http://localhost")?);

    let todo_port_url = format!("{domain}:8000");
    let redis_port_url = format!("{domain}:6379");

    let mut list = Checklist::new(verbose);
    list.run(
        "namespace",
        async { kube::namespace_exists(&namespace) },
        "Namespace exists and kubectl is usable.",
    )
    .await;
    list.run(
        "workload",
        async { kube::workload_ready(&namespace, kube::TODO_WORKLOAD_TOKENS) },
        "All Kubernetes resources are up and running.",
    )
    .await;
    list.run(
        "ingress",
        async { kube::ingress_exists(&namespace) },
        "Ingress resource exists in the namespace.",
    )
    .await;
    let ingress_up = list
        .run(
            "todo via ingress",
            http::expect_status(&client, &domain, StatusCode::OK),
            &format!("Todo is up and running at {domain}"),
        )
        .await;
    list.run(
        "todo port closed",
        http::expect_status(&client, &todo_port_url, StatusCode::NOT_FOUND),
        &format!("Todo service is inaccessible at {todo_port_url}"),
    )
    .await;
    list.run(
        "redis port closed",
        http::expect_status(&client, &redis_port_url, StatusCode::NOT_FOUND),
        &format!("Redis service is inaccessible at {redis_port_url}"),
    )
    .await;
    if ingress_up {
        list.run(
            "todo write",
            http::post_todo_item(&client, &domain, true),
            &format!("POST request to {domain} was successful."),
        )
        .await;
        list.run(
            "todo readback",
            http::body_contains(&client, &domain, "grader"),
            &format!("GET request shows the submitted item at {domain}"),
        )
        .await;
    }

    list.print_summary();

    if list.all_passed() {
        report::submit(&client, started, &profile::ACTIVITY4).await?;
    }
    Ok(())
}
