//! Terraform-provisioned To-Do service: a valid plan in the submitted file's
//! directory, with the provisioned containers serving the write path.

use anyhow::Result;
use chrono::Utc;
use reqwest::StatusCode;

use crate::checklist::Checklist;
use crate::checks::{docker, http, terraform};
use crate::{profile, prompt, report};

const CONTAINERS: &[&str] = &["todo-service", "redis"];

const TODO_URL: &str = "http://localhost:8000";

pub async fn run(verbose: bool) -> Result<()> {
    let started = Utc::now();
    println!("Current timestamp: {}", started.to_rfc3339());

    let client = http::client()?;
    let tf_path = prompt::required("Terraform file path")?;
    let tf_dir = terraform::working_dir(&tf_path);
    let chdir = format!("-chdir={tf_dir}");

    let mut list = Checklist::new(verbose);
    list.run(
        "plan file",
        async { terraform::plan_file(&tf_path) },
        "Terraform file path exists.",
    )
    .await;
    list.run(
        "terraform installed",
        async { terraform::tool_succeeds("terraform", &["version"]) },
        "Terraform is installed.",
    )
    .await;
    list.run(
        "terraform init",
        async { terraform::tool_succeeds("terraform", &[chdir.as_str(), "init"]) },
        "Terraform is initialized.",
    )
    .await;
    list.run(
        "terraform plan",
        async { terraform::tool_succeeds("terraform", &[chdir.as_str(), "plan"]) },
        "Terraform plan is generated.",
    )
    .await;
    list.run(
        "running containers",
        async { docker::containers_running(CONTAINERS) },
        "All specified containers are running.",
    )
    .await;
    let service_up = list
        .run(
            "todo-service",
            http::expect_status(&client, TODO_URL, StatusCode::OK),
            &format!("Todo is up and running at {TODO_URL}"),
        )
        .await;
    if service_up {
        list.run(
            "todo write",
            http::post_todo_item(&client, TODO_URL, true),
            &format!("POST request to {TODO_URL} was successful."),
        )
        .await;
        list.run(
            "todo readback",
            http::body_contains(&client, TODO_URL, "grader"),
            &format!("GET request shows the submitted item at {TODO_URL}"),
        )
        .await;
    }

    list.print_summary();

    if list.all_passed() {
        report::submit(&client, started, &profile::ACTIVITY5).await?;
    }
    Ok(())
}
