//! To-Do microservices: webapp, todo/notification services, and redis hidden
//! behind an API gateway, with only the webapp and gateway exposed.

use anyhow::Result;
use chrono::Utc;
use reqwest::StatusCode;

use crate::checklist::Checklist;
use crate::checks::{docker, http, webapp};
use crate::{profile, report};

const NETWORK: &str = "todo-net";

const CONTAINERS: &[&str] = &[
    "webapp",
    "todo-service",
    "notification-service",
    "redis",
    "api-gateway",
];

const PAGE_URL: &str = "http://localhost:3000";
const SCRIPT_URL: &str = "http://localhost:3000/static/js/bundle.js";
const GATEWAY_URL: &str = "http://localhost:8000";
const HIDDEN_PORT_URL: &str = "http://localhost:9000";
const TODO_SERVICE_URL: &str = "http://localhost:8000/todo";
const NOTIFICATION_URL: &str = "http://localhost:8000/notification";

pub async fn run(verbose: bool) -> Result<()> {
    let started = Utc::now();
    println!("Current timestamp: {}", started.to_rfc3339());

    let client = http::client()?;

    let mut list = Checklist::new(verbose);
    list.run(
        "network",
        async { docker::network_exists(NETWORK) },
        "Network exists.",
    )
    .await;
    list.run(
        "running containers",
        async { docker::containers_running(CONTAINERS) },
        "All specified containers are running.",
    )
    .await;
    list.run(
        "compose project",
        async { docker::compose_running() },
        "Docker compose is running.",
    )
    .await;
    list.run(
        "todo webapp",
        webapp::todo_webapp(&client, PAGE_URL, SCRIPT_URL),
        "Todo app is working.",
    )
    .await;
    list.run(
        "gateway root hidden",
        http::expect_status(&client, GATEWAY_URL, StatusCode::NOT_FOUND),
        "Services are set up behind the api-gateway.",
    )
    .await;
    list.run(
        "internal ports hidden",
        http::expect_status(&client, HIDDEN_PORT_URL, StatusCode::NOT_FOUND),
        "Only the webapp and api-gateway expose ports.",
    )
    .await;
    list.run(
        "todo-service route",
        http::expect_status(&client, TODO_SERVICE_URL, StatusCode::OK),
        "Todo-service found with api-gateway.",
    )
    .await;
    list.run(
        "notification route",
        http::expect_status(&client, NOTIFICATION_URL, StatusCode::OK),
        "Notification-service found with api-gateway.",
    )
    .await;

    list.print_summary();

    if list.all_passed() {
        report::submit(&client, started, &profile::ACTIVITY3).await?;
    }
    Ok(())
}
