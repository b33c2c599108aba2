use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "sds-grader", about = "Environment grading CLI for course activities")]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Grade the Apache/Prometheus/Grafana monitoring stack
    Activity1,

    /// Grade the Docker Compose monitoring project
    Activity2,

    /// Grade the To-Do microservices behind the API gateway
    Activity3,

    /// Grade the Kubernetes deployment with nginx ingress
    Activity4,

    /// Grade the Terraform-provisioned To-Do service
    Activity5,

    /// Check grading prerequisites (docker, kubectl, terraform)
    Doctor,
}
