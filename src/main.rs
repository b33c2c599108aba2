mod activities;
mod checklist;
mod checks;
mod cli;
mod crypto;
mod doctor;
mod exec;
mod facts;
mod profile;
mod progress;
mod prompt;
mod pubsub;
mod report;

use clap::Parser;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Activity1 => activities::activity1::run(cli.verbose).await,
        Commands::Activity2 => activities::activity2::run(cli.verbose).await,
        Commands::Activity3 => activities::activity3::run(cli.verbose).await,
        Commands::Activity4 => activities::activity4::run(cli.verbose).await,
        Commands::Activity5 => activities::activity5::run(cli.verbose).await,
        Commands::Doctor => match doctor::run() {
            Ok(true) => std::process::exit(0),
            Ok(false) => std::process::exit(1),
            Err(e) => {
                eprintln!("Error: {e:#}");
                std::process::exit(2);
            }
        },
    };

    // A failed grade still exits 0; only submission-stage errors are fatal.
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(2);
        }
    }
}
