#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Terminal front end for the UrbanPulse assistant.
//!
//! ```text
//! urban_pulse ask "What's the air quality in Vasai West?"
//! urban_pulse chat
//! urban_pulse services
//! ```
//!
//! Running `urban_pulse` with no subcommand enters chat mode.

mod chat;

use clap::{Parser, Subcommand};
use urban_pulse_assistant::Assistant;

#[derive(Parser)]
#[command(
    name = "urban_pulse",
    about = "Ask the UrbanPulse assistant about air quality and traffic"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a single question and print the reply
    Ask {
        /// The question (e.g. "What's the air quality in Vasai West?")
        query: String,
    },
    /// Interactive chat session
    Chat,
    /// List configured collaborator services
    Services,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Ask { query }) => {
            let assistant = Assistant::from_registry()?;
            println!("{}", assistant.respond(&query).await);
        }
        Some(Commands::Chat) | None => chat::run().await?,
        Some(Commands::Services) => print_services(),
    }

    Ok(())
}

/// Prints the geocoding and condition service registries.
fn print_services() {
    println!("{:<20} {:<34} {:<8} PRIORITY", "ID", "NAME", "ENABLED");
    println!("{}", "-".repeat(72));

    for svc in urban_pulse_geocoder::service_registry::all_services() {
        println!(
            "{:<20} {:<34} {:<8} {}",
            svc.id, svc.name, svc.enabled, svc.priority
        );
    }
    for svc in urban_pulse_conditions::service_registry::all_services() {
        println!(
            "{:<20} {:<34} {:<8} {}",
            svc.id, svc.name, svc.enabled, svc.priority
        );
    }
}
