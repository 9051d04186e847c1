//! Interactive travel planning assistant.
//!
//! Probes the local Ollama server, loads the crew configuration, asks the
//! traveler three questions and runs the research, budget and itinerary
//! tasks in sequence.

mod crew;
mod input;

use anyhow::{Context, Result};
use colored::Colorize;
use rustyline::DefaultEditor;
use tracing::info;
use tracing_subscriber::EnvFilter;

use caravan_core::config::{self, CrewConfig};
use caravan_core::{ChatBackend, CrewEngine};
use caravan_execution::SequentialExecutor;
use caravan_interaction::OllamaApiAgent;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    println!(
        "{}",
        "Welcome to the Travel Planning Assistant!"
            .bright_magenta()
            .bold()
    );

    // ===== Backend Probe =====
    let backend = OllamaApiAgent::from_env();
    if let Err(err) = backend.probe().await {
        eprintln!("{}", format!("Error: {}", err).red());
        eprintln!(
            "{}",
            format!("Please start it with 'ollama run {}'.", backend.model()).bright_black()
        );
        std::process::exit(1);
    }
    println!("{}", "Ollama server is running.".green());

    // ===== Configuration =====
    let config_dir = config::default_config_dir()?;
    let crew_config = CrewConfig::load(&config_dir)
        .with_context(|| format!("loading crew configuration from {}", config_dir.display()))?;
    info!(
        personas = crew_config.persona_count(),
        tasks = crew_config.task_count(),
        "configuration loaded"
    );

    // ===== Trip Request =====
    let mut editor = DefaultEditor::new()?;
    let request = input::read_trip_request(&mut editor)?;

    // ===== Crew Run =====
    let registry = crew::build_registry();
    let members = crew::build_crew(&crew_config, &registry, &backend, &request)?;

    println!();
    println!("{}", "Generating your personalized travel plan...".cyan());

    let report = SequentialExecutor::new().run(&members).await?;

    // ===== Result =====
    println!();
    println!(
        "{}",
        "=== Your Travel Itinerary ===".bright_magenta().bold()
    );
    println!("{}", report.final_output);
    println!();
    println!("{}", report.summary().bright_black());

    Ok(())
}
