//! Main Entrypoint for the Lesson Service
//!
//! This binary is responsible for:
//! 1. Loading configuration from the environment.
//! 2. Resolving the learner profile into lesson parameters.
//! 3. Building the lesson agent around the configured executor.
//! 4. Generating a single lesson and printing it as JSON.

use anyhow::Context;
use clap::Parser;
use lingua_core::{LessonAgent, llm_client::CannedExecutor};
use lingua_service::{cli::Args, config::Config};
use std::sync::Arc;
use tracing::info;

const OFFLINE_LESSON: &str = "Offline mode: no lesson was requested from the model.";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // --- 1. Load Configuration ---
    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(model) = &args.model {
        config.chat_model = model.clone();
    }

    // --- 2. Initialize Logging ---
    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .init();
    println!("API key loaded: {}", config.has_api_key());

    // --- 3. Resolve Lesson Parameters ---
    let params = args.lesson_parameters()?;

    // --- 4. Build the Agent ---
    let agent = if args.offline {
        info!("Using offline executor.");
        LessonAgent::new(Arc::new(CannedExecutor::new(OFFLINE_LESSON)))
    } else {
        LessonAgent::with_gemini(config.gemini_config()?)
    };

    // --- 5. Generate ---
    info!(
        model = %config.chat_model,
        target_language = %params.target_language,
        "Generating lesson..."
    );
    let lesson = agent.generate_lesson(&params).await?;

    println!("Generated Lesson Content:");
    println!("{}", serde_json::to_string_pretty(&lesson)?);
    Ok(())
}
