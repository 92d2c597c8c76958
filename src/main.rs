// Main entry point - Dependency injection and statistics rendering
use std::sync::Arc;

use anyhow::Context;
use futures::StreamExt;
use futures::future::join_all;
use tracing_subscriber::EnvFilter;

use exchange_stats::application::reveal_service::spawn_reveal;
use exchange_stats::application::statistics_service::StatisticsService;
use exchange_stats::domain::reveal::RevealCounter;
use exchange_stats::infrastructure::builtin::builtin_statistics;
use exchange_stats::infrastructure::config::{load_app_config, load_statistics_config};
use exchange_stats::infrastructure::config_repository::ConfigRepository;
use exchange_stats::presentation::chart_payload::view_to_payload;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for the payload
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let app_config = load_app_config()?;
    let statistics = match &app_config.statistics_path {
        Some(path) => load_statistics_config(path)?,
        None => builtin_statistics(),
    };

    // Create repository (infrastructure layer) and service (application layer)
    let repository = Arc::new(ConfigRepository::new(statistics));
    let service = StatisticsService::new(repository);

    // Nothing reaches the renderer unless every series aggregated cleanly
    let view = service.build_view().context("building statistics view")?;
    println!("{}", serde_json::to_string_pretty(&view_to_payload(&view))?);

    // Reveal the headline figures as if they had scrolled into view
    let mut counters = Vec::new();
    for stat in view.highlights.iter().filter(|s| s.animated) {
        let counter = RevealCounter::new(&stat.value)
            .with_context(|| format!("highlight {:?}", stat.label))?;
        let handle = spawn_reveal(counter, app_config.reveal);

        let label = stat.label.clone();
        let mut changes = handle.changes();
        tokio::spawn(async move {
            while let Some(value) = changes.next().await {
                tracing::debug!("{}: {}", label, value);
            }
        });

        handle.signal_visibility(1.0);
        counters.push((stat, handle));
    }

    join_all(counters.iter_mut().map(|(_, handle)| handle.settled())).await;

    for (stat, handle) in &counters {
        tracing::info!("{}: {}", stat.label, handle.rendered());
    }
    for stat in view.highlights.iter().filter(|s| !s.animated) {
        tracing::info!("{}: {}", stat.label, stat.value);
    }

    Ok(())
}
