//! XY Chart Viewer - Line charts for two-column CSV output
//!
//! Reads every file of the integration test output directory and shows one
//! line chart per file in a single window.

mod charts;
mod config;
mod data;
mod gui;
mod orchestrator;
mod report;

use anyhow::{bail, Context, Result};
use config::ViewerConfig;
use gui::EguiSession;
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config = ViewerConfig::default();
    let mut session = EguiSession::new(config.clone());

    let report = orchestrator::plot_all_output(&config, &mut session)
        .with_context(|| format!("Failed to plot {}", config.input_dir.display()))?;

    if report.has_failures() {
        bail!(
            "{} of {} files could not be plotted:\n{}",
            report.failures().count(),
            report.outcomes.len(),
            report.failure_summary()
        );
    }

    Ok(())
}
