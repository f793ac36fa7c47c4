mod app;
mod chart;
mod data;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use chart::Chart;

/// Plot a logged run's score against its time step
#[derive(Parser, Debug)]
#[clap(version, about)]
struct Cli {
    /// CSV run log: a header row, then `time_step,score[,...]` rows
    #[clap(default_value = "PID Drone.csv")]
    path: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let series = data::loader::load(&cli.path)
        .inspect_err(|e| log::error!("{:?} error: {e}", e.kind()))
        .with_context(|| format!("loading run log {}", cli.path.display()))?;

    if series.is_empty() {
        log::warn!("{} has no data rows; showing empty axes", cli.path.display());
    }

    app::render(Chart::score_vs_time(&series))
}
