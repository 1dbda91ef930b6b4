use solar_io::{IoConfig, SampleCollector, ScatterPlot, ScenarioLoader, ScenarioWriter, StatisticsLog};
use solar_io::Axis;

use clap::Parser;
use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::path::PathBuf;

/// Load a scenario, write a checkpoint and append statistics ticks.
/// Bodies are not moved between ticks; the physics engine lives elsewhere.
#[derive(Parser, Debug)]
struct Args {
    /// Scenario file to load
    input: PathBuf,

    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long, default_value = "checkpoint.txt")]
    output: PathBuf,

    #[arg(short, long, default_value_t = 1)]
    ticks: usize,
}

// load here to keep main clean
fn load_config(path: Option<&PathBuf>) -> Result<IoConfig> {
    match path {
        Some(p) => IoConfig::from_path(p).with_context(|| format!("failed to load config {}", p.display())),
        None => Ok(IoConfig::default()),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let cfg = load_config(args.config.as_ref())?;

    let bodies = ScenarioLoader::from_config(&cfg)
        .load(&args.input)
        .with_context(|| format!("failed to load scenario {}", args.input.display()))?;
    info!("loaded {} bodies from {}", bodies.len(), args.input.display());

    ScenarioWriter::from_config(&cfg).save(&args.output, &bodies)?;

    let mut stats = StatisticsLog::from_config(&cfg);
    let sampler = SampleCollector::from_config(&cfg);
    let mut plot = ScatterPlot::new();

    for tick in 0..args.ticks {
        stats.record_tick(&bodies)?;
        for body in &bodies {
            sampler.sample(body.record(), tick as f64, &mut plot);
        }
    }

    info!(
        "wrote {} ticks to {}, {} points per panel",
        stats.ticks_written(),
        stats.path().display(),
        plot.points(Axis::TimeRadius).len()
    );

    Ok(())
}
