//! toll-report: run the full tollnet pipeline over an edge CSV and write
//! every stage's table to an output directory.
//!
//! ```text
//! toll-report --input data/sample_edges.csv --reference 1001400 --precision 2
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use tn_core::{CoreError, LocationId};
use tn_graph::load_edges_csv;
use tn_output::{CsvWriter, OutputObserver};
use tn_pipeline::{PipelineBuilder, PipelineConfig};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Edge CSV with `id_start,id_end,distance` columns
    #[arg(short, long)]
    input: PathBuf,

    /// Directory the CSV tables are written to (created if missing).
    /// Nothing is written when the input or the reference is rejected
    #[arg(short, long, default_value = "output/toll-report")]
    output_dir: PathBuf,

    /// Reference location for the proximity filter; overrides the config file
    #[arg(short, long, value_parser = parse_location)]
    reference: Option<LocationId>,

    /// JSON pipeline configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Decimal places for floating-point cells (default: full precision)
    #[arg(short, long)]
    precision: Option<usize>,

    #[arg(short, long)]
    debug: bool,
}

fn parse_location(s: &str) -> Result<LocationId, CoreError> {
    LocationId::from_str(s)
}

fn load_config(path: Option<&PathBuf>) -> Result<PipelineConfig> {
    let Some(path) = path else {
        return Ok(PipelineConfig::default());
    };
    let file = File::open(path).with_context(|| format!("opening config {}", path.display()))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    // 1. Inputs.
    let edges = load_edges_csv(&cli.input)
        .with_context(|| format!("loading edges from {}", cli.input.display()))?;
    info!(rows = edges.len(), input = %cli.input.display(), "loaded edges");

    let config = load_config(cli.config.as_ref())?;

    // 2. Pipeline.
    let mut builder = PipelineBuilder::new(edges).config(config);
    if let Some(reference) = cli.reference {
        builder = builder.reference(reference);
    }
    let pipeline = builder.build()?;
    pipeline.preflight()?;

    // 3. Output.
    std::fs::create_dir_all(&cli.output_dir)
        .with_context(|| format!("creating {}", cli.output_dir.display()))?;
    let mut writer = CsvWriter::new(&cli.output_dir)?;
    if let Some(p) = cli.precision {
        writer = writer.with_precision(p);
    }
    let mut obs = OutputObserver::new(writer);

    // 4. Run.
    let t0 = Instant::now();
    let report = pipeline.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        return Err(e).context("writing output tables");
    }

    // 5. Summary.
    info!(seconds = elapsed.as_secs_f64(), dir = %cli.output_dir.display(), "pipeline complete");
    info!(locations = report.matrix.len(), "distance_matrix.csv");
    info!(rows = report.edges.len(), "unrolled_distances.csv");
    match &report.within_threshold {
        Some(ids) if ids.is_empty() => warn!("no location within threshold of the reference"),
        Some(ids) => info!(rows = ids.len(), "ids_within_threshold.csv"),
        None => {}
    }
    info!(rows = report.toll_rates.len(), "toll_rates.csv");
    info!(rows = report.timed_rates.len(), "time_based_toll_rates.csv");

    Ok(())
}
