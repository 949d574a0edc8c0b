use crate::model::PipelineConfig;
use crate::pipeline::{self, ProcessedDataset};
use crate::timing::SentinelPolicy;
use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "bench-series",
    version,
    about = "Turn serial/MPI/CUDA benchmark timings into chart-ready series"
)]
pub struct Cli {
    /// Size-indexed timings (keys like "experiment1_1000")
    #[arg(long, value_name = "FILE", required_unless_present = "radius")]
    pub size: Option<std::path::PathBuf>,

    /// Radius-indexed timings (bare numeric keys)
    #[arg(long, value_name = "FILE")]
    pub radius: Option<std::path::PathBuf>,

    /// Directory the series artifacts are written to
    #[arg(long, default_value = "plots")]
    pub out_dir: std::path::PathBuf,

    /// Treat -1 in radius data as a real measurement instead of "not measured"
    #[arg(long)]
    pub keep_radius_sentinel: bool,

    /// Do not write the JSON series manifest
    #[arg(long)]
    pub no_json_artifact: bool,

    /// Do not write the CSV series table
    #[arg(long)]
    pub no_csv_artifact: bool,

    /// Print the exported series as JSON
    #[arg(long)]
    pub json: bool,

    /// Print a text summary of every series
    #[arg(long)]
    pub text: bool,

    /// Run silently: suppress all output except errors
    #[arg(long)]
    pub silent: bool,

    /// Log level filter (overridden by RUST_LOG)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Build a `PipelineConfig` from CLI arguments.
pub fn build_config(args: &Cli) -> PipelineConfig {
    PipelineConfig {
        size_input: args.size.clone(),
        radius_input: args.radius.clone(),
        out_dir: args.out_dir.clone(),
        radius_sentinel: if args.keep_radius_sentinel {
            SentinelPolicy::Keep
        } else {
            SentinelPolicy::Filter
        },
        write_json: !args.no_json_artifact,
        write_csv: !args.no_csv_artifact,
    }
}

pub fn run(args: Cli) -> Result<()> {
    if args.silent && (args.json || args.text) {
        return Err(anyhow::anyhow!(
            "--silent cannot be combined with --json or --text"
        ));
    }

    let cfg = build_config(&args);
    tracing::debug!(?cfg, "pipeline configuration");
    let processed = pipeline::process_all(&cfg)?;

    if args.silent {
        return Ok(());
    }

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let mut out = std::io::LineWriter::new(stdout.lock());
    let mut err = std::io::LineWriter::new(stderr.lock());

    for p in &processed {
        print_processed(&args, p, &mut out, &mut err)?;
    }

    out.flush()?;
    err.flush()?;
    Ok(())
}

fn print_processed(
    args: &Cli,
    p: &ProcessedDataset,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    if args.json {
        let json = serde_json::to_string_pretty(&p.set)?;
        writeln!(out, "{json}").context("write JSON to stdout")?;
    }
    if args.text {
        let summary = crate::text_summary::build_text_summary(&p.set);
        for line in summary.lines {
            writeln!(out, "{line}").context("write summary to stdout")?;
        }
    }
    for path in &p.artifacts {
        let _ = writeln!(err, "Exported: {}", path.display());
    }
    Ok(())
}
