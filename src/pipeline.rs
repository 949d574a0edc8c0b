//! One-shot processing of a single input file.
//!
//! Loads the dataset, derives the export set and writes artifacts. Each input
//! is an independent run; nothing is shared between calls.

use crate::dataset::BenchmarkDataset;
use crate::export::{export, ExportSet};
use crate::model::{Flavor, PipelineConfig};
use crate::storage::{ArtifactSink, CsvSink, JsonSink};
use crate::timing::SentinelPolicy;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Result of processing one input, ready for presentation layers.
pub struct ProcessedDataset {
    pub set: ExportSet,
    pub artifacts: Vec<PathBuf>,
}

/// Sinks enabled by the configuration.
pub fn sinks(cfg: &PipelineConfig) -> Vec<Box<dyn ArtifactSink>> {
    let mut sinks: Vec<Box<dyn ArtifactSink>> = Vec::new();
    if cfg.write_json {
        sinks.push(Box::new(JsonSink));
    }
    if cfg.write_csv {
        sinks.push(Box::new(CsvSink));
    }
    sinks
}

/// Load `path` and derive its export set, without touching the filesystem
/// beyond reading the input.
pub fn derive(path: &Path, flavor: Flavor, policy: SentinelPolicy) -> Result<ExportSet> {
    let dataset = BenchmarkDataset::from_path(flavor, path, policy)
        .with_context(|| format!("failed to load {flavor} dataset"))?;
    Ok(export(&dataset))
}

/// Derive the export set for `path` and hand it to every sink.
pub fn process_input(
    path: &Path,
    flavor: Flavor,
    policy: SentinelPolicy,
    sinks: &[Box<dyn ArtifactSink>],
    out_dir: &Path,
) -> Result<ProcessedDataset> {
    let set = derive(path, flavor, policy)?;

    let mut artifacts = Vec::with_capacity(sinks.len());
    for sink in sinks {
        let written = sink
            .write(&set, out_dir)
            .with_context(|| format!("failed to write {flavor} artifacts"))?;
        tracing::info!(path = %written.display(), "wrote artifact");
        artifacts.push(written);
    }

    Ok(ProcessedDataset { set, artifacts })
}

/// Process every configured input in turn.
pub fn process_all(cfg: &PipelineConfig) -> Result<Vec<ProcessedDataset>> {
    let sinks = sinks(cfg);
    cfg.inputs()
        .into_iter()
        .map(|(flavor, path, policy)| process_input(&path, flavor, policy, &sinks, &cfg.out_dir))
        .collect()
}
