//! Artifact files handed to the chart renderer.

use crate::export::ExportSet;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Writes an [`ExportSet`] somewhere under `out_dir` and returns the path.
pub trait ArtifactSink {
    fn write(&self, set: &ExportSet, out_dir: &Path) -> Result<PathBuf>;
}

#[derive(Serialize)]
struct Manifest<'a> {
    generated_utc: String,
    #[serde(flatten)]
    export: &'a ExportSet,
}

fn now_utc() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "now".into())
}

/// `<flavor>_series.json`, gaps as `null`.
pub struct JsonSink;

impl ArtifactSink for JsonSink {
    fn write(&self, set: &ExportSet, out_dir: &Path) -> Result<PathBuf> {
        let path = artifact_path(out_dir, set, "json")?;
        export_json(&path, set)?;
        Ok(path)
    }
}

/// `<flavor>_series.csv`, one column per series, gaps as empty cells.
pub struct CsvSink;

impl ArtifactSink for CsvSink {
    fn write(&self, set: &ExportSet, out_dir: &Path) -> Result<PathBuf> {
        let path = artifact_path(out_dir, set, "csv")?;
        export_csv(&path, set)?;
        Ok(path)
    }
}

fn artifact_path(out_dir: &Path, set: &ExportSet, ext: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("create output directory {}", out_dir.display()))?;
    Ok(out_dir.join(format!("{}_series.{ext}", set.flavor)))
}

pub fn manifest_json(set: &ExportSet) -> Result<String> {
    let manifest = Manifest {
        generated_utc: now_utc(),
        export: set,
    };
    Ok(serde_json::to_string_pretty(&manifest)?)
}

pub fn export_json(path: &Path, set: &ExportSet) -> Result<()> {
    let data = manifest_json(set)?;
    std::fs::write(path, data).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn render_csv(set: &ExportSet) -> String {
    let mut out = String::from("parameter");
    for s in &set.series {
        out.push(',');
        out.push_str(&s.name);
    }
    out.push('\n');

    for (row, parameter) in set.parameters.iter().enumerate() {
        let _ = write!(out, "{parameter}");
        for s in &set.series {
            out.push(',');
            if let Some(v) = s.values.get(row).and_then(|v| v.value()) {
                let _ = write!(out, "{v}");
            }
        }
        out.push('\n');
    }
    out
}

pub fn export_csv(path: &Path, set: &ExportSet) -> Result<()> {
    std::fs::write(path, render_csv(set)).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
