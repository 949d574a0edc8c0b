use crate::timing::{SentinelPolicy, Timing};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub size_input: Option<PathBuf>,
    pub radius_input: Option<PathBuf>,
    pub out_dir: PathBuf,
    /// Sentinel handling for radius-indexed data; size-indexed data always filters.
    pub radius_sentinel: SentinelPolicy,
    pub write_json: bool,
    pub write_csv: bool,
}

impl PipelineConfig {
    /// Inputs to process, each paired with its flavor and sentinel policy.
    pub fn inputs(&self) -> Vec<(Flavor, PathBuf, SentinelPolicy)> {
        let mut inputs = Vec::new();
        if let Some(p) = self.size_input.as_ref() {
            inputs.push((Flavor::Size, p.clone(), SentinelPolicy::Filter));
        }
        if let Some(p) = self.radius_input.as_ref() {
            inputs.push((Flavor::Radius, p.clone(), self.radius_sentinel));
        }
        inputs
    }
}

/// One of the compared computation strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Implementation {
    Serial,
    Mpi,
    Cuda,
}

impl Implementation {
    pub const ALL: [Implementation; 3] =
        [Implementation::Serial, Implementation::Mpi, Implementation::Cuda];

    /// Speedup is measured against this implementation.
    pub const BASELINE: Implementation = Implementation::Serial;

    pub fn as_str(self) -> &'static str {
        match self {
            Implementation::Serial => "serial",
            Implementation::Mpi => "mpi",
            Implementation::Cuda => "cuda",
        }
    }

    pub fn is_baseline(self) -> bool {
        self == Self::BASELINE
    }
}

impl fmt::Display for Implementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which independent variable a dataset is indexed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    /// Keys like `"experiment1_1000"`, parameter is the matrix size.
    Size,
    /// Bare numeric keys, parameter is the blur radius.
    Radius,
}

impl Flavor {
    pub fn as_str(self) -> &'static str {
        match self {
            Flavor::Size => "size",
            Flavor::Radius => "radius",
        }
    }

    /// Axis label for the parameter.
    pub fn parameter_label(self) -> &'static str {
        match self {
            Flavor::Size => "Matrix Size",
            Flavor::Radius => "Blur Radius",
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Timings for one record as written by the data provider, before any
/// sentinel handling. Absent fields and `null` are read as not measured.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTimes {
    #[serde(default)]
    pub serial: Option<f64>,
    #[serde(default)]
    pub mpi: Option<f64>,
    #[serde(default)]
    pub cuda: Option<f64>,
}

impl RawTimes {
    pub fn new(serial: f64, mpi: f64, cuda: f64) -> Self {
        Self {
            serial: Some(serial),
            mpi: Some(mpi),
            cuda: Some(cuda),
        }
    }

    pub fn get(&self, implementation: Implementation) -> Option<f64> {
        match implementation {
            Implementation::Serial => self.serial,
            Implementation::Mpi => self.mpi,
            Implementation::Cuda => self.cuda,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    /// Execution times copied from the dataset.
    Times,
    /// Baseline time divided by this implementation's time.
    Speedup,
}

impl SeriesKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SeriesKind::Times => "times",
            SeriesKind::Speedup => "speedup",
        }
    }
}

/// A named series aligned 1:1 with a dataset's parameter axis.
///
/// Gaps are kept as [`Timing::NoData`] so every series in an export lines up
/// with every other one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedSeries {
    pub name: String,
    pub kind: SeriesKind,
    pub implementation: Implementation,
    pub parameters: Vec<u64>,
    pub values: Vec<Timing>,
}

impl DerivedSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `(parameter, value)` pairs in axis order.
    pub fn points(&self) -> impl Iterator<Item = (u64, Timing)> + '_ {
        self.parameters.iter().copied().zip(self.values.iter().copied())
    }

    /// Values that are present, in axis order.
    pub fn present_values(&self) -> Vec<f64> {
        self.values.iter().filter_map(|v| v.value()).collect()
    }

    pub fn gap_count(&self) -> usize {
        self.values.iter().filter(|v| !v.is_present()).count()
    }
}

/// Stable artifact name for a series, e.g. `size_mpi_speedup`.
pub fn series_name(flavor: Flavor, implementation: Implementation, kind: SeriesKind) -> String {
    format!("{}_{}_{}", flavor, implementation, kind.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_times_accept_null_and_missing_fields() {
        let raw: RawTimes = serde_json::from_str(r#"{"serial": 1.0, "mpi": null}"#).unwrap();
        assert_eq!(raw.serial, Some(1.0));
        assert_eq!(raw.mpi, None);
        assert_eq!(raw.cuda, None);
    }

    #[test]
    fn raw_times_lookup_by_implementation() {
        let raw = RawTimes {
            serial: Some(4.0),
            mpi: None,
            cuda: Some(0.5),
        };
        assert_eq!(raw.get(Implementation::Serial), Some(4.0));
        assert_eq!(raw.get(Implementation::Mpi), None);
        assert_eq!(raw.get(Implementation::Cuda), Some(0.5));
    }

    #[test]
    fn series_names_are_stable() {
        assert_eq!(
            series_name(Flavor::Size, Implementation::Serial, SeriesKind::Times),
            "size_serial_times"
        );
        assert_eq!(
            series_name(Flavor::Radius, Implementation::Cuda, SeriesKind::Speedup),
            "radius_cuda_speedup"
        );
    }

    #[test]
    fn config_lists_inputs_with_policies() {
        let cfg = PipelineConfig {
            size_input: Some("times_size.json".into()),
            radius_input: Some("times_radius.json".into()),
            out_dir: "plots".into(),
            radius_sentinel: SentinelPolicy::Keep,
            write_json: true,
            write_csv: true,
        };
        let inputs = cfg.inputs();
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[0].0, Flavor::Size);
        assert_eq!(inputs[0].2, SentinelPolicy::Filter);
        assert_eq!(inputs[1].0, Flavor::Radius);
        assert_eq!(inputs[1].2, SentinelPolicy::Keep);
    }
}
