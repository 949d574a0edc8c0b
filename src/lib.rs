//! Normalizes serial/MPI/CUDA benchmark timings into chart-ready series.
//!
//! Raw records are keyed by a parameter (matrix size or blur radius). Loading
//! turns the `-1` "not measured" sentinel into [`timing::Timing::NoData`],
//! sorts records by parameter and rejects malformed or duplicate keys. The
//! exporter then derives raw-time and speedup series for a chart renderer.

pub mod cli;
pub mod dataset;
pub mod error;
pub mod export;
pub mod metrics;
pub mod model;
pub mod parameter;
pub mod pipeline;
pub mod speedup;
pub mod storage;
pub mod timing;
mod text_summary;

pub use dataset::{BenchmarkDataset, BenchmarkRecord};
pub use error::PipelineError;
pub use export::{export, ExportSet};
pub use model::{DerivedSeries, Flavor, Implementation, RawTimes, SeriesKind};
pub use timing::{SentinelPolicy, Timing};
