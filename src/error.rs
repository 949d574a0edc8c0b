use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort loading a dataset.
///
/// Missing measurements are not errors: they become [`crate::timing::Timing::NoData`]
/// and flow through to export as gaps.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("malformed record key {key:?}: no numeric parameter found")]
    MalformedKey { key: String },

    #[error("dataset is empty: nothing to export")]
    EmptyDataset,

    #[error("duplicate parameter {parameter}: keys {first:?} and {second:?} both map to it")]
    DuplicateParameter {
        parameter: u64,
        first: String,
        second: String,
    },

    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid benchmark JSON in {origin}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, PipelineError>;
