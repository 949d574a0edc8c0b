//! Parsed, parameter-sorted benchmark records.

use crate::error::{PipelineError, Result};
use crate::model::{series_name, DerivedSeries, Flavor, Implementation, RawTimes, SeriesKind};
use crate::parameter::extract_parameter;
use crate::timing::{SentinelPolicy, Timing};
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use std::fmt;
use std::path::Path;

/// One benchmark run: a parameter and the time each implementation took.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRecord {
    key: String,
    parameter: u64,
    serial: Timing,
    mpi: Timing,
    cuda: Timing,
}

impl BenchmarkRecord {
    fn from_raw(key: String, raw: &RawTimes, policy: SentinelPolicy) -> Result<Self> {
        let parameter = extract_parameter(&key)?;
        let canonical = |i| policy.canonicalize_opt(raw.get(i));
        Ok(Self {
            serial: canonical(Implementation::Serial),
            mpi: canonical(Implementation::Mpi),
            cuda: canonical(Implementation::Cuda),
            key,
            parameter,
        })
    }

    /// The key this record was read from.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn parameter(&self) -> u64 {
        self.parameter
    }

    pub fn timing(&self, implementation: Implementation) -> Timing {
        match implementation {
            Implementation::Serial => self.serial,
            Implementation::Mpi => self.mpi,
            Implementation::Cuda => self.cuda,
        }
    }
}

/// Top-level JSON object read entry by entry, so a repeated key stays
/// visible to the duplicate check instead of overwriting its predecessor.
struct RawEntries(Vec<(String, RawTimes)>);

impl<'de> Deserialize<'de> for RawEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = RawEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping record keys to timings")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<RawEntries, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, RawTimes>()? {
                    entries.push(entry);
                }
                Ok(RawEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Records sorted ascending by parameter, with no parameter repeated.
#[derive(Debug, Clone)]
pub struct BenchmarkDataset {
    flavor: Flavor,
    records: Vec<BenchmarkRecord>,
    parameters: Vec<u64>,
}

impl BenchmarkDataset {
    /// Build a dataset from `(key, times)` entries in any order.
    ///
    /// Fails on the first key without a numeric parameter, on an empty
    /// input, and when two keys resolve to the same parameter.
    pub fn load<I, K>(flavor: Flavor, entries: I, policy: SentinelPolicy) -> Result<Self>
    where
        I: IntoIterator<Item = (K, RawTimes)>,
        K: Into<String>,
    {
        let mut records = entries
            .into_iter()
            .map(|(key, raw)| BenchmarkRecord::from_raw(key.into(), &raw, policy))
            .collect::<Result<Vec<_>>>()?;

        if records.is_empty() {
            return Err(PipelineError::EmptyDataset);
        }

        records.sort_by_key(BenchmarkRecord::parameter);
        if let Some(pair) = records
            .windows(2)
            .find(|w| w[0].parameter == w[1].parameter)
        {
            return Err(PipelineError::DuplicateParameter {
                parameter: pair[0].parameter,
                first: pair[0].key.clone(),
                second: pair[1].key.clone(),
            });
        }

        let parameters = records.iter().map(BenchmarkRecord::parameter).collect();
        tracing::debug!(
            %flavor,
            records = records.len(),
            ?policy,
            "loaded benchmark dataset"
        );
        Ok(Self {
            flavor,
            records,
            parameters,
        })
    }

    /// Parse a JSON object mapping keys to `{serial, mpi, cuda}` objects.
    /// `origin` names the source in error messages.
    pub fn from_json_str(
        flavor: Flavor,
        json: &str,
        origin: &str,
        policy: SentinelPolicy,
    ) -> Result<Self> {
        let raw: RawEntries = serde_json::from_str(json).map_err(|source| PipelineError::Json {
            origin: origin.to_string(),
            source,
        })?;
        Self::load(flavor, raw.0, policy)
    }

    pub fn from_path(flavor: Flavor, path: &Path, policy: SentinelPolicy) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| PipelineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(flavor, &json, &path.display().to_string(), policy)
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    /// The shared parameter axis, ascending.
    pub fn parameters(&self) -> &[u64] {
        &self.parameters
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Raw execution times for one implementation, aligned with [`Self::parameters`].
    pub fn series(&self, implementation: Implementation) -> DerivedSeries {
        DerivedSeries {
            name: series_name(self.flavor, implementation, SeriesKind::Times),
            kind: SeriesKind::Times,
            implementation,
            parameters: self.parameters.clone(),
            values: self
                .records
                .iter()
                .map(|r| r.timing(implementation))
                .collect(),
        }
    }
}
