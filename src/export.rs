//! Assembles the named series handed to the rendering side.

use crate::dataset::BenchmarkDataset;
use crate::model::{series_name, DerivedSeries, Flavor, Implementation, SeriesKind};
use crate::speedup::{compute_speedup, has_any_data};
use serde::{Deserialize, Serialize};

/// Every series derived from one dataset, sharing one parameter axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSet {
    pub flavor: Flavor,
    pub parameter_label: String,
    pub parameters: Vec<u64>,
    pub series: Vec<DerivedSeries>,
}

impl ExportSet {
    pub fn get(&self, name: &str) -> Option<&DerivedSeries> {
        self.series.iter().find(|s| s.name == name)
    }

    pub fn of_kind(&self, kind: SeriesKind) -> impl Iterator<Item = &DerivedSeries> + '_ {
        self.series.iter().filter(move |s| s.kind == kind)
    }

    pub fn has_speedup(&self) -> bool {
        self.of_kind(SeriesKind::Speedup).next().is_some()
    }
}

/// Raw times for every implementation, plus one speedup series per
/// non-baseline implementation when the baseline has any data at all.
pub fn export(dataset: &BenchmarkDataset) -> ExportSet {
    let flavor = dataset.flavor();
    let mut series: Vec<DerivedSeries> = Implementation::ALL
        .iter()
        .map(|&i| dataset.series(i))
        .collect();

    let baseline = dataset.series(Implementation::BASELINE);
    if has_any_data(&baseline) {
        for variant in Implementation::ALL.into_iter().filter(|i| !i.is_baseline()) {
            let name = series_name(flavor, variant, SeriesKind::Speedup);
            series.push(compute_speedup(&baseline, &dataset.series(variant), name));
        }
    } else {
        tracing::info!(
            %flavor,
            baseline = %Implementation::BASELINE,
            "baseline has no data, skipping speedup series"
        );
    }

    tracing::debug!(
        %flavor,
        series = ?series.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
        "exported series"
    );
    ExportSet {
        flavor,
        parameter_label: flavor.parameter_label().to_string(),
        parameters: dataset.parameters().to_vec(),
        series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RawTimes;
    use crate::timing::{SentinelPolicy, Timing};

    fn dataset(entries: &[(&str, f64, f64, f64)]) -> BenchmarkDataset {
        BenchmarkDataset::load(
            Flavor::Size,
            entries
                .iter()
                .map(|&(k, s, m, c)| (k, RawTimes::new(s, m, c))),
            SentinelPolicy::Filter,
        )
        .unwrap()
    }

    fn values(set: &ExportSet, name: &str) -> Vec<Option<f64>> {
        set.get(name)
            .unwrap_or_else(|| panic!("missing series {name}"))
            .values
            .iter()
            .map(|v| v.value())
            .collect()
    }

    #[test]
    fn end_to_end_speedups() {
        let set = export(&dataset(&[
            ("e_2000", 8.0, 3.0, 1.0),
            ("e_1000", 4.0, 2.0, 0.5),
        ]));
        assert_eq!(set.parameters, vec![1000, 2000]);
        assert_eq!(set.parameter_label, "Matrix Size");
        assert_eq!(values(&set, "size_serial_times"), vec![Some(4.0), Some(8.0)]);
        assert_eq!(values(&set, "size_cuda_speedup"), vec![Some(8.0), Some(8.0)]);

        let mpi = values(&set, "size_mpi_speedup");
        assert_eq!(mpi[0], Some(2.0));
        assert!((mpi[1].unwrap() - 8.0 / 3.0).abs() < 1e-12);
        assert_eq!(set.series.len(), 5);
    }

    #[test]
    fn missing_baseline_skips_speedup() {
        let set = export(&dataset(&[
            ("e_10", -1.0, 2.0, 1.0),
            ("e_20", -1.0, 3.0, 1.5),
        ]));
        assert!(!set.has_speedup());
        assert_eq!(set.series.len(), 3);
        assert_eq!(set.parameters, vec![10, 20]);
        assert_eq!(values(&set, "size_mpi_times"), vec![Some(2.0), Some(3.0)]);
        assert_eq!(values(&set, "size_cuda_times"), vec![Some(1.0), Some(1.5)]);
        assert_eq!(values(&set, "size_serial_times"), vec![None, None]);
    }

    #[test]
    fn gaps_are_preserved_and_axes_align() {
        let set = export(&dataset(&[
            ("e_10", 4.0, -1.0, 0.0),
            ("e_20", -1.0, 2.0, 2.0),
            ("e_30", 6.0, 3.0, -1.0),
        ]));
        for s in &set.series {
            assert_eq!(s.parameters, set.parameters, "{} axis", s.name);
            assert_eq!(s.len(), 3);
        }
        assert_eq!(
            set.get("size_mpi_speedup").unwrap().values,
            vec![Timing::NoData, Timing::NoData, Timing::Measured(2.0)]
        );
        assert_eq!(
            set.get("size_cuda_speedup").unwrap().values,
            vec![Timing::NoData, Timing::NoData, Timing::NoData]
        );
    }

    #[test]
    fn exported_series_are_snapshots() {
        let ds = dataset(&[("e_1", 2.0, 1.0, 1.0)]);
        let mut set = export(&ds);
        set.series[0].values[0] = Timing::NoData;
        assert_eq!(
            ds.series(Implementation::Serial).values,
            vec![Timing::Measured(2.0)]
        );
    }
}
