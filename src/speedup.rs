use crate::model::{DerivedSeries, SeriesKind};
use crate::timing::Timing;

/// Ratio of a baseline time to a variant time.
///
/// `NoData` unless both are present and the variant is positive, so a run
/// that did not happen or a zero-duration run never turns into `inf`/`NaN`.
pub fn speedup(baseline: Timing, variant: Timing) -> Timing {
    match (baseline, variant) {
        (Timing::Measured(_), Timing::Measured(v)) if v > 0.0 => baseline / variant,
        _ => Timing::NoData,
    }
}

/// Per-index speedup of `variant` over `baseline`.
///
/// The result takes the baseline's parameter axis. Indices the variant does
/// not cover are `NoData`.
pub fn compute_speedup(
    baseline: &DerivedSeries,
    variant: &DerivedSeries,
    name: impl Into<String>,
) -> DerivedSeries {
    let values = baseline
        .values
        .iter()
        .enumerate()
        .map(|(i, &b)| speedup(b, variant.values.get(i).copied().unwrap_or(Timing::NoData)))
        .collect();
    DerivedSeries {
        name: name.into(),
        kind: SeriesKind::Speedup,
        implementation: variant.implementation,
        parameters: baseline.parameters.clone(),
        values,
    }
}

/// Whether at least one value in the series is present.
pub fn has_any_data(series: &DerivedSeries) -> bool {
    series.values.iter().any(|v| v.is_present())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Implementation;

    fn series(implementation: Implementation, values: &[Option<f64>]) -> DerivedSeries {
        DerivedSeries {
            name: implementation.to_string(),
            kind: SeriesKind::Times,
            implementation,
            parameters: (1..=values.len() as u64).map(|p| p * 10).collect(),
            values: values.iter().map(|&v| Timing::from(v)).collect(),
        }
    }

    #[test]
    fn zero_variant_is_no_data() {
        assert_eq!(speedup(Timing::Measured(4.0), Timing::Measured(0.0)), Timing::NoData);
        assert_eq!(speedup(Timing::Measured(4.0), Timing::Measured(-2.0)), Timing::NoData);
    }

    #[test]
    fn missing_operand_is_no_data() {
        assert_eq!(speedup(Timing::NoData, Timing::Measured(2.0)), Timing::NoData);
        assert_eq!(speedup(Timing::Measured(2.0), Timing::NoData), Timing::NoData);
    }

    #[test]
    fn zero_baseline_is_a_valid_ratio() {
        assert_eq!(speedup(Timing::Measured(0.0), Timing::Measured(2.0)), Timing::Measured(0.0));
    }

    #[test]
    fn computes_per_index_ratios() {
        let serial = series(Implementation::Serial, &[Some(4.0), None, Some(9.0), Some(6.0)]);
        let mpi = series(Implementation::Mpi, &[Some(2.0), Some(1.0), Some(0.0), Some(3.0)]);
        let out = compute_speedup(&serial, &mpi, "size_mpi_speedup");
        assert_eq!(out.name, "size_mpi_speedup");
        assert_eq!(out.kind, SeriesKind::Speedup);
        assert_eq!(out.implementation, Implementation::Mpi);
        assert_eq!(out.parameters, serial.parameters);
        assert_eq!(
            out.values,
            vec![
                Timing::Measured(2.0),
                Timing::NoData,
                Timing::NoData,
                Timing::Measured(2.0)
            ]
        );
    }

    #[test]
    fn short_variant_reads_as_no_data() {
        let serial = series(Implementation::Serial, &[Some(4.0), Some(8.0)]);
        let cuda = series(Implementation::Cuda, &[Some(2.0)]);
        let out = compute_speedup(&serial, &cuda, "short");
        assert_eq!(out.values, vec![Timing::Measured(2.0), Timing::NoData]);
    }

    #[test]
    fn repeated_computation_is_identical() {
        let serial = series(Implementation::Serial, &[Some(4.0), Some(8.0)]);
        let cuda = series(Implementation::Cuda, &[Some(0.5), None]);
        let first = compute_speedup(&serial, &cuda, "a");
        let second = compute_speedup(&serial, &cuda, "a");
        assert_eq!(first, second);
        assert_eq!(serial, series(Implementation::Serial, &[Some(4.0), Some(8.0)]));
    }

    #[test]
    fn any_data() {
        assert!(!has_any_data(&series(Implementation::Serial, &[None, None])));
        assert!(has_any_data(&series(Implementation::Serial, &[None, Some(0.0)])));
        assert!(!has_any_data(&series(Implementation::Serial, &[])));
    }
}
