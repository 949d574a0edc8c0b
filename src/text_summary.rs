//! Text summary builder for CLI output.
//!
//! One line per exported series, with descriptive metrics over present values.

use crate::export::ExportSet;
use crate::metrics;
use crate::model::SeriesKind;

/// Pre-formatted lines for text output.
pub(crate) struct TextSummary {
    pub lines: Vec<String>,
}

/// Build a text summary from an export set.
pub(crate) fn build_text_summary(set: &ExportSet) -> TextSummary {
    let mut lines = Vec::new();

    let axis = set
        .parameters
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    lines.push(format!("== {} ==", set.flavor));
    lines.push(format!("{}: {axis}", set.parameter_label));

    for s in &set.series {
        let unit = match s.kind {
            SeriesKind::Times => "s",
            SeriesKind::Speedup => "x",
        };
        let present = s.present_values();
        let gaps = s.gap_count();
        match metrics::compute_metrics(&present) {
            Some((min, median, mean, max)) => lines.push(format!(
                "{}: {} points, {} gaps, \
                 min {:.3}{unit} med {:.3}{unit} avg {:.3}{unit} max {:.3}{unit}",
                s.name,
                present.len(),
                gaps,
                min,
                median,
                mean,
                max
            )),
            None => lines.push(format!("{}: no data ({} gaps)", s.name, gaps)),
        }
    }

    if !set.has_speedup() {
        lines.push("Speedup: skipped, baseline has no data".to_string());
    }

    TextSummary { lines }
}
