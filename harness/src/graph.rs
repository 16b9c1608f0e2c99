//! Comparison chart rendering from the results store.

use std::path::PathBuf;

use plotly::common::Mode;
use plotly::layout::{Axis, RangeMode};
use plotly::{Layout, Plot, Scatter};
use tracing::info;

use crate::error::{HarnessError, Result};
use crate::record::TrialRecord;
use crate::store;

/// What the plotter draws and where it puts the result.
#[derive(Debug, Clone)]
pub struct PlotOpts {
    pub store: PathBuf,
    /// Largest problem size drawn, inclusive.
    pub size_limit: u32,
    pub output: PathBuf,
}

/// Render both timing series into a standalone HTML chart.
pub fn render_comparison(opts: &PlotOpts) -> Result<()> {
    let records = store::read_records(&opts.store)?;
    if records.is_empty() {
        return Err(HarnessError::EmptyStore {
            path: opts.store.clone(),
        });
    }
    let points = series_points(records, opts.size_limit);

    let sizes: Vec<u32> = points.iter().map(|record| record.problem_size).collect();
    let edmonds: Vec<f64> = points.iter().map(TrialRecord::edmonds_millis).collect();
    let gabow: Vec<f64> = points.iter().map(TrialRecord::gabow_millis).collect();

    let mut plot = Plot::new();
    plot.add_trace(Scatter::new(sizes.clone(), edmonds).name("Edmonds").mode(Mode::Lines));
    plot.add_trace(Scatter::new(sizes, gabow).name("Gabow").mode(Mode::Lines));
    plot.set_layout(
        Layout::new()
            .title("Benchmark Results")
            .x_axis(Axis::new().title("Number of Nodes").show_grid(true))
            .y_axis(
                Axis::new()
                    .title("Execution Time (milliseconds)")
                    .range_mode(RangeMode::ToZero)
                    .show_grid(true)
                    .zero_line(true),
            ),
    );
    plot.write_html(&opts.output);

    info!(points = points.len(), output = %opts.output.display(), "chart written");
    Ok(())
}

/// Order the rows by problem size, then cut off above the limit.
///
/// Stores grown across several append sweeps are not necessarily ordered,
/// so the cutoff only means anything after sorting.
fn series_points(mut records: Vec<TrialRecord>, size_limit: u32) -> Vec<TrialRecord> {
    records.sort_by_key(|record| record.problem_size);
    records.retain(|record| record.problem_size <= size_limit);
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(problem_size: u32) -> TrialRecord {
        TrialRecord {
            problem_size,
            edmonds_time: 0.002,
            gabow_time: 0.001,
        }
    }

    #[test]
    fn cutoff_is_inclusive() {
        let records = vec![record(10), record(2500), record(2501), record(3000)];
        let points = series_points(records, 2500);
        let sizes: Vec<u32> = points.iter().map(|r| r.problem_size).collect();
        assert_eq!(sizes, vec![10, 2500]);
    }

    #[test]
    fn unordered_store_is_sorted_before_cutoff() {
        // Rows under the limit that come after an overlimit row must not
        // be lost.
        let records = vec![record(2600), record(20), record(2500), record(10)];
        let points = series_points(records, 2500);
        let sizes: Vec<u32> = points.iter().map(|r| r.problem_size).collect();
        assert_eq!(sizes, vec![10, 20, 2500]);
    }

    #[test]
    fn renders_chart_from_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = dir.path().join("results.csv");
        std::fs::write(&store, "Number of Nodes,Edmonds,Gabow\n10,0.002,0.001\n").unwrap();

        let output = dir.path().join("results.html");
        render_comparison(&PlotOpts {
            store,
            size_limit: 2500,
            output: output.clone(),
        })
        .unwrap();
        assert!(output.exists());
    }

    #[test]
    fn header_only_store_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let store = dir.path().join("results.csv");
        std::fs::write(&store, "Number of Nodes,Edmonds,Gabow\n").unwrap();

        let err = render_comparison(&PlotOpts {
            store,
            size_limit: 2500,
            output: dir.path().join("results.html"),
        })
        .unwrap_err();
        assert!(matches!(err, HarnessError::EmptyStore { .. }));
    }
}
