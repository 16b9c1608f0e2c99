//! Performance harness comparing two maximum-matching implementations.
//!
//! The measured program is an externally built executable (the probe) that
//! generates random graphs, runs both the Edmonds and the Gabow matching
//! implementation over them, and reports elapsed seconds for each on
//! stdout. This crate drives the probe across a range of graph sizes,
//! accumulates the timings in a durable CSV store, and renders the two
//! series as a comparison chart.

pub mod compile;
pub mod error;
pub mod graph;
pub mod probe;
pub mod record;
pub mod runner;
pub mod schema;
pub mod store;

pub mod config {
    pub use matchbench_config::{
        plot, sweep, Config, Error, PlotConfig, RetryPolicy, SweepConfig,
    };
}

pub use error::{HarnessError, Result};
pub use record::TrialRecord;
pub use runner::{run_sweep, SweepOpts, SweepSummary};
