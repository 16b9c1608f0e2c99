//! Sweep execution: drive the probe across a size range, persisting one
//! row per completed measurement.

use std::path::PathBuf;
use std::time::Duration;

use matchbench_config::RetryPolicy;
use tracing::{info, warn};

use crate::compile::CompileCommand;
use crate::error::{HarnessError, Result};
use crate::probe::{ProbeCommand, ProbeOutcome};
use crate::record::TrialRecord;
use crate::store::{ResultsStore, StoreMode};

/// Everything a sweep needs, resolved up front.
#[derive(Debug, Clone)]
pub struct SweepOpts {
    pub probe: ProbeCommand,
    /// Smallest problem size, inclusive.
    pub start: u32,
    /// Largest problem size, inclusive.
    pub end: u32,
    /// Trials folded into each probe invocation.
    pub trials: u32,
    /// Wall-clock budget per invocation.
    pub timeout: Duration,
    pub retry: RetryPolicy,
    pub mode: StoreMode,
    pub store: PathBuf,
    /// Compiler invocation run once before the first measurement.
    pub compile: Option<CompileCommand>,
}

/// Totals reported once a sweep finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SweepSummary {
    /// Rows appended to the store.
    pub recorded: u32,
    /// Invocations that hit the deadline and were discarded.
    pub timeouts: u32,
}

/// Measure every size in `[start, end]` in ascending order, appending one
/// row per size to the results store.
///
/// Only timeouts are retried. Every other failure aborts the sweep with
/// whatever rows were already flushed left intact.
pub fn run_sweep(opts: &SweepOpts) -> Result<SweepSummary> {
    if opts.start == 0 {
        return Err(HarnessError::ZeroStart);
    }
    if opts.start > opts.end {
        return Err(HarnessError::InvalidRange {
            start: opts.start,
            end: opts.end,
        });
    }
    if opts.trials == 0 {
        return Err(HarnessError::ZeroTrials);
    }

    if let Some(compile) = &opts.compile {
        compile.run()?;
    }

    let mut store = ResultsStore::open(&opts.store, opts.mode)?;
    info!(
        probe = %opts.probe.program().display(),
        store = %store.path().display(),
        start = opts.start,
        end = opts.end,
        "starting sweep"
    );

    let mut summary = SweepSummary::default();
    for problem_size in opts.start..=opts.end {
        let (edmonds, gabow) = measure_with_retry(opts, problem_size, &mut summary)?;
        store.append(&TrialRecord {
            problem_size,
            edmonds_time: edmonds,
            gabow_time: gabow,
        })?;
        summary.recorded += 1;
        info!(problem_size, edmonds_secs = edmonds, gabow_secs = gabow, "recorded");
    }

    info!(rows = summary.recorded, timeouts = summary.timeouts, "sweep finished");
    Ok(summary)
}

/// Relaunch on expiry until the policy runs out; anything else is fatal.
fn measure_with_retry(
    opts: &SweepOpts,
    problem_size: u32,
    summary: &mut SweepSummary,
) -> Result<(f64, f64)> {
    let mut timeouts = 0u32;
    loop {
        match opts.probe.measure(problem_size, opts.trials, opts.timeout)? {
            ProbeOutcome::Completed { edmonds, gabow } => return Ok((edmonds, gabow)),
            ProbeOutcome::TimedOut => {
                timeouts += 1;
                summary.timeouts += 1;
                if !opts.retry.allows_retry(timeouts) {
                    return Err(HarnessError::RetriesExhausted {
                        problem_size,
                        attempts: timeouts,
                    });
                }
                warn!(problem_size, timeouts, "probe timed out, retrying");
            }
        }
    }
}
