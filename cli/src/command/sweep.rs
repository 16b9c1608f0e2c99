use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Args;

use matchbench_harness::compile::CompileCommand;
use matchbench_harness::config::{Config, RetryPolicy, SweepConfig};
use matchbench_harness::probe::ProbeCommand;
use matchbench_harness::runner::{run_sweep, SweepOpts};
use matchbench_harness::schema::OutputSchema;
use matchbench_harness::store::StoreMode;

use crate::prompt;

#[derive(Debug, Args)]
pub struct SweepArgs {
    /// Smallest number of nodes to measure.
    #[arg(long, required_unless_present = "interactive", conflicts_with = "interactive")]
    pub start: Option<u32>,

    /// Largest number of nodes to measure, inclusive.
    #[arg(long, required_unless_present = "interactive", conflicts_with = "interactive")]
    pub end: Option<u32>,

    /// What to do with an existing results store.
    #[arg(long, value_enum, default_value_t = StoreMode::Append, conflicts_with = "interactive")]
    pub mode: StoreMode,

    /// Ask for mode and range on stdin instead of taking flags.
    #[arg(long)]
    pub interactive: bool,

    /// Probe executable to measure.
    #[arg(long)]
    pub probe: Option<PathBuf>,

    /// Trials folded into each probe invocation.
    #[arg(long)]
    pub trials: Option<u32>,

    /// Per-invocation timeout in seconds.
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Relaunches allowed after a timeout: "unbounded" or a number.
    #[arg(long)]
    pub retry: Option<RetryPolicy>,

    /// Results store to write.
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// Compile the probe first, e.g. --compile "g++ testes.cpp".
    #[arg(long)]
    pub compile: Option<String>,
}

pub fn handle_command(args: SweepArgs) -> anyhow::Result<()> {
    let config = SweepConfig::from_env()?;

    let (mode, start, end) = if args.interactive {
        let prompted = prompt::prompt_sweep(&mut io::stdin().lock(), &mut io::stderr())?;
        (prompted.mode, prompted.start, prompted.end)
    } else {
        let start = args.start.context("--start is required")?;
        let end = args.end.context("--end is required")?;
        (args.mode, start, end)
    };

    let schema = OutputSchema::with_overrides(config.edmonds_token, config.gabow_token);
    let compile = args
        .compile
        .or(config.compile)
        .map(|line| CompileCommand::parse(&line))
        .transpose()?;

    let opts = SweepOpts {
        probe: ProbeCommand::new(args.probe.unwrap_or(config.probe)).with_schema(schema),
        start,
        end,
        trials: args.trials.unwrap_or(config.trials),
        timeout: Duration::from_secs(args.timeout_secs.unwrap_or(config.timeout_secs)),
        retry: args.retry.unwrap_or(config.retry),
        mode,
        store: args.store.unwrap_or(config.store),
        compile,
    };

    let summary = run_sweep(&opts)?;
    println!(
        "Recorded {} trial(s) into {}",
        summary.recorded,
        opts.store.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::Cli;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("matchbench").chain(args.iter().copied()))
    }

    #[test]
    fn interactive_conflicts_with_the_flags_it_replaces() {
        assert!(parse(&["sweep", "--interactive", "--mode", "overwrite"]).is_err());
        assert!(parse(&["sweep", "--interactive", "--start", "1"]).is_err());
        assert!(parse(&["sweep", "--interactive", "--end", "5"]).is_err());
        assert!(parse(&["sweep", "--interactive"]).is_ok());
    }

    #[test]
    fn range_flags_are_required_without_interactive() {
        assert!(parse(&["sweep"]).is_err());
        assert!(parse(&["sweep", "--start", "1"]).is_err());
        assert!(parse(&["sweep", "--start", "1", "--end", "5"]).is_ok());
    }
}
