use std::path::PathBuf;

use clap::Args;

use matchbench_harness::config::{Config, PlotConfig};
use matchbench_harness::graph::{render_comparison, PlotOpts};

#[derive(Debug, Args)]
pub struct PlotArgs {
    /// Results store to read.
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// Largest number of nodes to draw, inclusive.
    #[arg(long)]
    pub size_limit: Option<u32>,

    /// Where to write the HTML chart.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn handle_command(args: PlotArgs) -> anyhow::Result<()> {
    let config = PlotConfig::from_env()?;

    let opts = PlotOpts {
        store: args.store.unwrap_or(config.store),
        size_limit: args.size_limit.unwrap_or(config.size_limit),
        output: args.output.unwrap_or(config.output),
    };
    render_comparison(&opts)?;

    println!("Chart written to {}", opts.output.display());
    Ok(())
}
