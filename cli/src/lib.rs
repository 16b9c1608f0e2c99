//! # matchbench
//!
//! Command-line harness for comparing two maximum-matching
//! implementations, Edmonds and Gabow, as exercised by an externally
//! built probe executable.
//!
//! ## Usage
//! Sweep a range of graph sizes, then render the recorded timings:
//!
//! ```sh
//! matchbench sweep --start 100 --end 2000
//! matchbench plot
//! ```
//!
//! To see all the available commands, run
//! ```sh
//! matchbench --help
//! ```

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub mod command;

mod prompt;

#[derive(Debug, Parser)]
#[command(name = "matchbench")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: command::Command,
}

pub fn setup_logger() -> tracing::subscriber::DefaultGuard {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env()
        .unwrap();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
                .with_ansi(std::io::IsTerminal::is_terminal(&std::io::stderr()))
                .pretty()
                .with_file(false)
                .with_line_number(false),
        )
        .with(filter)
        .set_default()
}
