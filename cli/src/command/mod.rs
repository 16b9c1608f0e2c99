use clap::Subcommand;

pub mod plot;
pub mod sweep;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Measure both algorithms across a range of problem sizes.
    Sweep(sweep::SweepArgs),
    /// Render the comparison chart from recorded results.
    Plot(plot::PlotArgs),
}

pub fn handle_command(cmd: Command) -> anyhow::Result<()> {
    match cmd {
        Command::Sweep(args) => sweep::handle_command(args),
        Command::Plot(args) => plot::handle_command(args),
    }
}
