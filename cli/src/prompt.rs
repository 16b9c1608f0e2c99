//! Interactive prompts supplying the sweep's mode and bounds.

use std::io::{BufRead, Write};

use anyhow::Context;

use matchbench_harness::store::StoreMode;

/// Prompted inputs covering what the flags would otherwise supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptedSweep {
    pub mode: StoreMode,
    pub start: u32,
    pub end: u32,
}

/// Ask for mode, start and end on the given streams.
///
/// Anything but `y` keeps the existing store. Non-numeric bounds are
/// fatal, same as on the flag-driven path.
pub fn prompt_sweep<R, W>(input: &mut R, output: &mut W) -> anyhow::Result<PromptedSweep>
where
    R: BufRead,
    W: Write,
{
    let mode = match ask(input, output, "Overwrite the results store? (y/n) ")?.as_str() {
        "y" | "Y" => StoreMode::Overwrite,
        _ => StoreMode::Append,
    };
    let start = ask(input, output, "First number of nodes: ")?
        .parse()
        .context("start must be a whole number")?;
    let end = ask(input, output, "Last number of nodes: ")?
        .parse()
        .context("end must be a whole number")?;

    Ok(PromptedSweep { mode, start, end })
}

fn ask<R, W>(input: &mut R, output: &mut W, question: &str) -> anyhow::Result<String>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{question}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_owned())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run(answers: &str) -> anyhow::Result<PromptedSweep> {
        prompt_sweep(&mut Cursor::new(answers), &mut Vec::new())
    }

    #[test]
    fn overwrite_on_y_only() {
        assert_eq!(run("y\n1\n5\n").unwrap().mode, StoreMode::Overwrite);
        assert_eq!(run("Y\n1\n5\n").unwrap().mode, StoreMode::Overwrite);
        assert_eq!(run("n\n1\n5\n").unwrap().mode, StoreMode::Append);
        assert_eq!(run("\n1\n5\n").unwrap().mode, StoreMode::Append);
    }

    #[test]
    fn parses_bounds() {
        let prompted = run("n\n100\n2500\n").unwrap();
        assert_eq!(prompted.start, 100);
        assert_eq!(prompted.end, 2500);
    }

    #[test]
    fn non_numeric_bound_is_fatal() {
        assert!(run("n\nten\n20\n").is_err());
        assert!(run("n\n10\n\n").is_err());
    }

    #[test]
    fn questions_reach_the_operator() {
        let mut output = Vec::new();
        prompt_sweep(&mut Cursor::new("y\n1\n2\n"), &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Overwrite"));
        assert!(text.contains("First number of nodes"));
    }
}
