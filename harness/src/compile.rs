//! One-shot probe build step.

use std::fmt;
use std::process::Command;

use tracing::info;

use crate::error::{HarnessError, Result};

/// Compiler invocation run once before a sweep, e.g. `g++ testes.cpp`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileCommand {
    program: String,
    args: Vec<String>,
}

impl CompileCommand {
    /// Split a command line into program and arguments, shell-style.
    pub fn parse(line: &str) -> Result<Self> {
        let mut words = shell_words::split(line)?.into_iter();
        let program = words.next().ok_or(HarnessError::EmptyCompileCommand)?;
        Ok(CompileCommand {
            program,
            args: words.collect(),
        })
    }

    /// Run the compiler to completion, streams inherited.
    pub fn run(&self) -> Result<()> {
        info!(command = %self, "compiling probe");
        let status = Command::new(&self.program)
            .args(&self.args)
            .status()
            .map_err(|source| HarnessError::CompileLaunch {
                program: self.program.clone(),
                source,
            })?;
        if !status.success() {
            return Err(HarnessError::CompileFailed {
                program: self.program.clone(),
                status,
            });
        }
        Ok(())
    }
}

impl fmt::Display for CompileCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words = std::iter::once(&self.program).chain(self.args.iter());
        write!(f, "{}", shell_words::join(words))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_shell_style() {
        let command = CompileCommand::parse("g++ testes.cpp -o matching").unwrap();
        assert_eq!(command.program, "g++");
        assert_eq!(command.args, vec!["testes.cpp", "-o", "matching"]);
    }

    #[test]
    fn keeps_quoted_arguments_whole() {
        let command = CompileCommand::parse("cc 'my file.c'").unwrap();
        assert_eq!(command.args, vec!["my file.c"]);
        assert_eq!(command.to_string(), "cc 'my file.c'");
    }

    #[test]
    fn rejects_empty_command() {
        assert!(matches!(
            CompileCommand::parse("   "),
            Err(HarnessError::EmptyCompileCommand)
        ));
    }

    #[test]
    fn surfaces_compiler_failure() {
        assert!(CompileCommand::parse("true").unwrap().run().is_ok());
        assert!(matches!(
            CompileCommand::parse("false").unwrap().run(),
            Err(HarnessError::CompileFailed { .. })
        ));
    }
}
