use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors raised while sweeping or rendering.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("invalid sweep range: start {start} exceeds end {end}")]
    InvalidRange { start: u32, end: u32 },

    #[error("problem sizes start at 1")]
    ZeroStart,

    #[error("trial count must be positive")]
    ZeroTrials,

    #[error("failed to launch probe {}: {}", .program.display(), .source)]
    ProbeLaunch {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed waiting on probe: {source}")]
    ProbeWait {
        #[source]
        source: std::io::Error,
    },

    #[error("probe exited with {status} at problem size {problem_size}")]
    ProbeFailed {
        problem_size: u32,
        status: ExitStatus,
    },

    #[error("probe timed out {attempts} time(s) at problem size {problem_size}, retry budget exhausted")]
    RetriesExhausted { problem_size: u32, attempts: u32 },

    #[error("probe output too short: expected at least {expected} tokens, found {found}")]
    ShortOutput { expected: usize, found: usize },

    #[error("probe output token {index} is not a usable timing: {token:?}")]
    BadTiming { index: usize, token: String },

    #[error("unparseable compile command: {0}")]
    CompileParse(#[from] shell_words::ParseError),

    #[error("compile command is empty")]
    EmptyCompileCommand,

    #[error("failed to launch compile command {program:?}: {source}")]
    CompileLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("compile command {program:?} exited with {status}")]
    CompileFailed { program: String, status: ExitStatus },

    #[error("results store is already locked by another sweep (lock file {})", .path.display())]
    StoreLocked { path: PathBuf },

    #[error("results store {}: {}", .path.display(), .source)]
    StoreIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed results row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    #[error("results store {} has no rows to plot", .path.display())]
    EmptyStore { path: PathBuf },

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T, E = HarnessError> = std::result::Result<T, E>;
