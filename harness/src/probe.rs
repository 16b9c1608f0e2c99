//! Invocation of the externally built probe executable.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::debug;

use crate::error::{HarnessError, Result};
use crate::schema::OutputSchema;

/// Poll interval while waiting on the child.
const WAIT_POLL: Duration = Duration::from_millis(25);

/// The probe binary plus the stdout schema it reports with.
#[derive(Debug, Clone)]
pub struct ProbeCommand {
    program: PathBuf,
    schema: OutputSchema,
}

/// What became of one probe invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProbeOutcome {
    /// The probe exited in time; both timings in seconds.
    Completed { edmonds: f64, gabow: f64 },
    /// The deadline elapsed; the child was killed and reaped.
    TimedOut,
}

impl ProbeCommand {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        ProbeCommand {
            program: program.into(),
            schema: OutputSchema::default(),
        }
    }

    pub fn with_schema(mut self, schema: OutputSchema) -> Self {
        self.schema = schema;
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Run one trial batch, `<probe> <problem_size> <trials>`, blocking
    /// until the probe exits or `timeout` elapses.
    ///
    /// Stderr stays wired to the operator's terminal. Stdout is captured
    /// off-thread so a chatty probe cannot wedge itself on a full pipe.
    pub fn measure(
        &self,
        problem_size: u32,
        trials: u32,
        timeout: Duration,
    ) -> Result<ProbeOutcome> {
        let mut child = Command::new(&self.program)
            .arg(problem_size.to_string())
            .arg(trials.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|source| HarnessError::ProbeLaunch {
                program: self.program.clone(),
                source,
            })?;

        let stdout = drain_stdout(&mut child);

        let Some(status) = wait_with_deadline(&mut child, timeout)? else {
            debug!(problem_size, "probe deadline expired, killing");
            let _ = child.kill();
            let _ = child.wait();
            // The reader thread unblocks once every pipe writer is gone;
            // its output is discarded either way, so don't wait for it.
            drop(stdout);
            return Ok(ProbeOutcome::TimedOut);
        };

        let stdout = stdout.join().unwrap_or_default();
        if !status.success() {
            return Err(HarnessError::ProbeFailed {
                problem_size,
                status,
            });
        }

        let (edmonds, gabow) = self.schema.parse(&stdout)?;
        Ok(ProbeOutcome::Completed { edmonds, gabow })
    }
}

fn drain_stdout(child: &mut Child) -> JoinHandle<String> {
    let stdout = child.stdout.take();
    thread::spawn(move || {
        let mut buf = String::new();
        if let Some(mut pipe) = stdout {
            let _ = pipe.read_to_string(&mut buf);
        }
        buf
    })
}

fn wait_with_deadline(child: &mut Child, timeout: Duration) -> Result<Option<ExitStatus>> {
    let deadline = Instant::now() + timeout;
    loop {
        if let Some(status) = child
            .try_wait()
            .map_err(|source| HarnessError::ProbeWait { source })?
        {
            return Ok(Some(status));
        }
        let now = Instant::now();
        if now >= deadline {
            return Ok(None);
        }
        thread::sleep(WAIT_POLL.min(deadline - now));
    }
}
