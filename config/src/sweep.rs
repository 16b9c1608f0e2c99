use std::{fmt, path::PathBuf, str::FromStr};

use serde::Deserialize;

use super::Config;

/// Default probe binary location, the compiler's artifact name.
pub const DEFAULT_PROBE: &str = "./a.out";

/// Trials folded into a single probe invocation.
pub const DEFAULT_TRIALS: u32 = 10;

/// Wall-clock budget for one probe invocation, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Environment-driven sweep settings.
///
/// Variables are read under the `MATCHBENCH_SWEEP_` prefix with the field
/// name uppercased and stripped of underscores, e.g. `timeout_secs` maps to
/// `MATCHBENCH_SWEEP_TIMEOUTSECS`.
#[derive(Debug, Deserialize)]
pub struct SweepConfig {
    #[serde(default = "default_probe")]
    pub probe: PathBuf,

    #[serde(default = "default_trials")]
    pub trials: u32,

    #[serde(rename = "timeoutsecs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub retry: RetryPolicy,

    #[serde(default = "default_store")]
    pub store: PathBuf,

    /// Compiler invocation run once before the sweep, e.g. `g++ testes.cpp`.
    #[serde(default)]
    pub compile: Option<String>,

    /// Zero-based stdout token carrying the Edmonds seconds.
    #[serde(rename = "edmondstoken", default)]
    pub edmonds_token: Option<usize>,

    /// Zero-based stdout token carrying the Gabow seconds.
    #[serde(rename = "gabowtoken", default)]
    pub gabow_token: Option<usize>,
}

impl Config for SweepConfig {
    const PREFIX: &'static str = "SWEEP";
}

fn default_probe() -> PathBuf {
    DEFAULT_PROBE.into()
}

fn default_trials() -> u32 {
    DEFAULT_TRIALS
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_store() -> PathBuf {
    super::DEFAULT_STORE.into()
}

/// How many relaunches a timed-out measurement is allowed.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum RetryPolicy {
    /// Relaunch until the probe finishes within the timeout, however long
    /// that takes.
    #[default]
    Unbounded,

    /// Give up after this many relaunches.
    Limited(u32),
}

impl RetryPolicy {
    /// Whether another attempt may follow `timeouts` expired ones.
    pub fn allows_retry(&self, timeouts: u32) -> bool {
        match self {
            RetryPolicy::Unbounded => true,
            RetryPolicy::Limited(max) => timeouts <= *max,
        }
    }
}

impl FromStr for RetryPolicy {
    type Err = ParseRetryPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("unbounded") {
            return Ok(RetryPolicy::Unbounded);
        }
        s.parse::<u32>()
            .map(RetryPolicy::Limited)
            .map_err(|_| ParseRetryPolicyError(s.to_owned()))
    }
}

impl TryFrom<String> for RetryPolicy {
    type Error = ParseRetryPolicyError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for RetryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RetryPolicy::Unbounded => write!(f, "unbounded"),
            RetryPolicy::Limited(max) => write!(f, "{max}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ParseRetryPolicyError(String);

impl fmt::Display for ParseRetryPolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected \"unbounded\" or a whole number of retries, got {:?}",
            self.0
        )
    }
}

impl std::error::Error for ParseRetryPolicyError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_config() {
        std::env::set_var("MATCHBENCH_SWEEP_PROBE", "./matching");
        std::env::set_var("MATCHBENCH_SWEEP_TIMEOUTSECS", "60");
        std::env::set_var("MATCHBENCH_SWEEP_RETRY", "3");

        let config = <SweepConfig as Config>::from_env().unwrap();
        assert_eq!(config.probe, PathBuf::from("./matching"));
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.retry, RetryPolicy::Limited(3));
        assert_eq!(config.trials, DEFAULT_TRIALS);
        assert_eq!(config.edmonds_token, None);
    }

    #[test]
    fn parse_retry_policy() {
        assert_eq!(
            "unbounded".parse::<RetryPolicy>().unwrap(),
            RetryPolicy::Unbounded
        );
        assert_eq!("0".parse::<RetryPolicy>().unwrap(), RetryPolicy::Limited(0));
        assert_eq!(
            "12".parse::<RetryPolicy>().unwrap(),
            RetryPolicy::Limited(12)
        );
        assert!("sometimes".parse::<RetryPolicy>().is_err());
        assert!("-1".parse::<RetryPolicy>().is_err());
    }

    #[test]
    fn retry_budget() {
        assert!(RetryPolicy::Unbounded.allows_retry(u32::MAX));
        assert!(RetryPolicy::Limited(2).allows_retry(1));
        assert!(RetryPolicy::Limited(2).allows_retry(2));
        assert!(!RetryPolicy::Limited(2).allows_retry(3));
        assert!(!RetryPolicy::Limited(0).allows_retry(1));
    }
}
