//! Stdout contract with the probe executable.
//!
//! The probe reports both timings on stdout as one whitespace-delimited
//! token stream, e.g.
//!
//! ```text
//! Edmonds time: 0.241 Gabow time: 0.198
//! ```
//!
//! Only two tokens carry data: the Edmonds seconds and the Gabow seconds,
//! addressed by zero-based position. Everything else is labelling and is
//! ignored.

use crate::error::{HarnessError, Result};

/// Position of the Edmonds seconds in the published probe contract.
pub const DEFAULT_EDMONDS_TOKEN: usize = 2;

/// Position of the Gabow seconds in the published probe contract.
pub const DEFAULT_GABOW_TOKEN: usize = 5;

/// Where in the probe's stdout the two timings live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSchema {
    pub edmonds_token: usize,
    pub gabow_token: usize,
}

impl Default for OutputSchema {
    fn default() -> Self {
        OutputSchema {
            edmonds_token: DEFAULT_EDMONDS_TOKEN,
            gabow_token: DEFAULT_GABOW_TOKEN,
        }
    }
}

impl OutputSchema {
    /// Schema with either position overridden.
    pub fn with_overrides(edmonds_token: Option<usize>, gabow_token: Option<usize>) -> Self {
        let default = Self::default();
        OutputSchema {
            edmonds_token: edmonds_token.unwrap_or(default.edmonds_token),
            gabow_token: gabow_token.unwrap_or(default.gabow_token),
        }
    }

    /// Fewest tokens a conforming report can have.
    pub fn min_tokens(&self) -> usize {
        self.edmonds_token.max(self.gabow_token).saturating_add(1)
    }

    /// Extract `(edmonds, gabow)` seconds from a probe report.
    pub fn parse(&self, stdout: &str) -> Result<(f64, f64)> {
        let tokens: Vec<&str> = stdout.split_whitespace().collect();
        if tokens.len() < self.min_tokens() {
            return Err(HarnessError::ShortOutput {
                expected: self.min_tokens(),
                found: tokens.len(),
            });
        }
        let edmonds = parse_timing(tokens[self.edmonds_token], self.edmonds_token)?;
        let gabow = parse_timing(tokens[self.gabow_token], self.gabow_token)?;
        Ok((edmonds, gabow))
    }
}

fn parse_timing(token: &str, index: usize) -> Result<f64> {
    let bad = || HarnessError::BadTiming {
        index,
        token: token.to_owned(),
    };
    let value: f64 = token.parse().map_err(|_| bad())?;
    if !value.is_finite() || value < 0.0 {
        return Err(bad());
    }
    Ok(value)
}
