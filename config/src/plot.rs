use std::path::PathBuf;

use serde::Deserialize;

use super::Config;

/// Largest problem size that is drawn, inclusive.
pub const DEFAULT_SIZE_LIMIT: u32 = 2500;

/// Default rendered chart location.
pub const DEFAULT_OUTPUT: &str = "benchmark_results.html";

/// Environment-driven plot settings, read under `MATCHBENCH_PLOT_`.
#[derive(Debug, Deserialize)]
pub struct PlotConfig {
    #[serde(default = "default_store")]
    pub store: PathBuf,

    #[serde(rename = "sizelimit", default = "default_size_limit")]
    pub size_limit: u32,

    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Config for PlotConfig {
    const PREFIX: &'static str = "PLOT";
}

fn default_store() -> PathBuf {
    super::DEFAULT_STORE.into()
}

fn default_size_limit() -> u32 {
    DEFAULT_SIZE_LIMIT
}

fn default_output() -> PathBuf {
    DEFAULT_OUTPUT.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_config() {
        std::env::set_var("MATCHBENCH_PLOT_SIZELIMIT", "800");

        let config = <PlotConfig as Config>::from_env().unwrap();
        assert_eq!(config.size_limit, 800);
        assert_eq!(config.store, PathBuf::from(crate::DEFAULT_STORE));
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
    }
}
