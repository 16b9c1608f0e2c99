use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

mod error;

pub mod plot;
pub mod sweep;

pub use error::Error;
pub use plot::PlotConfig;
pub use sweep::{RetryPolicy, SweepConfig};

const CARGO_MANIFEST_DIR: &str = env!("CARGO_MANIFEST_DIR");
const CONFIG_ENV_PREFIX: &str = "MATCHBENCH";

/// Default results store location, relative to the working directory.
pub const DEFAULT_STORE: &str = "benchmark_results.csv";

pub trait Config: DeserializeOwned {
    const PREFIX: &'static str;

    fn from_env() -> Result<Self, Error> {
        let prefix = format!("{}_{}", CONFIG_ENV_PREFIX, Self::PREFIX);

        // Every field has a default, so a missing env file is fine.
        if let Err(err) = dotenvy::from_path(config_env_path()) {
            if !err.not_found() {
                return Err(err.into());
            }
        }

        Ok(config::Config::builder()
            .add_source(config::Environment::with_prefix(&prefix).separator("_"))
            .build()?
            .try_deserialize()?)
    }
}

#[doc(hidden)]
pub fn config_env_path() -> PathBuf {
    Path::new(CARGO_MANIFEST_DIR).join(".config.env")
}
