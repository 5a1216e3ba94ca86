use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use tracing::{info, warn};

/// Runtime settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the JSON collection files.
    pub data_dir: PathBuf,
    /// Bound of each collection actor's request channel.
    pub channel_capacity: usize,
}

impl Config {
    pub fn load() -> Self {
        Self {
            data_dir: try_load("FOODCOURT_DATA_DIR", "data"),
            channel_capacity: try_load("FOODCOURT_CHANNEL_CAPACITY", "32"),
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
