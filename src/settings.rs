use std::{str::FromStr, time::Duration};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use log::LevelFilter;
use serde::Deserialize;

pub const DEFAULT_URL: &str = "http://127.0.0.1:5000";

/// Read from defaults, then `estimator.toml` (or an explicit file), then
/// `ESTIMATOR_*` environment variables.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub url: String,
    pub log_level: String,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}
impl Settings {
    pub fn load(path: Option<&str>) -> Result<Self> {
        let file = match path {
            Some(path) => File::with_name(path).required(true),
            None => File::with_name("estimator").required(false),
        };
        let settings = Config::builder()
            .set_default("url", DEFAULT_URL)?
            .set_default("log_level", "info")?
            .add_source(file)
            .add_source(Environment::with_prefix("ESTIMATOR").try_parsing(true))
            .build()
            .context("failed to read settings")?;
        Ok(settings.try_deserialize::<Settings>()?)
    }
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
    pub fn level_filter(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(&self.log_level)
            .with_context(|| format!("unknown log level {:?}", self.log_level))
    }
}
