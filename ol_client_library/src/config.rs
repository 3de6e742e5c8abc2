use config::{Config, Environment, File, FileFormat};
use ol_library::logging::LoggingConfig;
use serde::Deserialize;
use std::collections::HashMap;
use std::ffi::OsString;

/// Worker address used when neither a flag, the environment, nor a config file names one
pub const DEFAULT_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TIMEOUT_SEC: u64 = 15;
/// Environment variables starting with `OL_` feed the configuration, e.g. `OL_URL`.
/// Nested keys use `__`, e.g. `OL_LOGGING__LEVEL`.
pub const ENV_PREFIX: &str = "OL";

/// Keep the `OL_*` entries of a process environment that are valid UTF-8 on both sides.
/// Anything else can never be a configuration key and is dropped.
pub fn env_snapshot<I: IntoIterator<Item = (OsString, OsString)>>(vars: I) -> HashMap<String, String> {
    let prefix = format!("{}_", ENV_PREFIX);
    vars.into_iter()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .filter(|(k, _)| k.to_ascii_uppercase().starts_with(&prefix))
        .collect()
}

#[derive(Debug, Deserialize)]
pub struct Configuration {
    /// base address of the worker
    pub url: String,
    /// upper bound on waiting for a complete response
    pub timeout_sec: u64,
    pub logging: LoggingConfig,
}

impl Configuration {
    /// Layer defaults, an optional JSON config file, then `OL_*` variables out of `env`.
    /// `env` is a snapshot so callers control what the environment looks like.
    pub fn new(config_fpath: Option<&str>, env: HashMap<String, String>) -> anyhow::Result<Self> {
        let defaults = LoggingConfig::default();
        let mut s = Config::builder()
            .set_default("url", DEFAULT_URL)?
            .set_default("timeout_sec", DEFAULT_TIMEOUT_SEC as i64)?
            .set_default("logging.level", defaults.level)?
            .set_default("logging.spanning", defaults.spanning)?
            .set_default("logging.json", defaults.json)?;
        if let Some(config_fpath) = config_fpath {
            s = s.add_source(File::new(config_fpath, FileFormat::Json).required(true));
        }
        let s = s.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(Some(env.into_iter().collect())),
        );
        let cfg: Configuration = match s.build() {
            Ok(s) => match s.try_deserialize() {
                Ok(cfg) => cfg,
                Err(e) => anyhow::bail!("Failed to deserialize configuration because '{}'", e),
            },
            Err(e) => anyhow::bail!("Failed to build configuration because '{}'", e),
        };
        if cfg.timeout_sec == 0 {
            anyhow::bail!("Configured timeout_sec must be a positive number of seconds");
        }
        Ok(cfg)
    }

    /// Command line flags win over anything loaded
    pub fn with_flags(mut self, url: Option<String>, timeout_sec: Option<u64>, log_level: Option<String>) -> Self {
        if let Some(url) = url {
            self.url = url;
        }
        if let Some(timeout_sec) = timeout_sec {
            self.timeout_sec = timeout_sec;
        }
        if let Some(level) = log_level {
            self.logging.level = level;
        }
        self
    }
}
