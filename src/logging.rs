//! JSON file logging, switched on by `--logging`.
//!
//! Until [`Logger::init`] succeeds, [`logger!`](crate::logger) expands to a
//! no-op check of [`LOGGER_ENABLED`].

use std::{env, path::PathBuf, str::FromStr};

use anyhow::{anyhow, Context as _, Result};
use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::json::JsonEncoder,
};
use once_cell::sync::OnceCell;

use crate::config::LoggingConfig;

const APPENDER: &str = "logfile";

const DEFAULT_LEVEL: &str = "info";

const DEFAULT_PATH: &str = "output.log";

pub static LOGGER_ENABLED: OnceCell<bool> = OnceCell::new();

#[macro_export]
macro_rules! logger {
    ($level:ident, $($arg:tt)+) => {
        if let Some(true) = $crate::logging::LOGGER_ENABLED.get() {
            ::log::$level!($($arg)+);
        }
    };
}

/// Level and destination of the log file after config and environment are
/// merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: LevelFilter,
    pub path: PathBuf,
}

impl LogSettings {
    /// `logging.level` and `logging.path` win over `RUST_LOG` and `LOG_PATH`.
    pub fn resolve<F>(config: &LoggingConfig, var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let level = config
            .level
            .clone()
            .or_else(|| var("RUST_LOG"))
            .unwrap_or_else(|| DEFAULT_LEVEL.to_string());

        let level = LevelFilter::from_str(&level)
            .with_context(|| format!("Invalid log level: {level}"))?;

        let path = config
            .path
            .clone()
            .or_else(|| var("LOG_PATH").map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PATH));

        Ok(Self { level, path })
    }

    /// Truncates the log file and routes every record into it as JSON lines.
    fn log4rs_config(&self) -> Result<Config> {
        let appender = FileAppender::builder()
            .append(false)
            .encoder(Box::new(JsonEncoder::new()))
            .build(&self.path)
            .with_context(|| format!("Failed to open log file {}", self.path.display()))?;

        let config = Config::builder()
            .appender(Appender::builder().build(APPENDER, Box::new(appender)))
            .build(Root::builder().appender(APPENDER).build(self.level))?;

        Ok(config)
    }
}

pub struct Logger;

impl Logger {
    pub fn init(config: &LoggingConfig) -> Result<()> {
        let settings = LogSettings::resolve(config, |key| env::var(key).ok())?;

        log4rs::init_config(settings.log4rs_config()?)?;

        LOGGER_ENABLED
            .set(true)
            .map_err(|_| anyhow!("logger is already initialized"))?;

        logger!(
            debug,
            "logging at {} to {}",
            settings.level,
            settings.path.display()
        );

        Ok(())
    }
}
