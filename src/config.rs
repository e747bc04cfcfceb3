//! Runtime settings: an optional `config.toml` in the platform config directory,
//! overridden by `LAGOM__<SECTION>__<KEY>` environment variables.

use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ledger: LedgerConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LedgerConfig {
    /// Start each session with the demo transactions and goals.
    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,
    /// How many earlier snapshots `:undo` can step back through.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: default_seed_demo_data(),
            history_limit: default_history_limit(),
        }
    }
}

fn default_seed_demo_data() -> bool {
    true
}

fn default_history_limit() -> usize {
    50
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyOrdering {
    /// A reply is held until every earlier reply has been delivered.
    #[default]
    SendOrder,
    /// Replies appear as soon as they are due.
    Completion,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,
    /// Extra random delay of up to this many milliseconds per reply.
    #[serde(default)]
    pub reply_jitter_ms: u64,
    #[serde(default)]
    pub ordering: ReplyOrdering,
    /// Fixed RNG seed for reply selection; entropy when unset.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
            reply_jitter_ms: 0,
            ordering: ReplyOrdering::default(),
            seed: None,
        }
    }
}

fn default_reply_delay_ms() -> u64 {
    1500
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Log file for the TUI. Defaults to `lagom.log` in the data directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            file: None,
        }
    }
}

fn default_log_filter() -> String {
    "lagom=info".to_string()
}

impl Config {
    /// Load from `path` (missing file is fine) and the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(false),
            );
        }
        builder
            .add_source(
                config::Environment::with_prefix("LAGOM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    #[cfg(test)]
    pub fn from_toml(source: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

pub fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "lagom", "Lagom")
}

/// Default location of `config.toml`, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
