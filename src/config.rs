//! Command-line and environment configuration.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(
    name = "poker-ranges",
    version,
    about = "Edit Texas Hold'em starting-hand ranges in the terminal"
)]
pub struct Cli {
    /// File the range collection is saved to.
    #[arg(
        long,
        value_name = "PATH",
        env = "POKER_RANGES_STORE",
        default_value = "poker-ranges.json"
    )]
    pub store: PathBuf,

    /// Directory exports are written to.
    #[arg(long = "export-dir", value_name = "DIR", default_value = ".")]
    pub export_dir: PathBuf,

    /// Base URL of the assistant service.
    #[arg(
        long = "api-url",
        value_name = "URL",
        env = "POKER_RANGES_API_URL",
        default_value = "http://localhost:8000"
    )]
    pub api_url: String,

    /// Disable the assistant chat panel.
    #[arg(long = "no-assistant")]
    pub no_assistant: bool,

    /// Log file (the terminal is taken by the UI).
    #[arg(long = "log-file", value_name = "PATH", default_value = "poker-ranges.log")]
    pub log_file: PathBuf,

    /// Log level; RUST_LOG takes precedence when set.
    #[arg(long = "log-level", value_enum, default_value = "info")]
    pub log_level: LogLevelArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for Level {
    fn from(value: LogLevelArg) -> Self {
        match value {
            LogLevelArg::Error => Level::ERROR,
            LogLevelArg::Warn => Level::WARN,
            LogLevelArg::Info => Level::INFO,
            LogLevelArg::Debug => Level::DEBUG,
            LogLevelArg::Trace => Level::TRACE,
        }
    }
}

/// Settings the application runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub store_path: PathBuf,
    pub export_dir: PathBuf,
    pub api_url: Option<String>,
    pub log_file: PathBuf,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("poker-ranges.json"),
            export_dir: PathBuf::from("."),
            api_url: Some("http://localhost:8000".to_string()),
            log_file: PathBuf::from("poker-ranges.log"),
            log_level: Level::INFO,
        }
    }
}

impl Cli {
    pub fn into_config(self) -> Config {
        Config {
            store_path: self.store,
            export_dir: self.export_dir,
            api_url: (!self.no_assistant).then_some(self.api_url),
            log_file: self.log_file,
            log_level: self.log_level.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_to_config() {
        let cli = Cli::try_parse_from([
            "poker-ranges",
            "--store",
            "/tmp/r.json",
            "--no-assistant",
            "--log-level",
            "debug",
        ])
        .unwrap();
        let cfg = cli.into_config();
        assert_eq!(cfg.store_path, PathBuf::from("/tmp/r.json"));
        assert_eq!(cfg.api_url, None);
        assert_eq!(cfg.log_level, Level::DEBUG);
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
