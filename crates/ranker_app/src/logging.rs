//! Global logger setup for a ranker session.
//!
//! The log file is truncated on every start; terminal output goes to stdout
//! and stderr by level.

use std::fs::File;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

/// File name used for the session log when no other path is configured.
pub const DEFAULT_LOG_FILENAME: &str = "ranker.log";

/// Where a session's log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    /// Leave the global logger alone.
    Disabled,
    Terminal,
    File(PathBuf),
    TerminalAndFile(PathBuf),
}

impl Default for LogDestination {
    fn default() -> Self {
        Self::TerminalAndFile(PathBuf::from(DEFAULT_LOG_FILENAME))
    }
}

impl LogDestination {
    fn file_path(&self) -> Option<&Path> {
        match self {
            Self::File(path) | Self::TerminalAndFile(path) => Some(path.as_path()),
            Self::Disabled | Self::Terminal => None,
        }
    }

    fn to_terminal(&self) -> bool {
        matches!(self, Self::Terminal | Self::TerminalAndFile(_))
    }
}

/// Installs the global logger. Returns `false` when nothing was installed:
/// logging is disabled, the log file could not be created and no terminal
/// was requested, or a logger already exists.
pub fn initialize(destination: &LogDestination, level: LevelFilter) -> bool {
    let config = session_config();
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

    if destination.to_terminal() {
        loggers.push(TermLogger::new(
            level,
            config.clone(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }
    if let Some(path) = destination.file_path() {
        match File::create(path) {
            Ok(file) => loggers.push(WriteLogger::new(level, config, file)),
            // No logger exists yet to report through.
            Err(err) => eprintln!("ranker: cannot write log file {}: {err}", path.display()),
        }
    }

    !loggers.is_empty() && CombinedLogger::init(loggers).is_ok()
}

fn session_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .set_thread_level(LevelFilter::Off)
        .build()
}
