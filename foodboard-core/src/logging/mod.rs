//! Logging bootstrap
//!
//! Everything in the workspace logs through the standard `log` facade
//! (`log::info!`, `log::warn!`, ...). The binary calls [`init_logging`] once
//! at startup; `env_logger` does the filtering and writes lines rendered by
//! [`LogFormat`] to stderr.
//!
//! ```rust,no_run
//! use foodboard_core::config::LoggingConfig;
//!
//! foodboard_core::logging::init_logging(&LoggingConfig::default());
//! log::info!("Dashboard mounted");
//! ```

pub mod formatter;

pub use formatter::{LogFormat, LogLine};

use std::io::Write;
use std::sync::Once;

use crate::config::LoggingConfig;

static INIT: Once = Once::new();

/// Install the global logger. Safe to call multiple times; only the first
/// call has an effect.
pub fn init_logging(config: &LoggingConfig) {
    INIT.call_once(|| {
        let format = config.format.clone();
        let result = env_logger::Builder::new()
            .filter_level(config.level_filter())
            .format(move |buf, record| {
                writeln!(buf, "{}", format.format_line(&LogLine::from_record(record)))
            })
            .target(env_logger::Target::Stderr)
            .try_init();

        // A logger installed by the host (e.g. a test harness) wins.
        if let Err(e) = result {
            eprintln!("Logger already initialized: {}", e);
        }
    });
}
