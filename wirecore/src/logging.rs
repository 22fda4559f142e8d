//! Logging bootstrap. Operational visibility into the "logged and skipped"
//! paths of the codec and state tracker goes entirely through a `slog::Logger`
//! handed in by the caller; nothing in this workspace installs a global logger.

pub use slog::{debug, info, o, trace, warn, Logger};

/// Minimal logger configuration, loadable from a TOML string.
#[derive(serde::Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig { level: default_level() }
    }
}

/// Build a terminal logger at the given config's level. Falls back to a
/// discarding logger if `toml` fails to parse (logging setup must never be
/// the reason the observer can't start).
pub fn init(toml: &str) -> Logger {
    let config: LogConfig = serdeconv::from_toml_str(toml).unwrap_or_default();
    build(&config)
}

fn build(config: &LogConfig) -> Logger {
    use sloggers::terminal::{Destination, TerminalLoggerBuilder};
    use sloggers::types::Severity;
    use sloggers::Build;

    let severity = match config.level.to_ascii_lowercase().as_str() {
        "trace" => Severity::Trace,
        "debug" => Severity::Debug,
        "warning" | "warn" => Severity::Warning,
        "error" => Severity::Error,
        _ => Severity::Info,
    };

    let mut builder = TerminalLoggerBuilder::new();
    builder.level(severity);
    builder.destination(Destination::Stderr);
    builder.build().unwrap_or_else(|_| Logger::root(slog::Discard, o!()))
}

/// A logger that discards everything, for tests and library consumers who
/// haven't wired up their own.
pub fn discard() -> Logger {
    Logger::root(slog::Discard, o!())
}
