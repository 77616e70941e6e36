use crate::error::{AnalyzerError, Result};
use env_logger::{Builder, Env};
use chrono::Local;
use std::io::Write;
use yansi::Paint;

/// Initializes the command-line logger with the specified log level
///
/// `RUST_LOG` wins over `log_level` when it is set. Valid levels are:
/// error, warn, info, debug, trace. Logs go to stderr so the summary on
/// stdout stays clean.
pub fn init(log_level: &str) -> Result<()> {
    let env = Env::default()
        .filter_or("RUST_LOG", log_level)
        .write_style_or("RUST_LOG_STYLE", "auto");

    Builder::from_env(env)
        .format(|buf, record| {
            writeln!(buf, "{}", format_log(record))
        })
        .try_init()
        .map_err(|e| AnalyzerError::Config(format!("Logger already initialized: {}", e)))
}

/// Formats a log record as `[timestamp] LEVEL [target] message`
pub fn format_log(record: &log::Record) -> String {
    let level = match record.level() {
        log::Level::Error => Paint::red("ERROR").bold(),
        log::Level::Warn => Paint::yellow("WARN ").bold(),
        log::Level::Info => Paint::cyan("INFO ").bold(),
        log::Level::Debug => Paint::blue("DEBUG").bold(),
        log::Level::Trace => Paint::new("TRACE"),
    };

    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let target = if !record.target().is_empty() {
        record.target()
    } else {
        record.module_path().unwrap_or("unknown")
    };

    format!(
        "[{}] {} [{}] {}",
        timestamp,
        level,
        target,
        record.args()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_log_contains_target_and_message() {
        let line = format_log(
            &log::Record::builder()
                .args(format_args!("extracted {} entries", 3))
                .level(log::Level::Info)
                .target("projectbrief::analyzer")
                .build(),
        );
        assert!(line.contains("[projectbrief::analyzer]"));
        assert!(line.ends_with("extracted 3 entries"));
    }
}
