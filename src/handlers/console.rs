//! Console handler implementation

use crate::core::{Handler, LogLevel, LogRecord, LoggerError, Result, TimestampFormat};
use colored::Colorize;
use std::io::Write;

pub struct ConsoleHandler {
    min_level: u32,
    use_colors: bool,
    timestamp_format: TimestampFormat,
}

impl ConsoleHandler {
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::NotSet.value(),
            use_colors: true,
            timestamp_format: TimestampFormat::default(),
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            ..Self::new()
        }
    }

    /// Skip records below this level, independent of the logger's threshold
    #[must_use]
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level.value();
        self
    }

    /// Set the timestamp format for this handler
    ///
    /// # Examples
    ///
    /// ```
    /// use leveled_log::handlers::ConsoleHandler;
    /// use leveled_log::TimestampFormat;
    ///
    /// let handler = ConsoleHandler::new()
    ///     .with_timestamp_format(TimestampFormat::Iso8601Micros);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Render a record as one console line
    ///
    /// Fails when the configured `Custom` timestamp pattern is invalid.
    pub fn format_line(&self, record: &LogRecord) -> Result<String> {
        let level_str = format!("{:8}", record.level_name());
        let level_str = match LogLevel::from_value(record.level()) {
            Some(level) if self.use_colors => level_str.color(level.color_code()).to_string(),
            _ => level_str,
        };

        let base = format!(
            "[{}] [{}] {} - {}",
            self.timestamp_format.format(&record.timestamp())?,
            level_str,
            record.logger_name(),
            record.message()
        );

        let args = record.format_arguments();
        if args.is_empty() {
            Ok(base)
        } else {
            Ok(format!("{} {}", base, args))
        }
    }
}

impl Default for ConsoleHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler for ConsoleHandler {
    fn accept(&self, record: &LogRecord) -> Result<()> {
        if record.level() < self.min_level {
            return Ok(());
        }

        let line = self
            .format_line(record)
            .map_err(|e| LoggerError::handler(self.name(), e.to_string()))?;

        // Route Error and Critical levels to stderr, others to stdout
        if record.level() >= LogLevel::Error.value() {
            writeln!(std::io::stderr().lock(), "{}", line)?;
        } else {
            writeln!(std::io::stdout().lock(), "{}", line)?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
