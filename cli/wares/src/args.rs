//! CLI argument definitions for the wares binary.

use clap::{Parser, ValueEnum};

/// Catalog filtering demo.
///
/// Filters the built-in sample catalog and prints matching products to
/// stdout. By default the composable specification engine is used; the
/// older enumerated engine is available for comparison.
///
/// ## Examples
///
/// Single criterion:
///   wares -f color=green
///
/// Conjunction of criteria:
///   wares -f color=green -f size=large
///
/// Multi-value (OR) criterion:
///   wares -f "color=green,blue"
///
/// The enumerated engine, for contrast:
///   wares --engine legacy -f color=green -f size=large
#[derive(Parser, Debug)]
#[command(name = "wares")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Filtering criterion (can be specified multiple times; all must hold)
    ///
    /// Format: "field=value1,value2" where field is `color` or `size`.
    /// Multiple values for one field have OR logic.
    #[arg(long = "filter", short = 'f')]
    pub filters: Vec<String>,

    /// Filtering engine
    #[arg(long, value_enum, default_value = "spec")]
    pub engine: Engine,

    /// Output format for matched products
    #[arg(long, value_enum, default_value = "text")]
    pub output_format: OutputFormat,

    /// Maximum number of products to output (0 = unlimited)
    #[arg(long, default_value = "0")]
    pub max_items: usize,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

/// Filtering engine selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Engine {
    /// Composable specification engine
    Spec,
    /// Enumerated per-combination methods (kept for contrast)
    Legacy,
}

/// Output format.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines
    Text,
    /// JSON Lines (one JSON object per line)
    Jsonl,
    /// Pretty-printed JSON array
    Json,
}

/// Log level argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    /// Trace level (most verbose)
    Trace,
    /// Debug level
    Debug,
    /// Info level (default)
    Info,
    /// Warning level
    Warn,
    /// Error level (least verbose)
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(tracing::Level::from(LogLevel::Debug), tracing::Level::DEBUG);
        assert_eq!(tracing::Level::from(LogLevel::Error), tracing::Level::ERROR);
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["wares"]).unwrap();

        assert!(cli.filters.is_empty());
        assert_eq!(cli.engine, Engine::Spec);
        assert_eq!(cli.max_items, 0);
    }

    #[test]
    fn test_repeated_filters() {
        let cli = Cli::try_parse_from(["wares", "-f", "color=green", "-f", "size=large"]).unwrap();

        assert_eq!(cli.filters, ["color=green", "size=large"]);
    }
}
