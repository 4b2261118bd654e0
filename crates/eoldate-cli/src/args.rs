use crate::types::{ColorChoice, LogLevel};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "eol-date")]
#[command(about = "Show release cycles and end-of-life dates for a product", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Product name as listed on endoflife.date (e.g. python, nodejs)
    pub product: String,

    /// Include cycles that have reached end of life
    #[arg(short, long)]
    pub all: bool,

    /// Output format: table, markdown, csv, html
    #[arg(short, long)]
    pub format: Option<String>,

    /// Read cycles from a local JSON file instead of the catalog
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Configuration file (default: <config dir>/eol-date/config.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// When to color table output [default: from config, else auto]
    #[arg(long, value_name = "WHEN")]
    pub color: Option<ColorChoice>,

    /// Log verbosity on stderr (RUST_LOG takes precedence)
    #[arg(long, default_value = "warn")]
    pub log_level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from(["eol-date", "python", "-a", "-f", "csv"]).unwrap();
        assert_eq!(cli.product, "python");
        assert!(cli.all);
        assert_eq!(cli.format.as_deref(), Some("csv"));
        assert_eq!(cli.log_level, LogLevel::Warn);
        assert_eq!(cli.color, None);
    }

    #[test]
    fn test_product_is_required() {
        assert!(Cli::try_parse_from(["eol-date"]).is_err());
    }
}
