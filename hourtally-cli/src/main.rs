use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use hourtally_core::{HeaderRow, Tally, TallyConfig, TallyError};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod formatter;

/// Configuration file picked up from the working directory
const DEFAULT_CONFIG_FILE: &str = "hourtally.toml";

#[derive(Parser)]
#[command(name = "hourtally")]
#[command(about = "Total free-text work hours (\"1h 30min\") in Excel/ODS timesheets", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the Excel/ODS timesheet (falls back to `file` in the config)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Column holding the durations
    #[arg(short = 'C', long, value_name = "NAME")]
    column: Option<String>,

    /// Row whose values name the columns (0 is the first row)
    #[arg(short = 'r', long, value_name = "ROW", value_parser = parse_header_row)]
    header_row: Option<HeaderRow>,

    /// Only total this sheet
    #[arg(short, long, value_name = "SHEET")]
    sheet: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "human")]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// The bare report, one "<sheet> | <hours>" line per sheet
    Plain,
    /// JSON output for scripting
    Json,
}

fn parse_header_row(s: &str) -> std::result::Result<HeaderRow, String> {
    s.parse::<HeaderRow>().map_err(|e| e.to_string())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the config file, then apply command-line overrides on top
fn load_config(cli: &Cli) -> Result<TallyConfig> {
    let mut config = if let Some(config_path) = &cli.config {
        TallyConfig::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        // Try to load default config from current directory if it exists
        let default_config_path = PathBuf::from(DEFAULT_CONFIG_FILE);
        if default_config_path.exists() {
            TallyConfig::from_file(&default_config_path).with_context(|| {
                format!(
                    "Failed to load config from {}",
                    default_config_path.display()
                )
            })?
        } else {
            debug!("no config file, using defaults");
            TallyConfig::default()
        }
    };

    if let Some(column) = &cli.column {
        config.global.column = Some(column.clone());
    }
    if let Some(row) = cli.header_row {
        config.set_header_row(row);
    }
    if let Some(sheet) = &cli.sheet {
        config.global.sheet = Some(sheet.clone());
    }
    if let Some(file) = &cli.file {
        config.global.file = Some(file.clone());
    }

    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli)?;
    let file = config.global.file.clone().ok_or(TallyError::MissingInput)?;

    let tally = Tally::with_config(config);
    let totals = tally
        .tally_file(&file)
        .with_context(|| format!("Failed to total hours in {}", file.display()))?;

    match cli.format {
        OutputFormat::Human => formatter::print_human(&file, &totals),
        OutputFormat::Plain => formatter::print_plain(&totals),
        OutputFormat::Json => formatter::print_json(&file, &totals)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_cli_overrides_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "file = \"a.ods\"\ncolumn = \"duration\"\nheader_row = 2").unwrap();
        let config_path = file.path().to_str().unwrap();

        let cli = Cli::parse_from([
            "hourtally",
            "b.ods",
            "--config",
            config_path,
            "-C",
            "time",
            "-r",
            "1",
            "-s",
            "May",
        ]);
        let config = load_config(&cli).unwrap();

        assert_eq!(config.global.file, Some(PathBuf::from("b.ods")));
        assert_eq!(config.column_for("May"), "time");
        assert_eq!(config.header_row_for("May").unwrap(), Some(HeaderRow::new(1)));
        assert_eq!(config.global.sheet.as_deref(), Some("May"));
    }

    #[test]
    fn test_invalid_header_row_rejected() {
        let result = Cli::try_parse_from(["hourtally", "a.ods", "--header-row", "first"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbosity_count() {
        let cli = Cli::parse_from(["hourtally", "-vv", "--format", "json"]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.file.is_none());
        assert!(matches!(cli.format, OutputFormat::Json));
    }
}
