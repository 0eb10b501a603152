//! Finsolve CLI binary.
//!
//! Evaluates financial ratios and looks up instruments and indices, printing
//! JSON to stdout.

mod error;

use clap::{Args, Parser, Subcommand};
use error::CliError;
use finsolve::data::{DirectoryConfig, InstrumentDirectory, ProviderConfig};
use finsolve::ratios::{self, RatioCategory};
use serde_json::{Value, json};
use std::path::PathBuf;
use std::process;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "finsolve")]
#[command(about = "Finsolve: financial ratios and instrument lookups", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    source: SourceArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Where instrument and index data comes from.
#[derive(Debug, Args)]
struct SourceArgs {
    /// Alpha Vantage API key for symbols missing from the local table
    #[arg(long, env = "ALPHA_VANTAGE_API_KEY", global = true, hide_env_values = true)]
    api_key: Option<String>,

    /// Alpha Vantage base URL
    #[arg(long, env = "ALPHA_VANTAGE_BASE_URL", global = true)]
    base_url: Option<String>,

    /// Instrument table CSV (defaults to the bundled table)
    #[arg(long, env = "FINSOLVE_INSTRUMENTS", global = true)]
    instruments: Option<PathBuf>,

    /// Index table CSV (defaults to the bundled table)
    #[arg(long, env = "FINSOLVE_INDICES", global = true)]
    indices: Option<PathBuf>,

    /// Timeout for remote requests, in seconds
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,
}

impl SourceArgs {
    fn directory_config(&self) -> DirectoryConfig {
        let mut provider = ProviderConfig::default();
        if let Some(key) = &self.api_key {
            provider = provider.with_api_key(key.clone());
        }
        if let Some(url) = &self.base_url {
            provider = provider.with_base_url(url.clone());
        }
        if let Some(secs) = self.timeout_secs {
            provider = provider.with_timeout(Duration::from_secs(secs));
        }

        let mut config = DirectoryConfig::default().with_provider(provider);
        if let Some(path) = &self.instruments {
            config = config.with_instruments_path(path.clone());
        }
        if let Some(path) = &self.indices {
            config = config.with_indices_path(path.clone());
        }
        config
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Evaluate a ratio by name
    Ratio {
        /// Ratio name, e.g. price_to_earnings
        name: String,

        /// Inputs in the order listed by `finsolve ratios`
        #[arg(allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// List available ratios
    Ratios {
        /// Only list ratios in this category
        #[arg(long)]
        category: Option<String>,
    },

    /// Show the full record for a stock symbol
    Stock {
        /// Stock symbol
        symbol: String,
    },

    /// List all index names
    Indices,

    /// Show the region and description of an index
    Index {
        /// Index name, e.g. "NIFTY 50"
        name: String,
    },

    /// Check whether a stock symbol is known
    ValidSymbol {
        /// Stock symbol
        symbol: String,
    },

    /// Check whether an index name is known
    ValidIndex {
        /// Index name
        name: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(output) => print_json(&output),
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            print_json(&e.to_json());
            process::exit(1);
        }
    }
}

fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<Value, CliError> {
    match cli.command {
        Commands::Ratio { name, values } => {
            let value = ratios::evaluate(&name, &values)?;
            Ok(json!({ "ratio": name, "value": value }))
        }
        Commands::Ratios { category } => list_ratios(category.as_deref()),
        Commands::Stock { symbol } => {
            let record = directory(&cli.source)?.lookup_instrument(&symbol)?;
            Ok(serde_json::to_value(record)?)
        }
        Commands::Indices => {
            let names = directory(&cli.source)?.list_indices()?;
            Ok(json!(names))
        }
        Commands::Index { name } => {
            let description = directory(&cli.source)?.describe_index(&name)?;
            Ok(serde_json::to_value(description)?)
        }
        Commands::ValidSymbol { symbol } => {
            let valid = directory(&cli.source)?.is_valid_symbol(&symbol)?;
            Ok(json!({ "symbol": symbol, "valid": valid }))
        }
        Commands::ValidIndex { name } => {
            let valid = directory(&cli.source)?.is_valid_index(&name)?;
            Ok(json!({ "index": name, "valid": valid }))
        }
    }
}

fn directory(source: &SourceArgs) -> Result<InstrumentDirectory, CliError> {
    Ok(InstrumentDirectory::new(source.directory_config())?)
}

fn list_ratios(category: Option<&str>) -> Result<Value, CliError> {
    let infos = match category {
        Some(name) => {
            let category = RatioCategory::from_name(&name.to_lowercase())
                .ok_or_else(|| CliError::UnknownCategory(name.to_string()))?;
            ratios::ratios_by_category(category)
        }
        None => ratios::available_ratios(),
    };
    Ok(serde_json::to_value(infos)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args.iter().copied()).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_ratio_with_negative_input() {
        let cli = parse(&["finsolve", "ratio", "years_to_double", "-1"]);
        let err = run(cli).unwrap_err();
        assert_eq!(err.to_json()["kind"], "invalid_argument");
    }

    #[rstest]
    #[case(&["finsolve", "ratio", "price_to_earnings", "50", "10", "25"], 5.0)]
    #[case(&["finsolve", "ratio", "years_to_double", "8"], 9.0)]
    fn test_ratio_command(#[case] args: &[&str], #[case] expected: f64) {
        let output = run(parse(args)).unwrap();
        assert_eq!(output["value"], expected);
    }

    #[test]
    fn test_ratios_by_category() {
        let output = run(parse(&["finsolve", "ratios", "--category", "Dividend"])).unwrap();
        let names: Vec<&str> = output
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|r| r["name"].as_str())
            .collect();
        assert_eq!(names, ["dividend_yield_percentage", "dividend_yield"]);
    }

    #[test]
    fn test_unknown_category() {
        let err = run(parse(&["finsolve", "ratios", "--category", "momentum"])).unwrap_err();
        assert!(matches!(err, CliError::UnknownCategory(_)));
    }

    #[test]
    fn test_global_source_flags() {
        let cli = parse(&[
            "finsolve",
            "stock",
            "TCS",
            "--api-key",
            "demo",
            "--timeout-secs",
            "5",
        ]);
        let config = cli.source.directory_config();
        assert!(config.provider.has_api_key());
        assert_eq!(config.provider.timeout, Some(Duration::from_secs(5)));
        assert!(config.instruments_path.is_none());
    }

    #[test]
    fn test_local_stock_lookup() {
        let output = run(parse(&["finsolve", "stock", "TCS"])).unwrap();
        assert_eq!(output["symbol"], "TCS");
        assert_eq!(output["source"], "local");
    }

    #[test]
    fn test_valid_index() {
        let output = run(parse(&["finsolve", "valid-index", "NIFTY 50"])).unwrap();
        assert_eq!(output["valid"], true);
    }
}
