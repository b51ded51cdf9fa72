//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::data::aggregate::DEFAULT_TOP_K;
use crate::data::cost::DEFAULT_CURRENCY_TOKEN;
use crate::data::loader::LoadOptions;

/// Dataset file opened when none is given.
pub const DEFAULT_DATA_FILE: &str = "programs_info.csv";

/// Compare the cost of university programs.
///
/// Filters by university, faculty, program type and keyword; shows the
/// average cost per university, the cheapest and most expensive programs
/// and the full table.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Dataset to load at startup (.csv, .tsv, .json or .parquet)
    #[arg(value_name = "DATA", env = "UNI_COST_DATA")]
    pub data: Option<PathBuf>,

    /// Number of programs in the cheapest / most expensive lists
    #[arg(long, default_value_t = DEFAULT_TOP_K, value_parser = parse_top_k, value_name = "N")]
    pub top_k: usize,

    /// Currency word removed from costs before parsing
    #[arg(long, default_value = DEFAULT_CURRENCY_TOKEN, value_name = "TEXT")]
    pub currency_token: String,
}

fn parse_top_k(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(k) => Ok(k),
        Err(e) => Err(e.to_string()),
    }
}

/// Settings the session runs with.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Dataset to open at startup.
    pub data_path: PathBuf,
    /// Whether `data_path` was chosen by the user rather than defaulted.
    pub data_path_explicit: bool,
    pub top_k: usize,
    pub load: LoadOptions,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            data_path_explicit: false,
            top_k: DEFAULT_TOP_K,
            load: LoadOptions::default(),
        }
    }
}

impl From<Cli> for DashboardConfig {
    fn from(cli: Cli) -> Self {
        let data_path_explicit = cli.data.is_some();
        Self {
            data_path: cli.data.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE)),
            data_path_explicit,
            top_k: cli.top_k,
            load: LoadOptions {
                currency_token: cli.currency_token,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["uni-cost-dashboard"]).unwrap();
        assert_eq!(cli.top_k, 5);
        assert_eq!(cli.currency_token, "บาท");

        let config = DashboardConfig::from(cli);
        // UNI_COST_DATA may be set in the environment running the tests
        if !config.data_path_explicit {
            assert_eq!(config.data_path, PathBuf::from("programs_info.csv"));
        }
    }

    #[test]
    fn explicit_arguments() {
        let cli = Cli::try_parse_from([
            "uni-cost-dashboard",
            "data/programs.parquet",
            "--top-k",
            "10",
            "--currency-token",
            "THB",
        ])
        .unwrap();
        let config = DashboardConfig::from(cli);
        assert!(config.data_path_explicit);
        assert_eq!(config.data_path, PathBuf::from("data/programs.parquet"));
        assert_eq!(config.top_k, 10);
        assert_eq!(config.load.currency_token, "THB");
    }

    #[test]
    fn zero_top_k_is_rejected() {
        assert!(Cli::try_parse_from(["uni-cost-dashboard", "--top-k", "0"]).is_err());
    }
}
