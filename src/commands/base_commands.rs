use std::io;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use thiserror::Error;

use crate::domain::package::PackageTier;
use crate::services::inputs_yaml::{InputsYamlError, parse_amount};
use crate::services::pricing_chart::SnapshotError;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    /// Log filter, either a level (`info`) or a directive (`studio_pricing=debug`)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default studio inputs to a YAML file
    Init {
        /// Output YAML file
        #[arg(short, long)]
        output: String,
    },
    /// Compute the ideal price per session and package prices
    Calculate {
        /// Pricing inputs YAML (defaults to the studio template)
        #[arg(short, long)]
        input: Option<String>,
        /// Optional machine-readable report file
        #[arg(short, long)]
        output: Option<String>,
        /// Format of the report file
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Yaml)]
        format: ReportFormat,
    },
    /// Simulate revenue and profit with your own package prices
    Simulate {
        /// Pricing inputs YAML (defaults to the studio template)
        #[arg(short, long)]
        input: Option<String>,
        #[command(flatten)]
        prices: PackagePriceArgs,
        /// Optional machine-readable report file
        #[arg(short, long)]
        output: Option<String>,
        /// Format of the report file
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Yaml)]
        format: ReportFormat,
    },
    /// Render the current pricing as a PNG snapshot
    Export {
        /// Pricing inputs YAML (defaults to the studio template)
        #[arg(short, long)]
        input: Option<String>,
        #[command(flatten)]
        prices: PackagePriceArgs,
        /// Output PNG file
        #[arg(short, long)]
        output: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Yaml,
    Json,
}

/// Package prices typed by the user. Tiers left out follow the ideal price.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct PackagePriceArgs {
    /// Simulated price of the 1x/week package
    #[arg(long = "one-x", value_parser = parse_package_price)]
    pub one_x: Option<f64>,
    /// Simulated price of the 2x/week package
    #[arg(long = "two-x", value_parser = parse_package_price)]
    pub two_x: Option<f64>,
    /// Simulated price of the 3x/week package
    #[arg(long = "three-x", value_parser = parse_package_price)]
    pub three_x: Option<f64>,
}

impl PackagePriceArgs {
    pub fn overrides(&self) -> Vec<(PackageTier, f64)> {
        [
            (PackageTier::OncePerWeek, self.one_x),
            (PackageTier::TwicePerWeek, self.two_x),
            (PackageTier::ThricePerWeek, self.three_x),
        ]
        .into_iter()
        .filter_map(|(tier, price)| price.map(|price| (tier, price)))
        .collect()
    }
}

fn parse_package_price(value: &str) -> Result<f64, String> {
    let price = parse_amount(value);
    if price < 0.0 {
        return Err(format!("package price must not be negative (got {price})"));
    }
    Ok(price)
}

#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Inputs(#[from] InputsYamlError),
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
    #[error("failed to serialize report as yaml: {0}")]
    SerializeYaml(#[from] serde_yaml::Error),
    #[error("failed to serialize report as json: {0}")]
    SerializeJson(#[from] serde_json::Error),
    #[error("failed to write {path}: {source}")]
    WriteOutput { path: String, source: io::Error },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculate_defaults_to_yaml_without_input() {
        let args = CliArgs::parse_from(["studio-pricing", "calculate"]);

        if let Commands::Calculate {
            input,
            output,
            format,
        } = args.command
        {
            assert_eq!(input, None);
            assert_eq!(output, None);
            assert_eq!(format, ReportFormat::Yaml);
        } else {
            panic!("expected calculate command");
        }
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn simulate_parses_package_prices() {
        let args = CliArgs::parse_from([
            "studio-pricing",
            "simulate",
            "--one-x",
            "180",
            "--three-x",
            "abc",
        ]);

        if let Commands::Simulate { prices, .. } = args.command {
            assert_eq!(prices.one_x, Some(180.0));
            assert_eq!(prices.two_x, None);
            assert_eq!(prices.three_x, Some(0.0));
            assert_eq!(
                prices.overrides(),
                vec![
                    (PackageTier::OncePerWeek, 180.0),
                    (PackageTier::ThricePerWeek, 0.0)
                ]
            );
        } else {
            panic!("expected simulate command");
        }
    }

    #[test]
    fn negative_package_price_is_rejected() {
        let result = CliArgs::try_parse_from(["studio-pricing", "simulate", "--two-x=-5"]);
        assert!(result.is_err());
    }

    #[test]
    fn log_level_is_global() {
        let args = CliArgs::parse_from(["studio-pricing", "calculate", "--log-level", "debug"]);
        assert_eq!(args.log_level, "debug");
    }
}
