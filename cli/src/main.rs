mod config;
mod logging;
mod report;
mod tui;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use metas_core::{compute_goal_plan, CalculationResult};
use tracing::{debug, info};

use crate::config::{Overrides, Settings};

#[derive(Parser)]
#[command(name = "metas")]
#[command(about = "Break a monthly sales goal down by business days", long_about = None)]
struct Cli {
    /// Config file with default inputs (default: ~/.metas/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    inputs: InputArgs,

    /// Print the result as JSON instead of tables
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the summary and the month-by-month breakdown
    Calc {
        #[command(flatten)]
        inputs: InputArgs,
        /// Print the result as JSON instead of tables
        #[arg(long)]
        json: bool,
    },
    /// Browse the breakdown in the terminal UI
    Tui {
        #[command(flatten)]
        inputs: InputArgs,
    },
}

/// Raw form values. Anything left out comes from the config file.
#[derive(Args, Clone, Default)]
struct InputArgs {
    /// Monthly revenue goal (R$)
    #[arg(long)]
    goal: Option<String>,
    /// Value of a single sale (R$)
    #[arg(long)]
    sale_value: Option<String>,
    /// Minutes spent per sale
    #[arg(long)]
    time_per_sale: Option<String>,
    /// Daily adjustment in percent, may be negative
    #[arg(long, allow_hyphen_values = true)]
    adjustment: Option<String>,
    /// First day of the period (YYYY-MM-DD)
    #[arg(long)]
    start: Option<String>,
    /// Last day of the period (YYYY-MM-DD)
    #[arg(long)]
    end: Option<String>,
}

impl From<InputArgs> for Overrides {
    fn from(args: InputArgs) -> Self {
        Overrides {
            goal: args.goal,
            sale_value: args.sale_value,
            time_per_sale: args.time_per_sale,
            adjustment: args.adjustment,
            start_date: args.start,
            end_date: args.end,
        }
    }
}

fn calculate(settings: &Settings, inputs: InputArgs) -> Option<CalculationResult> {
    let input = settings.to_input(inputs.into());
    debug!(?input, "computing goal plan");

    match compute_goal_plan(&input) {
        Ok(result) => {
            info!(months = result.month_count(), total_goal = result.total_goal, "goal plan ready");
            Some(result)
        }
        Err(err) => {
            eprintln!("Erro: {}", err);
            None
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let settings = Settings::load(cli.config.as_deref())?;

    let (inputs, json, interactive) = match cli.command {
        Some(Commands::Calc { inputs, json }) => (inputs, json, false),
        Some(Commands::Tui { inputs }) => (inputs, false, true),
        None => (cli.inputs, cli.json, false),
    };

    let Some(result) = calculate(&settings, inputs) else {
        return Ok(ExitCode::FAILURE);
    };

    if interactive {
        tui::run(result)?;
    } else if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", report::render(&result));
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    logging::init();
    run(Cli::parse())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_calc_flags() {
        let cli = Cli::parse_from([
            "metas", "calc", "--goal", "1000", "--adjustment", "-10", "--start", "2025-01-01", "--json",
        ]);
        match cli.command {
            Some(Commands::Calc { inputs, json }) => {
                assert!(json);
                assert_eq!(inputs.goal.as_deref(), Some("1000"));
                assert_eq!(inputs.adjustment.as_deref(), Some("-10"));
                assert_eq!(inputs.start.as_deref(), Some("2025-01-01"));
                assert!(inputs.end.is_none());
            }
            _ => panic!("expected calc"),
        }
    }

    #[test]
    fn test_cli_json_without_subcommand() {
        let cli = Cli::try_parse_from(["metas", "--json", "--goal", "5000"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.json);
        assert_eq!(cli.inputs.goal.as_deref(), Some("5000"));

        let plain = Cli::try_parse_from(["metas"]).unwrap();
        assert!(!plain.json);
    }

    #[test]
    fn test_calculate_reports_validation_failure() {
        let settings = Settings::default();
        let inputs = InputArgs {
            start: Some("2026-08-01".to_string()),
            ..Default::default()
        };
        assert!(calculate(&settings, inputs).is_none());

        let ok = calculate(&settings, InputArgs::default()).unwrap();
        assert_eq!(ok.month_count(), 9);
    }
}
