mod cli;
mod report;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use upkeep_core::config::{load_dotenv, Config};
use upkeep_schedule::{load_schedules, MaintenanceBoard, ValidationOptions};

use crate::cli::{CliArgs, Command};

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    load_dotenv();
    let args = CliArgs::parse();

    // Flags override env config
    let mut config = Config::from_env();
    if let Some(file) = args.file {
        config.schedules_file = file;
    }
    if let Some(date_format) = args.date_format {
        config.date_format = date_format;
    }
    config.log_summary();

    let schedules = load_schedules(&config.schedules_file).with_context(|| {
        format!(
            "failed to load schedules from '{}'",
            config.schedules_file.display()
        )
    })?;

    match args.command {
        Command::Describe => print!("{}", report::describe_lines(&schedules)),
        Command::Project { anchor } => print!(
            "{}",
            report::project_lines(&schedules, anchor, &config.date_format)
        ),
        Command::Validate => {
            let options = ValidationOptions::from(&config);
            let (text, error_count) = report::validation_report(&schedules, &options);
            print!("{}", text);
            if error_count > 0 {
                info!(errors = error_count, "validation failed");
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Due { on, json } => {
            let board = MaintenanceBoard::from_schedules(&schedules);
            let due = board.due_on_or_before(on);
            if json {
                let body = serde_json::to_string_pretty(&due)
                    .context("failed to serialize due list")?;
                println!("{}", body);
            } else {
                print!("{}", report::due_lines(&due, &config.date_format));
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
