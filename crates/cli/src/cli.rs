use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Preventive-maintenance schedule tool.
///
/// Reads a list of asset schedules (JSON or YAML, in the maintenance API
/// shape) and prints summaries, next due dates, validation findings, or the
/// assets due by a given date.
#[derive(Parser, Debug)]
#[command(name = "upkeep", version)]
pub struct CliArgs {
    /// Schedule file (overrides UPKEEP_SCHEDULES_FILE)
    #[arg(long, short)]
    pub file: Option<PathBuf>,

    /// strftime pattern for dates (overrides UPKEEP_DATE_FORMAT)
    #[arg(long)]
    pub date_format: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a human-readable summary of each schedule
    Describe,

    /// Print the next due date of each schedule
    Project {
        /// Anchor date for every row instead of each rule's last_run_at
        #[arg(long)]
        anchor: Option<NaiveDate>,
    },

    /// Validate every schedule; exits non-zero on errors
    Validate,

    /// List assets due on or before a date
    Due {
        /// Cutoff date (YYYY-MM-DD)
        #[arg(long)]
        on: NaiveDate,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn parses_due_with_date() {
        let args = CliArgs::try_parse_from([
            "upkeep", "-f", "s.yaml", "due", "--on", "2024-02-05", "--json",
        ])
        .unwrap();
        assert_eq!(args.file, Some(PathBuf::from("s.yaml")));
        match args.command {
            Command::Due { on, json } => {
                assert_eq!(on, NaiveDate::from_ymd_opt(2024, 2, 5).unwrap());
                assert!(json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn rejects_bad_date() {
        assert!(CliArgs::try_parse_from(["upkeep", "due", "--on", "next tuesday"]).is_err());
    }

    #[test]
    fn project_anchor_is_optional() {
        let args = CliArgs::try_parse_from(["upkeep", "project"]).unwrap();
        assert!(matches!(args.command, Command::Project { anchor: None }));
    }
}
