//! Plain-text rendering of schedule listings.
//!
//! Every function returns the full text so output can be asserted on.

use std::fmt::Write as _;

use chrono::NaiveDate;

use upkeep_core::AssetSchedule;
use upkeep_schedule::{
    describe, project_date, project_from_last_run, validate_rule_with, DueItem, Projection,
    ValidationOptions,
};

/// `asset_id<TAB>summary` per row.
pub fn describe_lines(schedules: &[AssetSchedule]) -> String {
    let mut out = String::new();
    for row in schedules {
        let _ = writeln!(out, "{}\t{}", row.asset_id, describe(row.schedule.as_ref()));
    }
    out
}

/// `asset_id<TAB>next due` per row, anchored on each rule's last run unless
/// `anchor` overrides it.
pub fn project_lines(
    schedules: &[AssetSchedule],
    anchor: Option<NaiveDate>,
    date_format: &str,
) -> String {
    let mut out = String::new();
    for row in schedules {
        let next = match anchor {
            Some(anchor) => project_date(row.schedule.as_ref(), Some(anchor)),
            None => project_from_last_run(row.schedule.as_ref()),
        };
        let _ = writeln!(out, "{}\t{}", row.asset_id, next.render(date_format));
    }
    out
}

/// Validation findings per asset and the total number of errors.
pub fn validation_report(
    schedules: &[AssetSchedule],
    options: &ValidationOptions,
) -> (String, usize) {
    let mut out = String::new();
    let mut error_count = 0;

    for row in schedules {
        let Some(rule) = row.schedule.as_ref() else {
            let _ = writeln!(out, "{}\tok\tno schedule", row.asset_id);
            continue;
        };
        let result = validate_rule_with(rule, options);
        error_count += result.errors.len();

        if result.errors.is_empty() && result.warnings.is_empty() {
            let _ = writeln!(out, "{}\tok", row.asset_id);
            continue;
        }
        for error in &result.errors {
            let _ = write!(out, "{}\terror\t{}: {}", row.asset_id, error.path, error.message);
            if let Some(suggestion) = &error.suggestion {
                let _ = write!(out, " ({})", suggestion);
            }
            out.push('\n');
        }
        for warning in &result.warnings {
            let _ = writeln!(
                out,
                "{}\twarning\t{}: {}",
                row.asset_id, warning.path, warning.message
            );
        }
    }

    (out, error_count)
}

/// `due date<TAB>asset_id<TAB>summary` per due item.
pub fn due_lines(due: &[DueItem], date_format: &str) -> String {
    let mut out = String::new();
    for item in due {
        let date = Projection::Due(item.due).render(date_format);
        let _ = writeln!(out, "{}\t{}\t{}", date, item.asset_id, item.summary);
    }
    out
}
