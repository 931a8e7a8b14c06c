//! Per-unit field checks: required fields present and within range.

use upkeep_core::{IntervalUnit, MaintenanceScheduleRule};

use super::{ValidationOptions, ValidationResult};

pub(super) fn validate_unit_fields(
    rule: &MaintenanceScheduleRule,
    options: &ValidationOptions,
    result: &mut ValidationResult,
) {
    match rule.interval_unit {
        IntervalUnit::Weekly => validate_weekly(rule, options, result),
        IntervalUnit::Monthly => validate_monthly(rule, result),
        IntervalUnit::Yearly => validate_yearly(rule, result),
    }
}

fn validate_weekly(
    rule: &MaintenanceScheduleRule,
    options: &ValidationOptions,
    result: &mut ValidationResult,
) {
    match rule.interval_value {
        None => result.warn("interval_value", "No interval set; defaults to every 1 week"),
        Some(v) if v < 1 => result.error(
            "interval_value",
            format!("Interval must be at least 1 week, got {}", v),
        ),
        Some(v) if v > options.warn_interval_weeks => result.warn(
            "interval_value",
            format!(
                "Interval of {} weeks is longer than the usual {} weeks",
                v, options.warn_interval_weeks
            ),
        ),
        Some(_) => {}
    }
}

fn validate_monthly(rule: &MaintenanceScheduleRule, result: &mut ValidationResult) {
    match rule.month_week {
        None => result.error("month_week", "Monthly schedules need a week of the month (1-4)"),
        Some(5) => result.error_with_suggestion(
            "month_week",
            "Week 5 does not exist in every month",
            "Use 4 for the last full week",
        ),
        Some(w) if !(1..=4).contains(&w) => result.error(
            "month_week",
            format!("Week of month must be between 1 and 4, got {}", w),
        ),
        Some(_) => {}
    }

    if rule.month_weekday.is_none() {
        result.error("month_weekday", "Monthly schedules need a weekday");
    }
}

fn validate_yearly(rule: &MaintenanceScheduleRule, result: &mut ValidationResult) {
    let month = match rule.year_month {
        None => {
            result.error("year_month", "Yearly schedules need a month (1-12)");
            None
        }
        Some(m) => match u8::try_from(m).ok().and_then(|m| chrono::Month::try_from(m).ok()) {
            Some(month) => Some(month),
            None => {
                result.error(
                    "year_month",
                    format!("Month must be between 1 and 12, got {}", m),
                );
                None
            }
        },
    };

    let Some(day) = rule.year_day else {
        result.error("year_day", "Yearly schedules need a day of the month");
        return;
    };

    // Without a valid month only the absolute range can be checked.
    let max = month.map_or(31, max_day);
    if !(1..=max).contains(&day) {
        let message = format!("Day must be between 1 and {}, got {}", max, day);
        match month {
            Some(month) if day > max => result.error_with_suggestion(
                "year_day",
                message,
                format!("Use {} for the last day of {}", max, month.name()),
            ),
            _ => result.error("year_day", message),
        }
        return;
    }

    if month == Some(chrono::Month::February) && day == 29 {
        result.warn(
            "year_day",
            "February 29th falls on March 1st in non-leap years",
        );
    }
}

/// Longest length of `month` in any year.
fn max_day(month: chrono::Month) -> i64 {
    use chrono::Month::*;
    match month {
        February => 29,
        April | June | September | November => 30,
        January | March | May | July | August | October | December => 31,
    }
}
