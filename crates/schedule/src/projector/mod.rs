//! Next-occurrence projection for maintenance schedules.
//!
//! Given a rule and the anchor date (when the asset was last maintained),
//! compute the next due date. The list view and any backend job must agree
//! on these dates exactly, so all calendar arithmetic lives here and nothing
//! reads the wall clock.
//!
//! Overflow is carried through, not clamped: a 5th weekday that does not
//! exist lands in the following month, and a yearly day past the end of its
//! month (February 30) rolls forward the same way.


use std::fmt::{self, Write as _};

use chrono::{DateTime, Datelike, Months, NaiveDate, Utc, Weekday};
use serde::Serialize;
use tracing::debug;

use upkeep_core::config::DEFAULT_DATE_FORMAT;
use upkeep_core::{IntervalUnit, MaintenanceScheduleRule};

/// Rendering of [`Projection::Unprojectable`] in list views.
pub const UNPROJECTABLE_MARK: &str = "-";

/// Outcome of a projection: a calendar date or an explicit sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Projection {
    Due(NaiveDate),
    Unprojectable,
}

impl Projection {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Projection::Due(date) => Some(*date),
            Projection::Unprojectable => None,
        }
    }

    pub fn is_due(&self) -> bool {
        matches!(self, Projection::Due(_))
    }

    /// Render with a `strftime` pattern; an invalid pattern falls back to ISO dates.
    pub fn render(&self, pattern: &str) -> String {
        match self {
            Projection::Due(date) => {
                let mut out = String::new();
                if write!(out, "{}", date.format(pattern)).is_err() {
                    debug!(pattern = %pattern, "invalid date format, using ISO");
                    return date.to_string();
                }
                out
            }
            Projection::Unprojectable => UNPROJECTABLE_MARK.to_string(),
        }
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_DATE_FORMAT))
    }
}

impl From<Option<NaiveDate>> for Projection {
    fn from(date: Option<NaiveDate>) -> Self {
        date.map_or(Projection::Unprojectable, Projection::Due)
    }
}

/// Project the next due date from the last-maintained timestamp.
///
/// The anchor is the UTC calendar date of `last_maintained_at`.
pub fn project(
    rule: Option<&MaintenanceScheduleRule>,
    last_maintained_at: Option<DateTime<Utc>>,
) -> Projection {
    project_date(rule, last_maintained_at.map(|at| at.date_naive()))
}

/// Project using the rule's own `last_run_at` as the anchor.
pub fn project_from_last_run(rule: Option<&MaintenanceScheduleRule>) -> Projection {
    project(rule, rule.and_then(|r| r.last_run_at))
}

/// Project the next due date from an anchor calendar date.
///
/// Returns [`Projection::Unprojectable`] when the rule or anchor is missing,
/// the rule is inactive, the unit's required fields are absent, or the
/// result falls outside the representable calendar.
pub fn project_date(
    rule: Option<&MaintenanceScheduleRule>,
    anchor: Option<NaiveDate>,
) -> Projection {
    let (Some(rule), Some(anchor)) = (rule, anchor) else {
        return Projection::Unprojectable;
    };
    if !rule.is_active {
        return Projection::Unprojectable;
    }

    let next = match rule.interval_unit {
        IntervalUnit::Weekly => next_weekly(anchor, rule.interval_value.unwrap_or(1)),
        IntervalUnit::Monthly => match (rule.month_week, rule.month_weekday) {
            (Some(week), Some(weekday)) => next_monthly(anchor, week, weekday.into()),
            _ => None,
        },
        IntervalUnit::Yearly => match (rule.year_month, rule.year_day) {
            (Some(month), Some(day)) => next_yearly(anchor, month, day),
            _ => None,
        },
    };

    if next.is_none() {
        debug!(unit = %rule.interval_unit, anchor = %anchor, "schedule not projectable");
    }
    next.into()
}

fn next_weekly(anchor: NaiveDate, weeks: i64) -> Option<NaiveDate> {
    add_days(anchor, weeks.checked_mul(7)?)
}

/// The `week`-th `weekday` of the month after the anchor's month.
fn next_monthly(anchor: NaiveDate, week: i64, weekday: Weekday) -> Option<NaiveDate> {
    let first_of_month = anchor.with_day(1)?.checked_add_months(Months::new(1))?;
    let first_match = first_of_month
        .iter_days()
        .take(7)
        .find(|day| day.weekday() == weekday)?;
    add_days(first_match, week.checked_sub(1)?.checked_mul(7)?)
}

/// `month`/`day` in the anchor's year, or the next year once the anchor's
/// month has reached `month`.
fn next_yearly(anchor: NaiveDate, month: i64, day: i64) -> Option<NaiveDate> {
    let year = i64::from(anchor.year());
    let target_year = if i64::from(anchor.month()) >= month {
        year + 1
    } else {
        year
    };
    normalized_date(target_year, month, day)
}

/// Build a date letting out-of-range months and days roll over
/// (month 13 is January of the next year, February 30 is early March).
fn normalized_date(year: i64, month: i64, day: i64) -> Option<NaiveDate> {
    let months = year.checked_mul(12)?.checked_add(month.checked_sub(1)?)?;
    let year = i32::try_from(months.div_euclid(12)).ok()?;
    let month = u32::try_from(months.rem_euclid(12) + 1).ok()?;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    add_days(first, day.checked_sub(1)?)
}

fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(chrono::Duration::try_days(days)?)
}
