use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Recurrence unit of a maintenance schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalUnit {
    Weekly,
    Monthly,
    Yearly,
}

impl std::fmt::Display for IntervalUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntervalUnit::Weekly => write!(f, "weekly"),
            IntervalUnit::Monthly => write!(f, "monthly"),
            IntervalUnit::Yearly => write!(f, "yearly"),
        }
    }
}

/// Day of the week as the maintenance API spells it (`"monday"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    /// Capitalized English name, e.g. `"Monday"`.
    pub fn name(&self) -> &'static str {
        match self {
            DayOfWeek::Sunday => "Sunday",
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
        }
    }
}

impl From<DayOfWeek> for chrono::Weekday {
    fn from(day: DayOfWeek) -> Self {
        match day {
            DayOfWeek::Sunday => chrono::Weekday::Sun,
            DayOfWeek::Monday => chrono::Weekday::Mon,
            DayOfWeek::Tuesday => chrono::Weekday::Tue,
            DayOfWeek::Wednesday => chrono::Weekday::Wed,
            DayOfWeek::Thursday => chrono::Weekday::Thu,
            DayOfWeek::Friday => chrono::Weekday::Fri,
            DayOfWeek::Saturday => chrono::Weekday::Sat,
        }
    }
}

impl From<chrono::Weekday> for DayOfWeek {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Sun => DayOfWeek::Sunday,
            chrono::Weekday::Mon => DayOfWeek::Monday,
            chrono::Weekday::Tue => DayOfWeek::Tuesday,
            chrono::Weekday::Wed => DayOfWeek::Wednesday,
            chrono::Weekday::Thu => DayOfWeek::Thursday,
            chrono::Weekday::Fri => DayOfWeek::Friday,
            chrono::Weekday::Sat => DayOfWeek::Saturday,
        }
    }
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Recurrence pattern for one asset's preventive maintenance.
///
/// Field names mirror the maintenance API payload. Only the fields that belong
/// to `interval_unit` are meaningful; the others are carried but ignored.
/// Numeric fields are signed so that out-of-range values still deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceScheduleRule {
    pub interval_unit: IntervalUnit,
    /// Weeks between occurrences (weekly only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_value: Option<i64>,
    /// Ordinal week of the month, 1-4 (monthly only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month_week: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month_weekday: Option<DayOfWeek>,
    /// 1-based month (yearly only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_month: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_day: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_run_at: Option<DateTime<Utc>>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl MaintenanceScheduleRule {
    /// Empty rule of the given unit; fill the unit's fields afterwards.
    pub fn new(interval_unit: IntervalUnit) -> Self {
        Self {
            interval_unit,
            interval_value: None,
            month_week: None,
            month_weekday: None,
            year_month: None,
            year_day: None,
            last_run_at: None,
            is_active: true,
        }
    }

    pub fn weekly(interval_value: i64) -> Self {
        Self {
            interval_value: Some(interval_value),
            ..Self::new(IntervalUnit::Weekly)
        }
    }

    pub fn monthly(month_week: i64, month_weekday: DayOfWeek) -> Self {
        Self {
            month_week: Some(month_week),
            month_weekday: Some(month_weekday),
            ..Self::new(IntervalUnit::Monthly)
        }
    }

    pub fn yearly(year_month: i64, year_day: i64) -> Self {
        Self {
            year_month: Some(year_month),
            year_day: Some(year_day),
            ..Self::new(IntervalUnit::Yearly)
        }
    }

    pub fn with_last_run(mut self, at: DateTime<Utc>) -> Self {
        self.last_run_at = Some(at);
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Whether every field the unit requires is present.
    ///
    /// Weekly rules are always complete: a missing interval means one week.
    pub fn is_complete(&self) -> bool {
        match self.interval_unit {
            IntervalUnit::Weekly => true,
            IntervalUnit::Monthly => self.month_week.is_some() && self.month_weekday.is_some(),
            IntervalUnit::Yearly => self.year_month.is_some() && self.year_day.is_some(),
        }
    }

    /// Names of populated fields that do not belong to `interval_unit`.
    pub fn irrelevant_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.interval_unit != IntervalUnit::Weekly && self.interval_value.is_some() {
            fields.push("interval_value");
        }
        if self.interval_unit != IntervalUnit::Monthly {
            if self.month_week.is_some() {
                fields.push("month_week");
            }
            if self.month_weekday.is_some() {
                fields.push("month_weekday");
            }
        }
        if self.interval_unit != IntervalUnit::Yearly {
            if self.year_month.is_some() {
                fields.push("year_month");
            }
            if self.year_day.is_some() {
                fields.push("year_day");
            }
        }
        fields
    }
}

/// One row of the preventive-maintenance list: an asset and its optional rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetSchedule {
    pub asset_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_name: Option<String>,
    #[serde(default)]
    pub schedule: Option<MaintenanceScheduleRule>,
}
