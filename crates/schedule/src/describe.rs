//! Human-readable summaries of schedule rules for the PM list view.

use upkeep_core::{IntervalUnit, MaintenanceScheduleRule};

use crate::ordinal::ordinal;

/// Summary shown when a rule is absent, inactive, or incomplete.
pub const NO_SCHEDULE: &str = "No schedule";

/// Describe a rule as a sentence, e.g. "Every 2 weeks",
/// "Every 1st Monday of month", "Every March 15th".
///
/// Pure formatting: no date arithmetic, never panics.
pub fn describe(rule: Option<&MaintenanceScheduleRule>) -> String {
    rule.filter(|r| r.is_active)
        .and_then(sentence)
        .unwrap_or_else(|| NO_SCHEDULE.to_string())
}

fn sentence(rule: &MaintenanceScheduleRule) -> Option<String> {
    match rule.interval_unit {
        IntervalUnit::Weekly => {
            let weeks = rule.interval_value.unwrap_or(1);
            let unit = if weeks == 1 { "week" } else { "weeks" };
            Some(format!("Every {} {}", weeks, unit))
        }
        IntervalUnit::Monthly => {
            let week = u64::try_from(rule.month_week?).ok()?;
            let weekday = rule.month_weekday?;
            Some(format!("Every {} {} of month", ordinal(week), weekday.name()))
        }
        IntervalUnit::Yearly => {
            let month = u8::try_from(rule.year_month?)
                .ok()
                .and_then(|m| chrono::Month::try_from(m).ok())?;
            let day = u64::try_from(rule.year_day?).ok()?;
            Some(format!("Every {} {}", month.name(), ordinal(day)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use upkeep_core::DayOfWeek;

    #[test]
    fn missing_rule() {
        assert_eq!(describe(None), "No schedule");
    }

    #[test]
    fn weekly_pluralization() {
        assert_eq!(describe(Some(&MaintenanceScheduleRule::weekly(1))), "Every 1 week");
        assert_eq!(describe(Some(&MaintenanceScheduleRule::weekly(2))), "Every 2 weeks");
        assert_eq!(describe(Some(&MaintenanceScheduleRule::weekly(0))), "Every 0 weeks");
    }

    #[test]
    fn weekly_without_interval_reads_as_one_week() {
        let rule = MaintenanceScheduleRule::new(IntervalUnit::Weekly);
        assert_eq!(describe(Some(&rule)), "Every 1 week");
    }

    #[test]
    fn monthly() {
        let rule = MaintenanceScheduleRule::monthly(1, DayOfWeek::Monday);
        assert_eq!(describe(Some(&rule)), "Every 1st Monday of month");

        let rule = MaintenanceScheduleRule::monthly(3, DayOfWeek::Saturday);
        assert_eq!(describe(Some(&rule)), "Every 3rd Saturday of month");
    }

    #[test]
    fn monthly_incomplete() {
        let mut rule = MaintenanceScheduleRule::monthly(2, DayOfWeek::Friday);
        rule.month_weekday = None;
        assert_eq!(describe(Some(&rule)), NO_SCHEDULE);

        let mut rule = MaintenanceScheduleRule::monthly(2, DayOfWeek::Friday);
        rule.month_week = None;
        assert_eq!(describe(Some(&rule)), NO_SCHEDULE);
    }

    #[test]
    fn yearly() {
        let rule = MaintenanceScheduleRule::yearly(3, 15);
        assert_eq!(describe(Some(&rule)), "Every March 15th");

        let rule = MaintenanceScheduleRule::yearly(12, 1);
        assert_eq!(describe(Some(&rule)), "Every December 1st");
    }

    #[test]
    fn yearly_out_of_range_month() {
        assert_eq!(describe(Some(&MaintenanceScheduleRule::yearly(13, 1))), NO_SCHEDULE);
        assert_eq!(describe(Some(&MaintenanceScheduleRule::yearly(0, 1))), NO_SCHEDULE);
    }

    #[test]
    fn negative_ordinals_have_no_summary() {
        assert_eq!(
            describe(Some(&MaintenanceScheduleRule::monthly(-1, DayOfWeek::Monday))),
            NO_SCHEDULE
        );
        assert_eq!(describe(Some(&MaintenanceScheduleRule::yearly(4, -2))), NO_SCHEDULE);
    }

    #[test]
    fn inactive_rule() {
        let rule = MaintenanceScheduleRule::weekly(2).inactive();
        assert_eq!(describe(Some(&rule)), NO_SCHEDULE);
    }

    #[test]
    fn irrelevant_fields_do_not_change_summary() {
        let mut rule = MaintenanceScheduleRule::yearly(3, 15);
        rule.interval_value = Some(9);
        rule.month_weekday = Some(DayOfWeek::Sunday);
        assert_eq!(describe(Some(&rule)), "Every March 15th");
    }
}
