//! End-to-end checks of describe/project against the documented examples.

use chrono::{NaiveDate, TimeZone, Utc};
use upkeep_core::{DayOfWeek, IntervalUnit, MaintenanceScheduleRule};
use upkeep_schedule::{describe, ordinal, project, project_date, Projection, NO_SCHEDULE};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn rule_from_json(json: &str) -> MaintenanceScheduleRule {
    serde_json::from_str(json).unwrap()
}

#[test]
fn ordinal_table() {
    let got: Vec<String> = [1, 2, 3, 4, 11, 12, 13, 21, 22, 23, 101, 111]
        .into_iter()
        .map(ordinal)
        .collect();
    assert_eq!(
        got,
        vec!["1st", "2nd", "3rd", "4th", "11th", "12th", "13th", "21st", "22nd", "23rd", "101st", "111th"]
    );
}

#[test]
fn describe_examples() {
    assert_eq!(describe(None), NO_SCHEDULE);
    assert_eq!(
        describe(Some(&rule_from_json(r#"{"interval_unit": "weekly", "interval_value": 1}"#))),
        "Every 1 week"
    );
    assert_eq!(
        describe(Some(&rule_from_json(r#"{"interval_unit": "weekly", "interval_value": 2}"#))),
        "Every 2 weeks"
    );
    assert_eq!(
        describe(Some(&rule_from_json(
            r#"{"interval_unit": "monthly", "month_week": 1, "month_weekday": "monday"}"#
        ))),
        "Every 1st Monday of month"
    );
    assert_eq!(
        describe(Some(&rule_from_json(
            r#"{"interval_unit": "yearly", "year_month": 3, "year_day": 15}"#
        ))),
        "Every March 15th"
    );
}

#[test]
fn project_examples() {
    let anchor = |y, m, d| Some(Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap());

    assert_eq!(project(None, anchor(2024, 1, 1)), Projection::Unprojectable);
    assert_eq!(
        project(Some(&MaintenanceScheduleRule::weekly(2)), None),
        Projection::Unprojectable
    );
    assert_eq!(
        project(Some(&MaintenanceScheduleRule::weekly(2)), anchor(2024, 1, 1)),
        Projection::Due(date(2024, 1, 15))
    );
    assert_eq!(
        project(
            Some(&MaintenanceScheduleRule::monthly(1, DayOfWeek::Monday)),
            anchor(2024, 1, 15)
        ),
        Projection::Due(date(2024, 2, 5))
    );

    let yearly = MaintenanceScheduleRule::yearly(3, 15);
    assert_eq!(project(Some(&yearly), anchor(2024, 4, 1)), Projection::Due(date(2025, 3, 15)));
    assert_eq!(project(Some(&yearly), anchor(2024, 2, 1)), Projection::Due(date(2024, 3, 15)));
}

#[test]
fn every_december_anchor_lands_in_january() {
    let weekdays = [
        DayOfWeek::Sunday,
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
    ];
    for year in [2023, 2024, 2025] {
        for day in [1, 15, 31] {
            for weekday in weekdays {
                for week in 1..=4 {
                    let rule = MaintenanceScheduleRule::monthly(week, weekday);
                    let next = project_date(Some(&rule), Some(date(year, 12, day)))
                        .date()
                        .unwrap();
                    assert_eq!(next.format("%Y-%m").to_string(), format!("{}-01", year + 1));
                }
            }
        }
    }
}

#[test]
fn describe_and_project_are_pure() {
    let mut rules = vec![
        MaintenanceScheduleRule::weekly(3),
        MaintenanceScheduleRule::monthly(5, DayOfWeek::Friday),
        MaintenanceScheduleRule::yearly(2, 30),
        MaintenanceScheduleRule::new(IntervalUnit::Yearly),
        MaintenanceScheduleRule::weekly(1).inactive(),
    ];
    rules.push(rules[0].clone().with_last_run(Utc.with_ymd_and_hms(2024, 7, 4, 0, 0, 0).unwrap()));

    for rule in &rules {
        assert_eq!(describe(Some(rule)), describe(Some(rule)));
        for anchor in [None, Some(date(2024, 2, 29)), Some(date(1999, 12, 31))] {
            assert_eq!(project_date(Some(rule), anchor), project_date(Some(rule), anchor));
        }
    }
}
