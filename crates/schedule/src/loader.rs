//! Load asset schedules from a JSON or YAML file.
//!
//! The file holds a list of [`AssetSchedule`] rows in the same shape the
//! maintenance API returns, so an API dump can be fed in directly.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::info;

use upkeep_core::{AssetSchedule, Result, UpkeepError};

/// Serialization format of a schedule file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleFormat {
    Json,
    Yaml,
}

impl ScheduleFormat {
    /// Pick the format from a file extension (`.json`, `.yml`, `.yaml`).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("json") => Ok(ScheduleFormat::Json),
            Some("yml") | Some("yaml") => Ok(ScheduleFormat::Yaml),
            _ => Err(UpkeepError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Read and parse a schedule file, rejecting duplicate asset IDs.
pub fn load_schedules(path: &Path) -> Result<Vec<AssetSchedule>> {
    let format = ScheduleFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    let schedules = parse_schedules(&content, format)?;
    info!(
        path = %path.display(),
        assets = schedules.len(),
        "loaded asset schedules"
    );
    Ok(schedules)
}

/// Parse schedule rows from an in-memory document.
pub fn parse_schedules(content: &str, format: ScheduleFormat) -> Result<Vec<AssetSchedule>> {
    let schedules: Vec<AssetSchedule> = match format {
        ScheduleFormat::Json => serde_json::from_str(content)?,
        ScheduleFormat::Yaml => serde_yaml::from_str(content)?,
    };

    let mut seen = HashSet::new();
    for row in &schedules {
        if row.asset_id.trim().is_empty() {
            return Err(UpkeepError::Validation("empty asset_id".to_string()));
        }
        if !seen.insert(row.asset_id.as_str()) {
            return Err(UpkeepError::Validation(format!(
                "duplicate asset_id '{}'",
                row.asset_id
            )));
        }
    }

    Ok(schedules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use upkeep_core::IntervalUnit;

    #[test]
    fn format_from_extension() {
        assert_eq!(
            ScheduleFormat::from_path(&PathBuf::from("a/b.json")).unwrap(),
            ScheduleFormat::Json
        );
        assert_eq!(
            ScheduleFormat::from_path(&PathBuf::from("b.YAML")).unwrap(),
            ScheduleFormat::Yaml
        );
        assert!(matches!(
            ScheduleFormat::from_path(&PathBuf::from("b.csv")),
            Err(UpkeepError::UnsupportedFormat(_))
        ));
        assert!(ScheduleFormat::from_path(&PathBuf::from("noext")).is_err());
    }

    #[test]
    fn parse_json_rows() {
        let rows = parse_schedules(
            r#"[
                {"asset_id": "ahu-1", "asset_name": "Air handler 1",
                 "schedule": {"interval_unit": "weekly", "interval_value": 2}},
                {"asset_id": "gen-2", "schedule": null}
            ]"#,
            ScheduleFormat::Json,
        )
        .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0].schedule.as_ref().map(|s| s.interval_unit),
            Some(IntervalUnit::Weekly)
        );
        assert!(rows[1].schedule.is_none());
        assert!(rows[1].asset_name.is_none());
    }

    #[test]
    fn parse_yaml_rows() {
        let rows = parse_schedules(
            "- asset_id: chiller-3\n  schedule:\n    interval_unit: yearly\n    year_month: 3\n    year_day: 15\n",
            ScheduleFormat::Yaml,
        )
        .unwrap();
        assert_eq!(rows[0].schedule.as_ref().and_then(|s| s.year_day), Some(15));
    }

    #[test]
    fn duplicate_asset_ids_rejected() {
        let err = parse_schedules(
            r#"[{"asset_id": "x"}, {"asset_id": "x"}]"#,
            ScheduleFormat::Json,
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate asset_id 'x'"));
    }

    #[test]
    fn blank_asset_id_rejected() {
        let err = parse_schedules(r#"[{"asset_id": "  "}]"#, ScheduleFormat::Json).unwrap_err();
        assert!(matches!(err, UpkeepError::Validation(_)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = parse_schedules("[{", ScheduleFormat::Json).unwrap_err();
        assert!(matches!(err, UpkeepError::Json(_)));
    }
}
