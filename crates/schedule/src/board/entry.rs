//! Board entry and the row types handed to presentation code.

use chrono::NaiveDate;
use serde::Serialize;

use upkeep_core::MaintenanceScheduleRule;

use crate::projector::Projection;

/// Tracked state for a single asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardEntry {
    /// Asset identifier (matches `AssetSchedule.asset_id`).
    pub asset_id: String,
    pub asset_name: Option<String>,
    /// Current rule, `None` when the asset has no PM schedule.
    pub rule: Option<MaintenanceScheduleRule>,
}

/// An asset whose next maintenance falls on or before a cutoff date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DueItem {
    pub asset_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_name: Option<String>,
    pub due: NaiveDate,
    pub summary: String,
}

/// One line of the PM list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardRow {
    pub asset_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_name: Option<String>,
    pub summary: String,
    pub next_due: Projection,
}
