//! Core [`MaintenanceBoard`] struct.

use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, info};

use upkeep_core::AssetSchedule;

use super::entry::{BoardEntry, BoardRow, DueItem};
use crate::describe::describe;
use crate::projector::{project_from_last_run, Projection};

/// Schedules for all tracked assets, keyed by asset ID.
///
/// Call [`sync`](MaintenanceBoard::sync) whenever a fresh schedule list is
/// fetched. Completions recorded locally survive a sync that carries an
/// older `last_run_at`.
#[derive(Debug, Default)]
pub struct MaintenanceBoard {
    entries: BTreeMap<String, BoardEntry>,
}

impl MaintenanceBoard {
    /// Create a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from a schedule list.
    pub fn from_schedules(schedules: &[AssetSchedule]) -> Self {
        let mut board = Self::new();
        board.sync(schedules);
        board
    }

    /// Synchronize entries with the current schedule list.
    ///
    /// - Adds entries for new assets.
    /// - Replaces the rule of existing assets, keeping a local `last_run_at`
    ///   that is newer than the incoming one.
    /// - Removes assets no longer present.
    pub fn sync(&mut self, schedules: &[AssetSchedule]) {
        let current_ids: HashSet<&str> = schedules.iter().map(|s| s.asset_id.as_str()).collect();

        let before = self.entries.len();
        self.entries.retain(|id, _| current_ids.contains(id.as_str()));
        let removed = before - self.entries.len();

        for schedule in schedules {
            let id = &schedule.asset_id;
            match self.entries.get_mut(id) {
                Some(entry) => {
                    let local_run = entry.rule.as_ref().and_then(|r| r.last_run_at);
                    entry.asset_name = schedule.asset_name.clone();
                    entry.rule = schedule.schedule.clone();

                    if let (Some(rule), Some(local_run)) = (entry.rule.as_mut(), local_run) {
                        if rule.last_run_at.map_or(true, |incoming| incoming < local_run) {
                            debug!(asset_id = %id, "keeping newer local completion");
                            rule.last_run_at = Some(local_run);
                        }
                    }
                }
                None => {
                    self.entries.insert(
                        id.clone(),
                        BoardEntry {
                            asset_id: id.clone(),
                            asset_name: schedule.asset_name.clone(),
                            rule: schedule.schedule.clone(),
                        },
                    );
                }
            }
        }

        info!(assets = self.entries.len(), removed, "maintenance board synced");
    }

    /// Next due date for an asset; unknown assets are unprojectable.
    pub fn next_due(&self, asset_id: &str) -> Projection {
        match self.entries.get(asset_id) {
            Some(entry) => project_from_last_run(entry.rule.as_ref()),
            None => Projection::Unprojectable,
        }
    }

    /// Assets due on or before `date`, ordered by due date then asset ID.
    pub fn due_on_or_before(&self, date: NaiveDate) -> Vec<DueItem> {
        let mut due: Vec<DueItem> = self
            .entries
            .values()
            .filter_map(|entry| {
                let next = project_from_last_run(entry.rule.as_ref()).date()?;
                (next <= date).then(|| DueItem {
                    asset_id: entry.asset_id.clone(),
                    asset_name: entry.asset_name.clone(),
                    due: next,
                    summary: describe(entry.rule.as_ref()),
                })
            })
            .collect();
        due.sort_by(|a, b| a.due.cmp(&b.due).then_with(|| a.asset_id.cmp(&b.asset_id)));
        due
    }

    /// Record completed maintenance for an asset.
    ///
    /// Returns `false` if the asset is unknown or has no schedule.
    pub fn record_completion(&mut self, asset_id: &str, at: DateTime<Utc>) -> bool {
        match self.entries.get_mut(asset_id).and_then(|e| e.rule.as_mut()) {
            Some(rule) => {
                rule.last_run_at = Some(at);
                true
            }
            None => {
                debug!(asset_id = %asset_id, "completion for asset without schedule ignored");
                false
            }
        }
    }

    /// List-view rows ordered by asset ID.
    pub fn rows(&self) -> Vec<BoardRow> {
        self.entries
            .values()
            .map(|entry| BoardRow {
                asset_id: entry.asset_id.clone(),
                asset_name: entry.asset_name.clone(),
                summary: describe(entry.rule.as_ref()),
                next_due: project_from_last_run(entry.rule.as_ref()),
            })
            .collect()
    }

    /// Get a reference to an entry by asset ID.
    pub fn get(&self, asset_id: &str) -> Option<&BoardEntry> {
        self.entries.get(asset_id)
    }

    /// Number of tracked assets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the board has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
