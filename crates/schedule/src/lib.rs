//! Preventive-maintenance schedule projection.
//!
//! This crate provides:
//! - English ordinal formatting and human-readable rule summaries
//! - Next-occurrence projection for weekly, monthly, and yearly rules
//! - Rule validation with structured errors and warnings
//! - JSON/YAML schedule file loading
//! - An in-memory maintenance board for due-date queries

pub mod board;
pub mod describe;
pub mod loader;
pub mod ordinal;
pub mod projector;
pub mod validation;

pub use board::{BoardEntry, BoardRow, DueItem, MaintenanceBoard};
pub use describe::{describe, NO_SCHEDULE};
pub use loader::{load_schedules, parse_schedules, ScheduleFormat};
pub use ordinal::ordinal;
pub use projector::{project, project_date, project_from_last_run, Projection};
pub use validation::{validate_rule, validate_rule_with, ValidationOptions, ValidationResult};
