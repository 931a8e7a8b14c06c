use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// Read a profiled env var: tries {PROFILE}_{KEY} first, falls back to {KEY}.
fn profiled_env_opt(profile: &str, key: &str) -> Option<String> {
    if !profile.is_empty() {
        let prefixed = format!("{}_{}", profile, key);
        if let Some(v) = env_opt(&prefixed) {
            return Some(v);
        }
    }
    env_opt(key)
}

fn profiled_env_or(profile: &str, key: &str, default: &str) -> String {
    profiled_env_opt(profile, key).unwrap_or_else(|| default.to_string())
}

fn profiled_env_i64(profile: &str, key: &str, default: i64) -> i64 {
    profiled_env_opt(profile, key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

pub const DEFAULT_SCHEDULES_FILE: &str = "data/schedules.json";
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";
pub const DEFAULT_WARN_INTERVAL_WEEKS: i64 = 3;

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name (empty = default).
    pub profile: String,
    /// Schedule file read by the CLI when `--file` is not given.
    pub schedules_file: PathBuf,
    /// `strftime` pattern for rendering projected dates.
    pub date_format: String,
    /// Weekly intervals above this produce a validation warning.
    pub warn_interval_weeks: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: String::new(),
            schedules_file: PathBuf::from(DEFAULT_SCHEDULES_FILE),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            warn_interval_weeks: DEFAULT_WARN_INTERVAL_WEEKS,
        }
    }
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    /// Profile is read from `UPKEEP_PROFILE`. When set (e.g. `PROD`),
    /// every key is first looked up as `{PROFILE}_{KEY}`, falling back to `{KEY}`.
    pub fn from_env() -> Self {
        let profile = env_or("UPKEEP_PROFILE", "").to_uppercase();
        Self::for_profile(&profile)
    }

    /// Build config for a specific named profile (empty string = default).
    pub fn for_profile(profile: &str) -> Self {
        let p = profile.to_uppercase();
        let p = p.as_str();
        Self {
            profile: p.to_string(),
            schedules_file: PathBuf::from(profiled_env_or(
                p,
                "UPKEEP_SCHEDULES_FILE",
                DEFAULT_SCHEDULES_FILE,
            )),
            date_format: profiled_env_or(p, "UPKEEP_DATE_FORMAT", DEFAULT_DATE_FORMAT),
            warn_interval_weeks: profiled_env_i64(
                p,
                "UPKEEP_WARN_INTERVAL_WEEKS",
                DEFAULT_WARN_INTERVAL_WEEKS,
            ),
        }
    }

    pub fn profile_label(&self) -> &str {
        if self.profile.is_empty() { "default" } else { &self.profile }
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded (profile: {}):", self.profile_label());
        tracing::info!("  schedules:   file={}", self.schedules_file.display());
        tracing::info!("  rendering:   date_format={}", self.date_format);
        tracing::info!("  validation:  warn_interval_weeks={}", self.warn_interval_weeks);
    }
}
