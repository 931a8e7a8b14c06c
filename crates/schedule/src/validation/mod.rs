//! Schedule rule validation with structured errors and warnings.
//!
//! Errors block a save (the rule could not be projected as the user
//! intends); warnings are advisory (overflow dates, ignored fields, values
//! outside the range seen in practice).

mod unit_checks;

use serde::{Deserialize, Serialize};

use upkeep_core::config::DEFAULT_WARN_INTERVAL_WEEKS;
use upkeep_core::{Config, MaintenanceScheduleRule};

// ── Result types ────────────────────────────────────────────────────

/// Overall validation outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

/// A blocking validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationError {
    /// Field name in the API payload, e.g. `"month_week"`.
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// A non-blocking advisory warning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationResult {
    pub(crate) fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub(crate) fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.valid = false;
        self.errors.push(ValidationError {
            path: path.into(),
            message: message.into(),
            suggestion: None,
        });
    }

    pub(crate) fn error_with_suggestion(
        &mut self,
        path: impl Into<String>,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) {
        self.valid = false;
        self.errors.push(ValidationError {
            path: path.into(),
            message: message.into(),
            suggestion: Some(suggestion.into()),
        });
    }

    pub(crate) fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ValidationWarning {
            path: path.into(),
            message: message.into(),
        });
    }
}

/// Tunables for [`validate_rule_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Weekly intervals above this are flagged as unusual.
    pub warn_interval_weeks: i64,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            warn_interval_weeks: DEFAULT_WARN_INTERVAL_WEEKS,
        }
    }
}

impl From<&Config> for ValidationOptions {
    fn from(config: &Config) -> Self {
        Self {
            warn_interval_weeks: config.warn_interval_weeks,
        }
    }
}

// ── Entry points ────────────────────────────────────────────────────

/// Validate a rule with default options.
pub fn validate_rule(rule: &MaintenanceScheduleRule) -> ValidationResult {
    validate_rule_with(rule, &ValidationOptions::default())
}

pub fn validate_rule_with(
    rule: &MaintenanceScheduleRule,
    options: &ValidationOptions,
) -> ValidationResult {
    let mut result = ValidationResult::new();
    unit_checks::validate_unit_fields(rule, options, &mut result);

    for field in rule.irrelevant_fields() {
        result.warn(
            field,
            format!(
                "'{}' is ignored for {} schedules",
                field, rule.interval_unit
            ),
        );
    }

    if rule.is_active && rule.last_run_at.is_none() {
        result.warn(
            "last_run_at",
            "No completed maintenance recorded; next date cannot be projected yet",
        );
    }

    result
}

/// Parse a JSON rule payload and validate it.
pub fn validate_json(json: &str) -> ValidationResult {
    match serde_json::from_str::<MaintenanceScheduleRule>(json) {
        Ok(rule) => validate_rule(&rule),
        Err(e) => parse_failure(format!("JSON parse error: {}", e)),
    }
}

/// Parse a YAML rule document and validate it.
pub fn validate_yaml(yaml: &str) -> ValidationResult {
    match serde_yaml::from_str::<MaintenanceScheduleRule>(yaml) {
        Ok(rule) => validate_rule(&rule),
        Err(e) => parse_failure(format!("YAML parse error: {}", e)),
    }
}

fn parse_failure(message: String) -> ValidationResult {
    let mut result = ValidationResult::new();
    result.error("", message);
    result
}
