//! Project field rules: enumerations, length limits, normalization, and
//! calendar-timestamp parsing.
//!
//! Everything here is pure so both the persistence layer and the HTTP layer
//! apply identical rules.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a project name, in characters.
pub const MAX_NAME_LEN: usize = 100;

/// Maximum length of a client name, in characters.
pub const MAX_CLIENT_NAME_LEN: usize = 100;

/// Maximum length of a project description, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Budget assigned when the caller omits one.
pub const DEFAULT_BUDGET: f64 = 0.0;

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

/// Project priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
        }
    }
}

/// Project status. A plain data field: any value may move to any other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[default]
    Planning,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    #[serde(rename = "On Hold")]
    OnHold,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 4] = [
        ProjectStatus::Planning,
        ProjectStatus::InProgress,
        ProjectStatus::Completed,
        ProjectStatus::OnHold,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planning",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::OnHold => "On Hold",
        }
    }
}

macro_rules! impl_text_enum {
    ($name:ident, $label:literal) => {
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .into_iter()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| {
                        CoreError::Validation(format!("`{s}` is not a valid {}", $label))
                    })
            }
        }

        impl TryFrom<String> for $name {
            type Error = CoreError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }
    };
}

impl_text_enum!(Priority, "priority");
impl_text_enum!(ProjectStatus, "status");

// ---------------------------------------------------------------------------
// Field normalization
// ---------------------------------------------------------------------------

/// Trim a required text field and enforce presence and maximum length.
pub fn normalize_required_text(
    label: &str,
    value: Option<&str>,
    max_len: usize,
) -> Result<String, CoreError> {
    let trimmed = value.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{label} is required")));
    }
    check_max_len(label, trimmed, Some(max_len))?;
    Ok(trimmed.to_string())
}

/// Trim an optional text field. Blank input collapses to `None`.
pub fn normalize_optional_text(
    label: &str,
    value: Option<&str>,
    max_len: Option<usize>,
) -> Result<Option<String>, CoreError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(trimmed) => {
            check_max_len(label, trimmed, max_len)?;
            Ok(Some(trimmed.to_string()))
        }
    }
}

fn check_max_len(label: &str, value: &str, max_len: Option<usize>) -> Result<(), CoreError> {
    match max_len {
        Some(max) if value.chars().count() > max => Err(CoreError::Validation(format!(
            "{label} cannot exceed {max} characters"
        ))),
        _ => Ok(()),
    }
}

/// Budget must be a finite, non-negative number.
pub fn validate_budget(budget: f64) -> Result<f64, CoreError> {
    if !budget.is_finite() {
        return Err(CoreError::Validation(
            "Budget must be a finite number".to_string(),
        ));
    }
    if budget < 0.0 {
        return Err(CoreError::Validation(
            "Budget cannot be negative".to_string(),
        ));
    }
    Ok(budget)
}

/// Give team members set semantics: trim, drop blanks, drop duplicates
/// (keeping the first occurrence).
pub fn normalize_team_members<I, S>(members: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for member in members {
        let member = member.as_ref().trim();
        if member.is_empty() || out.iter().any(|m| m == member) {
            continue;
        }
        out.push(member.to_string());
    }
    out
}

// ---------------------------------------------------------------------------
// Calendar timestamps
// ---------------------------------------------------------------------------

/// Parse a calendar timestamp.
///
/// Accepted forms:
/// - `YYYY-MM-DD` (midnight UTC)
/// - `YYYY-MM-DDTHH:MM[:SS]` without offset (taken as UTC)
/// - RFC 3339 with offset
pub fn parse_calendar_timestamp(raw: &str) -> Result<Timestamp, CoreError> {
    let raw = raw.trim();

    if let Ok(ts) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::default())));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }

    Err(CoreError::Validation(format!(
        "`{raw}` is not a valid date"
    )))
}

/// Serde helper: deserialize an optional calendar timestamp (`null` and
/// absence both yield `None`).
pub fn deserialize_optional_timestamp<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| {
            parse_calendar_timestamp(&raw)
                .map_err(|_| serde::de::Error::custom(format!("`{raw}` is not a valid date")))
        })
        .transpose()
}

/// Serde helper for patch payloads: a present `null` yields `Some(None)`
/// (clear the field). Pair with `#[serde(default)]` so absence yields `None`.
pub fn deserialize_nullable_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<Option<Timestamp>>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_optional_timestamp(deserializer).map(Some)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
