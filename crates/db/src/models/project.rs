//! Project entity model and DTOs.

use projecthub_core::error::CoreError;
use projecthub_core::project::{
    deserialize_nullable_timestamp, deserialize_optional_timestamp, normalize_optional_text,
    normalize_required_text, normalize_team_members, validate_budget, Priority, ProjectStatus,
    DEFAULT_BUDGET, MAX_CLIENT_NAME_LEN, MAX_DESCRIPTION_LEN, MAX_NAME_LEN,
};
use projecthub_core::types::{ProjectId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `projects` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Sent as `_id`, the name existing clients read.
    #[serde(rename = "_id")]
    pub id: ProjectId,
    pub name: String,
    pub client_name: Option<String>,
    pub description: Option<String>,
    pub technology_stack: Option<String>,
    pub start_date: Timestamp,
    pub end_date: Option<Timestamp>,
    #[sqlx(try_from = "String")]
    pub priority: Priority,
    #[sqlx(try_from = "String")]
    pub status: ProjectStatus,
    pub budget: f64,
    pub team_members: Vec<String>,
    pub created_by: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// Request body for creating a project.
///
/// Required fields are `Option` here so their absence surfaces as a
/// validation message rather than a deserialization failure. Fields the
/// server owns (`id`, `createdBy`, timestamps) are not part of the DTO and
/// are ignored if a client sends them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub name: Option<String>,
    pub client_name: Option<String>,
    pub description: Option<String>,
    pub technology_stack: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub start_date: Option<Timestamp>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub end_date: Option<Timestamp>,
    pub priority: Option<Priority>,
    pub status: Option<ProjectStatus>,
    pub budget: Option<f64>,
    pub team_members: Option<Vec<String>>,
}

/// A validated, normalized project ready to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub name: String,
    pub client_name: Option<String>,
    pub description: Option<String>,
    pub technology_stack: Option<String>,
    pub start_date: Timestamp,
    pub end_date: Option<Timestamp>,
    pub priority: Priority,
    pub status: ProjectStatus,
    pub budget: f64,
    pub team_members: Vec<String>,
    pub created_by: String,
}

impl CreateProject {
    /// Check field constraints, apply defaults, and stamp the creator.
    pub fn validate(self, created_by: &str) -> Result<NewProject, CoreError> {
        let name = normalize_required_text("Project name", self.name.as_deref(), MAX_NAME_LEN)?;
        let start_date = self
            .start_date
            .ok_or_else(|| CoreError::Validation("Start date is required".to_string()))?;

        let created_by = created_by.trim();
        if created_by.is_empty() {
            return Err(CoreError::Validation("Creator is required".to_string()));
        }

        Ok(NewProject {
            name,
            client_name: normalize_optional_text(
                "Client name",
                self.client_name.as_deref(),
                Some(MAX_CLIENT_NAME_LEN),
            )?,
            description: normalize_optional_text(
                "Description",
                self.description.as_deref(),
                Some(MAX_DESCRIPTION_LEN),
            )?,
            technology_stack: normalize_optional_text(
                "Technology stack",
                self.technology_stack.as_deref(),
                None,
            )?,
            start_date,
            end_date: self.end_date,
            priority: self.priority.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            budget: validate_budget(self.budget.unwrap_or(DEFAULT_BUDGET))?,
            team_members: normalize_team_members(self.team_members.unwrap_or_default()),
            created_by: created_by.to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

/// Request body for updating a project. All fields are optional; absent (or
/// `null`) fields keep their stored value.
///
/// For the optional text fields, an empty string clears the value. For
/// `endDate`, an explicit `null` clears it. `createdBy` is not updatable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub name: Option<String>,
    pub client_name: Option<String>,
    pub description: Option<String>,
    pub technology_stack: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub start_date: Option<Timestamp>,
    #[serde(default, deserialize_with = "deserialize_nullable_timestamp")]
    pub end_date: Option<Option<Timestamp>>,
    pub priority: Option<Priority>,
    pub status: Option<ProjectStatus>,
    pub budget: Option<f64>,
    pub team_members: Option<Vec<String>>,
}

/// A validated partial update. `None` leaves a field untouched; for the
/// nullable columns, `Some(None)` clears the field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectChanges {
    pub name: Option<String>,
    pub client_name: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub technology_stack: Option<Option<String>>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Option<Timestamp>>,
    pub priority: Option<Priority>,
    pub status: Option<ProjectStatus>,
    pub budget: Option<f64>,
    pub team_members: Option<Vec<String>>,
}

impl UpdateProject {
    /// Check the constraints of every field present in the payload.
    pub fn validate(self) -> Result<ProjectChanges, CoreError> {
        let name = self
            .name
            .as_deref()
            .map(|n| normalize_required_text("Project name", Some(n), MAX_NAME_LEN))
            .transpose()?;

        let client_name = self
            .client_name
            .as_deref()
            .map(|v| normalize_optional_text("Client name", Some(v), Some(MAX_CLIENT_NAME_LEN)))
            .transpose()?;

        let description = self
            .description
            .as_deref()
            .map(|v| normalize_optional_text("Description", Some(v), Some(MAX_DESCRIPTION_LEN)))
            .transpose()?;

        let technology_stack = self
            .technology_stack
            .as_deref()
            .map(|v| normalize_optional_text("Technology stack", Some(v), None))
            .transpose()?;

        let budget = self.budget.map(validate_budget).transpose()?;

        Ok(ProjectChanges {
            name,
            client_name,
            description,
            technology_stack,
            start_date: self.start_date,
            end_date: self.end_date,
            priority: self.priority,
            status: self.status,
            budget,
            team_members: self.team_members.map(normalize_team_members),
        })
    }
}

impl ProjectChanges {
    /// Returns `true` if the patch would not change any field.
    pub fn is_empty(&self) -> bool {
        *self == ProjectChanges::default()
    }

    /// Merge the patch into `project`. Timestamps are the caller's concern.
    pub fn apply_to(&self, project: &mut Project) {
        if let Some(name) = &self.name {
            project.name = name.clone();
        }
        if let Some(client_name) = &self.client_name {
            project.client_name = client_name.clone();
        }
        if let Some(description) = &self.description {
            project.description = description.clone();
        }
        if let Some(technology_stack) = &self.technology_stack {
            project.technology_stack = technology_stack.clone();
        }
        if let Some(start_date) = self.start_date {
            project.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            project.end_date = end_date;
        }
        if let Some(priority) = self.priority {
            project.priority = priority;
        }
        if let Some(status) = self.status {
            project.status = status;
        }
        if let Some(budget) = self.budget {
            project.budget = budget;
        }
        if let Some(team_members) = &self.team_members {
            project.team_members = team_members.clone();
        }
    }
}
