//! Repository for the `projects` table.

use projecthub_core::project::{Priority, ProjectStatus};
use projecthub_core::types::ProjectId;
use sqlx::PgPool;

use crate::models::project::{NewProject, Project, ProjectChanges};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, client_name, description, technology_stack, start_date, \
     end_date, priority, status, budget, team_members, created_by, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (id, name, client_name, description, technology_stack,
                                   start_date, end_date, priority, status, budget,
                                   team_members, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(ProjectId::now_v7())
            .bind(&input.name)
            .bind(&input.client_name)
            .bind(&input.description)
            .bind(&input.technology_stack)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.priority.as_str())
            .bind(input.status.as_str())
            .bind(input.budget)
            .bind(&input.team_members)
            .bind(&input.created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its id.
    pub async fn find_by_id(pool: &PgPool, id: ProjectId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List projects the user created or is a team member of, oldest first.
    pub async fn list_for_member(pool: &PgPool, user: &str) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE created_by = $1 OR $1 = ANY(team_members)
             ORDER BY created_at, id"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(user)
            .fetch_all(pool)
            .await
    }

    /// Update a project. Only fields present in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: ProjectId,
        input: &ProjectChanges,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = COALESCE($2, name),
                client_name = CASE WHEN $3 THEN $4 ELSE client_name END,
                description = CASE WHEN $5 THEN $6 ELSE description END,
                technology_stack = CASE WHEN $7 THEN $8 ELSE technology_stack END,
                start_date = COALESCE($9, start_date),
                end_date = CASE WHEN $10 THEN $11 ELSE end_date END,
                priority = COALESCE($12, priority),
                status = COALESCE($13, status),
                budget = COALESCE($14, budget),
                team_members = COALESCE($15, team_members),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.client_name.is_some())
            .bind(input.client_name.clone().flatten())
            .bind(input.description.is_some())
            .bind(input.description.clone().flatten())
            .bind(input.technology_stack.is_some())
            .bind(input.technology_stack.clone().flatten())
            .bind(input.start_date)
            .bind(input.end_date.is_some())
            .bind(input.end_date.flatten())
            .bind(input.priority.map(Priority::as_str))
            .bind(input.status.map(ProjectStatus::as_str))
            .bind(input.budget)
            .bind(&input.team_members)
            .fetch_optional(pool)
            .await
    }
}
