//! Handlers for the `/projects` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use projecthub_core::access::can_edit;
use projecthub_core::error::CoreError;
use projecthub_core::types::ProjectId;
use projecthub_db::models::project::{CreateProject, Project, UpdateProject};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

const CREATE_FAILED: &str = "Failed to create project";
const LIST_FAILED: &str = "Failed to fetch projects";
const UPDATE_FAILED: &str = "Failed to update project";

fn project_not_found(id: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        id: id.to_string(),
    })
}

/// POST /api/v1/projects
///
/// `createdBy` always comes from the session, never from the body.
pub async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    body: Result<Json<CreateProject>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let Json(input) = body?;
    let new_project = input.validate(&user.name)?;

    let project = state
        .store
        .create(new_project)
        .await
        .map_err(|e| AppError::operation(CREATE_FAILED, e))?;

    tracing::info!(project_id = %project.id, user = %user.name, user_id = %user.id, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects
///
/// Projects the caller created or is a team member of.
pub async fn list(user: AuthUser, State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = state
        .store
        .list_for(&user.name)
        .await
        .map_err(|e| AppError::operation(LIST_FAILED, e))?;
    Ok(Json(projects))
}

/// PUT /api/v1/projects/{id}
///
/// Partial merge: fields absent from the body keep their stored values.
/// An id that does not parse cannot match any project and is a 404.
pub async fn update(
    user: AuthUser,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<Json<UpdateProject>, JsonRejection>,
) -> AppResult<Json<Project>> {
    let id = ProjectId::parse_str(&raw_id).map_err(|_| project_not_found(&raw_id))?;

    let existing = state
        .store
        .find_by_id(id)
        .await
        .map_err(|e| AppError::operation(UPDATE_FAILED, e))?
        .ok_or_else(|| project_not_found(&raw_id))?;

    if !can_edit(&existing.created_by, &user.name, &user.role) {
        if state.config.restrict_project_edits {
            return Err(AppError::Core(CoreError::Forbidden(
                "Only the project creator or an admin can edit this project".into(),
            )));
        }
        tracing::warn!(
            project_id = %id,
            user = %user.name,
            created_by = %existing.created_by,
            "Project updated by a user who is neither its creator nor an admin",
        );
    }

    let Json(input) = body?;
    let changes = input.validate()?;

    let project = state
        .store
        .update_by_id(id, changes)
        .await
        .map_err(|e| AppError::operation(UPDATE_FAILED, e))?
        .ok_or_else(|| project_not_found(&raw_id))?;

    tracing::info!(project_id = %project.id, user = %user.name, "Project updated");
    Ok(Json(project))
}
