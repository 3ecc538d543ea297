//! Handlers for the `/workflows` resource.

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use kortex_core::error::CoreError;
use kortex_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use kortex_core::types::DbId;
use kortex_core::workflow::WorkflowPayload;
use kortex_db::models::prompt_workflow::PromptWorkflow;
use kortex_db::repositories::PromptWorkflowRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::query::SkipLimitParams;
use crate::state::AppState;

const ENTITY: &str = "PromptWorkflow";

/// Confirmation body returned by DELETE.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: &'static str,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

/// POST /workflows/
pub async fn create(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<WorkflowPayload>,
) -> AppResult<(StatusCode, Json<PromptWorkflow>)> {
    let fields = payload.into_fields()?;
    let workflow = PromptWorkflowRepo::create(&state.pool, &fields).await?;
    tracing::info!(workflow_id = workflow.id, name = %workflow.name, "Prompt workflow created");
    Ok((StatusCode::CREATED, Json(workflow)))
}

/// GET /workflows/?skip=&limit=
///
/// `limit` defaults to [`DEFAULT_PAGE_SIZE`] and is capped at [`MAX_PAGE_SIZE`].
pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<SkipLimitParams>, QueryRejection>,
) -> AppResult<Json<Vec<PromptWorkflow>>> {
    let Query(params) = params?;
    let offset = clamp_offset(params.skip);
    let limit = clamp_limit(params.limit, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE);

    let workflows = PromptWorkflowRepo::list(&state.pool, offset, limit).await?;
    Ok(Json(workflows))
}

/// GET /workflows/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<PromptWorkflow>> {
    let Path(id) = id?;
    let workflow = PromptWorkflowRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(workflow))
}

/// PUT /workflows/{id}
///
/// Full replacement: every mutable field takes the value in the body, and
/// omitted optional fields are cleared.
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
    JsonBody(payload): JsonBody<WorkflowPayload>,
) -> AppResult<Json<PromptWorkflow>> {
    let Path(id) = id?;
    let fields = payload.into_fields()?;
    let workflow = PromptWorkflowRepo::replace(&state.pool, id, &fields)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(workflow_id = id, "Prompt workflow replaced");
    Ok(Json(workflow))
}

/// DELETE /workflows/{id}
///
/// Dependent evaluations and test suites are removed with the workflow.
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<DeletedResponse>> {
    let Path(id) = id?;
    if !PromptWorkflowRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(workflow_id = id, "Prompt workflow deleted");
    Ok(Json(DeletedResponse {
        message: "Workflow deleted successfully",
    }))
}
