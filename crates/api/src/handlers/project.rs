//! Handlers for the `/projects` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use rashguard_core::error::CoreError;
use rashguard_core::project::{parse_project_id, require_order_id, NewProjectSubmission};
use rashguard_core::types::{ProjectId, Timestamp};
use rashguard_db::models::project::{CreateProject, Project};
use rashguard_db::repositories::ProjectRepo;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppResult;
use crate::state::AppState;

/// Body returned after a successful create.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCreated {
    pub project_id: ProjectId,
}

/// Body accepted by the link-order endpoint.
///
/// Kept as a raw value so numeric order ids can be accepted too.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkOrderRequest {
    pub presta_order_id: Option<Value>,
}

/// Confirmation returned after linking a project to an order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLinked {
    pub message: &'static str,
    pub project_id: ProjectId,
    pub presta_order_id: Option<String>,
}

/// What an order-management caller needs to render a preview.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectForOrder {
    pub project_name: String,
    pub created_at: Timestamp,
    pub project_id: ProjectId,
    pub config_data: Value,
}

impl From<Project> for ProjectForOrder {
    fn from(project: Project) -> Self {
        Self {
            project_name: project.project_name,
            created_at: project.created_at,
            project_id: project.id,
            config_data: project.config_data,
        }
    }
}

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let pool = state.ready_pool().await?;
    let projects = ProjectRepo::list(pool).await?;
    Ok(Json(projects))
}

/// POST /api/projects
///
/// The whole body is stored as the design payload.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ProjectCreated>)> {
    let Json(payload) = payload?;
    let defaults = &state.config.project_defaults;
    let input = CreateProject::from(NewProjectSubmission::from_payload(payload, defaults)?);
    let project = ProjectRepo::create(state.ready_pool().await?, &input).await?;
    tracing::info!(project_id = %project.id, user_id = %project.user_id, "Project created");

    Ok((
        StatusCode::CREATED,
        Json(ProjectCreated {
            project_id: project.id,
        }),
    ))
}

/// GET /api/projects/{project_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> AppResult<Json<Project>> {
    let id = parse_project_id(&project_id)?;
    let pool = state.ready_pool().await?;
    let project = ProjectRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Project", id))?;
    Ok(Json(project))
}

/// POST /api/projects/{project_id}/link-order
///
/// Overwrites any order id already linked.
pub async fn link_order(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    body: Result<Json<LinkOrderRequest>, JsonRejection>,
) -> AppResult<Json<OrderLinked>> {
    let Json(body) = body?;
    let order_id = require_order_id(body.presta_order_id.as_ref())?;
    let id = parse_project_id(&project_id)?;

    let pool = state.ready_pool().await?;
    let project = ProjectRepo::link_order(pool, id, &order_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Project", id))?;
    tracing::info!(project_id = %project.id, order_id = %order_id, "Project linked to order");

    Ok(Json(OrderLinked {
        message: "Project successfully linked to order",
        project_id: project.id,
        presta_order_id: project.presta_order_id,
    }))
}

/// GET /api/projects/by-order/{presta_order_id}
pub async fn get_by_order(
    State(state): State<AppState>,
    Path(presta_order_id): Path<String>,
) -> AppResult<Json<ProjectForOrder>> {
    let pool = state.ready_pool().await?;
    let project = ProjectRepo::find_by_order_id(pool, &presta_order_id)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "Project",
            key: "order id",
            value: presta_order_id.clone(),
        })?;
    Ok(Json(ProjectForOrder::from(project)))
}
