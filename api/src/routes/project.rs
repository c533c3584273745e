use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Extension, Json, Router,
};

use devdesk_db::PoolExt;
use devdesk_http_errors::{ErrorBody, SuccessBody};

use crate::{
    dtos::ProjectDto,
    error::Error,
    messages,
    routes::{validator_response, ListParams},
    services,
    shared_state::AppState,
};

async fn list_projects(
    Extension(ref state): Extension<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Response, Error> {
    let projects = state
        .db
        .interact(move |conn| {
            services::projects::find_all_sorted(
                conn,
                params.sortby.as_deref(),
                params.order.as_deref(),
            )
        })
        .await?;

    if projects.is_empty() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(ErrorBody::new(messages::NO_PROJECT_FOUND)),
        )
            .into_response());
    }
    Ok((StatusCode::OK, Json(projects)).into_response())
}

async fn add_project(
    Extension(ref state): Extension<AppState>,
    Json(project): Json<Option<ProjectDto>>,
) -> Result<Response, Error> {
    let result = state
        .db
        .transaction(move |conn| services::projects::save(conn, project.as_ref()))
        .await?;

    Ok(validator_response(result))
}

async fn add_project_by_project_manager(
    Extension(ref state): Extension<AppState>,
    Path(project_manager_id): Path<i64>,
    Json(project): Json<Option<ProjectDto>>,
) -> Result<Response, Error> {
    let result = state
        .db
        .transaction(move |conn| {
            services::projects::save_by_project_manager_id(
                conn,
                project.as_ref(),
                project_manager_id,
            )
        })
        .await?;

    Ok(validator_response(result))
}

async fn add_project_by_programmer(
    Extension(ref state): Extension<AppState>,
    Path(programmer_id): Path<i64>,
    Json(project): Json<Option<ProjectDto>>,
) -> Result<Response, Error> {
    let result = state
        .db
        .transaction(move |conn| {
            services::projects::save_by_programmer_id(conn, project.as_ref(), programmer_id)
        })
        .await?;

    Ok(validator_response(result))
}

async fn edit_project(
    Extension(ref state): Extension<AppState>,
    Path(id): Path<i64>,
    Json(project): Json<ProjectDto>,
) -> Result<Response, Error> {
    let result = state
        .db
        .transaction(move |conn| services::projects::edit_by_id(conn, id, &project))
        .await?;

    Ok(validator_response(result))
}

async fn project_details(
    Extension(ref state): Extension<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, Error> {
    let details = state
        .db
        .interact(move |conn| services::projects::find_by_id(conn, id))
        .await?;

    match details {
        Some(details) => Ok((StatusCode::OK, Json(details)).into_response()),
        None => Ok((
            StatusCode::BAD_REQUEST,
            Json(ErrorBody::new(messages::NO_PROJECT_FOUND)),
        )
            .into_response()),
    }
}

async fn delete_project(
    Extension(ref state): Extension<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, Error> {
    let deleted = state
        .db
        .transaction(move |conn| services::projects::delete_by_id(conn, id))
        .await?;

    if !deleted {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(ErrorBody::new(messages::NO_PROJECT_FOUND)),
        )
            .into_response());
    }
    Ok((
        StatusCode::OK,
        Json(SuccessBody::new(messages::delete_success("project"))),
    )
        .into_response())
}

pub fn configure() -> Router {
    Router::new()
        .route("/projects", get(list_projects))
        .route("/add-projects", post(add_project))
        .route(
            "/project-managers/:project_manager_id/add-project",
            post(add_project_by_project_manager),
        )
        .route(
            "/programmers/:programmer_id/add-project",
            post(add_project_by_programmer),
        )
        .route("/edit-projects/:id", post(edit_project))
        .route("/details-projects/:id", get(project_details))
        .route("/delete-projects/:id", delete(delete_project))
}
