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
    dtos::ProjectManagerDto,
    error::Error,
    messages,
    routes::{validator_response, ListParams},
    services,
    shared_state::AppState,
};

async fn list_project_managers(
    Extension(ref state): Extension<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Response, Error> {
    let managers = state
        .db
        .interact(move |conn| {
            services::project_managers::find_all_sorted(
                conn,
                params.sortby.as_deref(),
                params.order.as_deref(),
            )
        })
        .await?;

    if managers.is_empty() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(ErrorBody::new(messages::NO_PROJECT_MANAGER_FOUND)),
        )
            .into_response());
    }
    Ok((StatusCode::OK, Json(managers)).into_response())
}

async fn add_project_manager(
    Extension(ref state): Extension<AppState>,
    Json(manager): Json<Option<ProjectManagerDto>>,
) -> Result<Response, Error> {
    let result = state
        .db
        .transaction(move |conn| services::project_managers::save(conn, manager.as_ref()))
        .await?;

    Ok(validator_response(result))
}

async fn edit_project_manager(
    Extension(ref state): Extension<AppState>,
    Path(id): Path<i64>,
    Json(manager): Json<ProjectManagerDto>,
) -> Result<Response, Error> {
    let result = state
        .db
        .transaction(move |conn| services::project_managers::edit_by_id(conn, id, &manager))
        .await?;

    Ok(validator_response(result))
}

async fn project_manager_details(
    Extension(ref state): Extension<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, Error> {
    let details = state
        .db
        .interact(move |conn| services::project_managers::find_by_id(conn, id))
        .await?;

    match details {
        Some(details) => Ok((StatusCode::OK, Json(details)).into_response()),
        None => Ok((
            StatusCode::BAD_REQUEST,
            Json(ErrorBody::new(messages::NO_PROJECT_MANAGER_FOUND)),
        )
            .into_response()),
    }
}

async fn delete_project_manager(
    Extension(ref state): Extension<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, Error> {
    let deleted = state
        .db
        .transaction(move |conn| services::project_managers::delete_by_id(conn, id))
        .await?;

    if !deleted {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(ErrorBody::new(messages::NO_PROJECT_MANAGER_FOUND)),
        )
            .into_response());
    }
    Ok((
        StatusCode::OK,
        Json(SuccessBody::new(messages::delete_success("project manager"))),
    )
        .into_response())
}

pub fn configure() -> Router {
    Router::new()
        .route("/project-managers", get(list_project_managers))
        .route("/add-project-managers", post(add_project_manager))
        .route("/edit-project-managers/:id", post(edit_project_manager))
        .route(
            "/details-project-managers/:id",
            get(project_manager_details),
        )
        .route("/delete-project-managers/:id", delete(delete_project_manager))
}
