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
    dtos::ProgrammerDto,
    error::Error,
    messages,
    routes::{validator_response, ListParams},
    services,
    shared_state::AppState,
};

async fn list_programmers(
    Extension(ref state): Extension<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Response, Error> {
    let programmers = state
        .db
        .interact(move |conn| {
            services::programmers::find_all_sorted(
                conn,
                params.sortby.as_deref(),
                params.order.as_deref(),
            )
        })
        .await?;

    if programmers.is_empty() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(ErrorBody::new(messages::NO_PROGRAMMER_FOUND)),
        )
            .into_response());
    }
    Ok((StatusCode::OK, Json(programmers)).into_response())
}

async fn add_programmer(
    Extension(ref state): Extension<AppState>,
    Json(programmer): Json<Option<ProgrammerDto>>,
) -> Result<Response, Error> {
    let result = state
        .db
        .transaction(move |conn| services::programmers::save(conn, programmer.as_ref()))
        .await?;

    Ok(validator_response(result))
}

async fn edit_programmer(
    Extension(ref state): Extension<AppState>,
    Path(id): Path<i64>,
    Json(programmer): Json<ProgrammerDto>,
) -> Result<Response, Error> {
    let result = state
        .db
        .transaction(move |conn| services::programmers::edit_by_id(conn, id, &programmer))
        .await?;

    Ok(validator_response(result))
}

async fn programmer_details(
    Extension(ref state): Extension<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, Error> {
    let details = state
        .db
        .interact(move |conn| services::programmers::find_by_id(conn, id))
        .await?;

    match details {
        Some(details) => Ok((StatusCode::OK, Json(details)).into_response()),
        None => Ok((
            StatusCode::BAD_REQUEST,
            Json(ErrorBody::new(messages::NO_PROGRAMMER_FOUND)),
        )
            .into_response()),
    }
}

async fn add_programmer_by_project_manager(
    Extension(ref state): Extension<AppState>,
    Path(project_manager_id): Path<i64>,
    Json(programmer): Json<Option<ProgrammerDto>>,
) -> Result<Response, Error> {
    let result = state
        .db
        .transaction(move |conn| {
            services::programmers::save_by_project_manager_id(
                conn,
                programmer.as_ref(),
                project_manager_id,
            )
        })
        .await?;

    Ok(validator_response(result))
}

async fn delete_programmer(
    Extension(ref state): Extension<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, Error> {
    let deleted = state
        .db
        .transaction(move |conn| services::programmers::delete_by_id(conn, id))
        .await?;

    if !deleted {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(ErrorBody::new(messages::NO_PROGRAMMER_FOUND)),
        )
            .into_response());
    }
    Ok((
        StatusCode::OK,
        Json(SuccessBody::new(messages::delete_success("programmer"))),
    )
        .into_response())
}

pub fn configure() -> Router {
    Router::new()
        .route("/programmers", get(list_programmers))
        .route("/add-programmers", post(add_programmer))
        .route("/edit-programmers/:id", post(edit_programmer))
        .route("/details-programmers/:id", get(programmer_details))
        .route(
            "/project-managers/:project_manager_id/add-programmers",
            post(add_programmer_by_project_manager),
        )
        .route("/delete-programmers/:id", delete(delete_programmer))
}
