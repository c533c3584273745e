use axum::{http::StatusCode, response::IntoResponse, routing::get, Extension, Json, Router};
use diesel::prelude::*;
use serde::Serialize;

use devdesk_db::PoolExt;

use crate::{error::Error, shared_state::AppState};

#[derive(Serialize)]
struct HealthResponse {
    /// If the database connection is ok
    database: bool,
    /// If all the other fields indicate healthy status.
    healthy: bool,
}

async fn health(Extension(ref state): Extension<AppState>) -> impl IntoResponse {
    let db_result = state
        .db
        .interact(|conn| {
            diesel::sql_query("SELECT 1").execute(conn)?;
            Ok::<_, Error>(())
        })
        .await;

    (
        StatusCode::OK,
        Json(HealthResponse {
            healthy: db_result.is_ok(),
            database: db_result.is_ok(),
        }),
    )
}

pub fn configure() -> Router {
    Router::new().route("/health", get(health))
}
