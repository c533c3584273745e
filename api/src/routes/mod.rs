use axum::{http::StatusCode, response::IntoResponse, response::Response, Json, Router};
use serde::Deserialize;

use devdesk_http_errors::{ErrorBody, SuccessBody};

use crate::validator::ValidatorResult;

mod health;
mod programmer;
mod project;
mod project_manager;

/// Sort parameters shared by the list endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct ListParams {
    pub sortby: Option<String>,
    pub order: Option<String>,
}

/// 200 with a success envelope, or 400 with the aggregated error message.
pub(crate) fn validator_response(result: ValidatorResult) -> Response {
    if result.valid {
        (StatusCode::OK, Json(SuccessBody::new(result.message))).into_response()
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody::new(result.message)),
        )
            .into_response()
    }
}

pub fn configure_routes(router: Router) -> Router {
    router.merge(health::configure()).nest(
        "/api",
        programmer::configure()
            .merge(project_manager::configure())
            .merge(project::configure()),
    )
}
