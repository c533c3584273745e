use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use devdesk_http_errors::ErrorBody;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Database Error: {0}")]
    DbErr(#[from] diesel::result::Error),

    #[error("Database Pool Error: {0}")]
    DbPool(#[from] deadpool_diesel::PoolError),

    /// Unknown id in an edit/delete/association target. The original API
    /// surfaces these as 400 with the "No ... found!" message.
    #[error("{0}")]
    NotFound(&'static str),
}

impl Error {
    pub fn response_tuple(&self) -> (StatusCode, ErrorBody) {
        let status = match self {
            Error::NotFound(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, ErrorBody::new(self.to_string()))
    }
}

impl From<deadpool_diesel::InteractError> for Error {
    fn from(e: deadpool_diesel::InteractError) -> Self {
        std::panic::panic_any(e)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (code, json) = self.response_tuple();
        (code, Json(json)).into_response()
    }
}
