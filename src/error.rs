use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use entities::InvalidGenre;
use log::error;
use sea_orm::DbErr;
use thiserror::Error;

use crate::responses::ErrorResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    InvalidGenre(#[from] InvalidGenre),

    /// Malformed body, query string or path parameter.
    #[error("{0}")]
    Validation(String),

    #[error("Band with id {0} not found!")]
    NotFound(i64),

    #[error("Database error: {0}")]
    Storage(#[from] DbErr),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidGenre(_) | AppError::Validation(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self {
            AppError::Storage(err) => {
                error!("Error in database connection: {}", err);
                "Internal Server Error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(ErrorResponse { detail })).into_response()
    }
}
