use axum::{
    extract::rejection::JsonRejection,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use todos_api::v1::ValidationProblem;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("todo not found")]
    NotFound,

    #[error("validation failed for {} field(s)", .0.errors.len())]
    Validation(ValidationProblem),

    #[error(transparent)]
    Json(#[from] JsonRejection),
}

impl From<ValidationProblem> for ApiError {
    fn from(problem: ValidationProblem) -> Self {
        Self::Validation(problem)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
            Self::Validation(problem) => (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, ValidationProblem::CONTENT_TYPE)],
                Json(problem),
            )
                .into_response(),
            Self::Json(rejection) => rejection.into_response(),
        }
    }
}
