use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roster_core::RepositoryError;
use serde::Serialize;
use tracing::warn;

/// Body of every non-2xx response produced by the developer routes.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// A failed request on its way out as an HTTP response.
#[derive(Debug)]
pub enum ApiError {
    /// The store refused the operation.
    Repository(RepositoryError),
    /// The request could not be decoded (bad path id, malformed or
    /// mistyped JSON, wrong content type). Keeps the extractor's status.
    Rejected { status: StatusCode, message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
            Self::Repository(
                RepositoryError::InvalidInput(_) | RepositoryError::UnknownTier(_),
            ) => StatusCode::BAD_REQUEST,
            Self::Rejected { status, .. } => *status,
        }
    }

    fn message(self) -> String {
        match self {
            Self::Repository(error) => error.to_string(),
            Self::Rejected { message, .. } => message,
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(error: RepositoryError) -> Self {
        Self::Repository(error)
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        warn!(%rejection, "path rejected");
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(%rejection, "request body rejected");
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.message(),
        };
        (status, axum::Json(body)).into_response()
    }
}

/// `axum::Json` whose rejection is reported as an [`ApiError`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);

/// `axum::extract::Path` whose rejection is reported as an [`ApiError`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct AppPath<T>(pub T);
