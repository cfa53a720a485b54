use corkboard_core::error::CoreError;
use corkboard_service::error::ServiceError;
use corkboard_store::StoreError;
use salvo::http::StatusCode;
use salvo::writing::Json;
use serde::Serialize;
use thiserror::Error;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] ServiceError),

    #[error(transparent)]
    CoreError(#[from] CoreError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

/// JSON body rendered for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    /// ## Summary
    /// Maps the error to the HTTP status the client should see.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ServiceError(err) => service_status(err),
            Self::CoreError(err) => core_status(err),
        }
    }
}

fn service_status(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::ValidationError(_) => StatusCode::BAD_REQUEST,
        ServiceError::MissingApiKey => StatusCode::UNAUTHORIZED,
        ServiceError::CoreError(err) => core_status(err),
        ServiceError::StoreError(StoreError::EventNotFound(_)) => StatusCode::NOT_FOUND,
        ServiceError::StoreError(StoreError::Poisoned) | ServiceError::FeedError(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn core_status(err: &CoreError) -> StatusCode {
    match err {
        CoreError::InvalidWindow(_) | CoreError::ValidationError(_) => StatusCode::BAD_REQUEST,
        CoreError::NotFound(_) => StatusCode::NOT_FOUND,
        CoreError::InvariantViolation(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// ## Summary
/// Writes the mapped status and a JSON error body onto the response.
/// Server-side failures get a generic body; the detail stays in the log.
pub fn render_error(res: &mut salvo::Response, err: &AppError) {
    let status = err.status_code();
    res.status_code(status);
    if status.is_server_error() {
        tracing::error!(error = %err, "Request failed");
        res.render(Json(ErrorResponse {
            error: "Internal server error".to_owned(),
        }));
    } else {
        tracing::debug!(error = %err, status = %status, "Request rejected");
        res.render(Json(ErrorResponse {
            error: err.to_string(),
        }));
    }
}
