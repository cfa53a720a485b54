use thiserror::Error;

/// Service layer errors - combines all error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    CoreError(#[from] corkboard_core::error::CoreError),

    #[error(transparent)]
    StoreError(#[from] corkboard_store::StoreError),

    #[error(transparent)]
    FeedError(#[from] corkboard_feed::FeedError),

    #[error("Missing api key")]
    MissingApiKey,

    #[error("Validation error: {0}")]
    ValidationError(String),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
