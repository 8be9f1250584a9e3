use thiserror::Error;

/// Service layer errors
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    StoreError(#[from] voterslip_store::error::StoreError),

    #[error(transparent)]
    CoreError(#[from] voterslip_core::error::CoreError),

    #[error("Collation unavailable: {0}")]
    Collation(String),

    #[error("Share link error: {0}")]
    ShareLink(String),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
