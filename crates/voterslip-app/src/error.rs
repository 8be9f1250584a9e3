use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Depot, Request, Response, async_trait};
use serde::Serialize;
use thiserror::Error;

use voterslip_service::error::ServiceError;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] ServiceError),

    #[error(transparent)]
    StoreError(#[from] voterslip_store::error::StoreError),

    #[error(transparent)]
    CoreError(#[from] voterslip_core::error::CoreError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

/// ## Summary
/// Error response payload
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[async_trait]
impl salvo::Writer for AppError {
    /// Renders the JSON error body. Upstream detail stays in the log; the
    /// response carries only a generic message.
    async fn write(mut self, _req: &mut Request, _depot: &mut Depot, res: &mut Response) {
        let (status, message) = match &self {
            Self::StoreError(_) | Self::ServiceError(ServiceError::StoreError(_)) => {
                (StatusCode::BAD_GATEWAY, "Lookup store unavailable")
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        };

        tracing::error!(error = %self, "Request failed");

        res.status_code(status);
        res.render(Json(ErrorResponse {
            error: message.to_owned(),
        }));
    }
}
