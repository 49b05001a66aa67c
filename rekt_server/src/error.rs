use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rekt_core::ValuationError;
use serde::Serialize;
use utoipa::ToSchema;

pub const ADDRESS_REQUIRED: &str = "Wallet address is required";
pub const FETCH_FAILED: &str = "Failed to fetch wallet data";

/// Error body returned to clients. Only `error` is serialized.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorServer {
    pub error: String,
    #[serde(skip)]
    pub status: u16,
}

impl std::fmt::Display for ErrorServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl IntoResponse for ErrorServer {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

// Upstream detail stays in the server log; the client only gets the generic message.
impl From<ValuationError> for ErrorServer {
    fn from(err: ValuationError) -> Self {
        match err {
            ValuationError::InvalidInput => ErrorServer {
                error: ADDRESS_REQUIRED.to_string(),
                status: StatusCode::BAD_REQUEST.into(),
            },
            ValuationError::UpstreamUnavailable { .. } => ErrorServer {
                error: FETCH_FAILED.to_string(),
                status: StatusCode::INTERNAL_SERVER_ERROR.into(),
            },
        }
    }
}
