use poem::{error::NotFoundError, http::StatusCode, web, IntoResponse, Response};
use poem_openapi::{
    error::ParseRequestPayloadError,
    payload::Json,
    {ApiResponse, Object, Tags},
};
use serde::Serialize;

pub const DATABASE_NOT_CONNECTED: &str = "Database not connected";

#[derive(Tags)]
pub enum ApiTags {
    /// Health check endpoints
    HealthCheck,
    /// Check-in records
    CheckIns,
    /// AI summary of check-ins
    Analysis,
}

/// Error payload shared by every endpoint
#[derive(Debug, Object, Clone, Eq, PartialEq, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(ApiResponse)]
pub enum JsonError {
    #[oai(status = 500)]
    InternalServerError(Json<ErrorBody>),
}

impl JsonError {
    pub fn internal_server_error(detail: impl ToString) -> Self {
        JsonError::InternalServerError(Json(ErrorBody {
            detail: detail.to_string(),
        }))
    }

    pub fn database_not_connected() -> Self {
        Self::internal_server_error(DATABASE_NOT_CONNECTED)
    }
}

impl From<anyhow::Error> for JsonError {
    fn from(err: anyhow::Error) -> Self {
        JsonError::internal_server_error(err)
    }
}

fn detail_response(detail: impl ToString, status: StatusCode) -> Response {
    web::Json(ErrorBody {
        detail: detail.to_string(),
    })
    .with_status(status)
    .into_response()
}

/// Request bodies that fail to parse are rejected with 422 and the parser's
/// message, before any handler runs.
pub async fn unprocessable_payload(err: ParseRequestPayloadError) -> Response {
    detail_response(err, StatusCode::UNPROCESSABLE_ENTITY)
}

/// Turns routing misses into the same `{"detail": ...}` shape the API uses.
pub async fn not_found(_: NotFoundError) -> Response {
    detail_response("Not Found", StatusCode::NOT_FOUND)
}
