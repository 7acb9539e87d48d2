use crate::{
    checkins::CheckInStore,
    utils::{ApiTags, JsonError},
};
use poem_openapi::{payload::Json, Object, OpenApi};
use std::sync::Arc;
use tracing::warn;

#[derive(Debug, Object, Clone, Eq, PartialEq)]
pub struct HealthStatus {
    pub status: String,
    pub db: String,
}

pub struct HealthCheck {
    store: Option<Arc<dyn CheckInStore>>,
}

#[OpenApi(tag = "ApiTags::HealthCheck")]
impl HealthCheck {
    pub fn new(store: Option<Arc<dyn CheckInStore>>) -> Self {
        Self { store }
    }

    #[oai(path = "/health", method = "get", operation_id = "health::check")]
    async fn health(&self) -> Result<Json<HealthStatus>, JsonError> {
        let store = match &self.store {
            Some(store) => store,
            None => return Err(JsonError::database_not_connected()),
        };

        if let Err(err) = store.ping().await {
            warn!(error = %err, "Database health check failed");
            return Err(JsonError::internal_server_error(err));
        }

        Ok(Json(HealthStatus {
            status: "connected".to_string(),
            db: "ok".to_string(),
        }))
    }
}
