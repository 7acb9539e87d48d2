use super::model::{CheckIn, CreatedCheckIn, NewCheckIn, SeedResult};
use super::seed::sample_check_ins;
use super::store::CheckInStore;
use crate::utils::{ApiTags, JsonError};
use poem_openapi::{payload::Json, OpenApi};
use std::sync::Arc;
use tracing::{error, info};

pub struct CheckIns {
    store: Option<Arc<dyn CheckInStore>>,
}

#[OpenApi(tag = "ApiTags::CheckIns")]
impl CheckIns {
    pub fn new(store: Option<Arc<dyn CheckInStore>>) -> Self {
        Self { store }
    }

    fn store(&self) -> Result<&dyn CheckInStore, JsonError> {
        match &self.store {
            Some(store) => Ok(store.as_ref()),
            None => Err(JsonError::database_not_connected()),
        }
    }

    // list every check-in, newest first
    #[oai(path = "/checkins", method = "get", operation_id = "checkins::list")]
    async fn list(&self) -> Result<Json<Vec<CheckIn>>, JsonError> {
        let rows = match self.store()?.list().await {
            Ok(rows) => rows,
            Err(e) => {
                error!(error = %e, "Failed to list check-ins");
                return Err(JsonError::internal_server_error(e));
            }
        };

        Ok(Json(rows.into_iter().map(CheckIn::from).collect()))
    }

    // record a new check-in
    #[oai(path = "/checkins", method = "post", operation_id = "checkins::create")]
    async fn create(&self, payload: Json<NewCheckIn>) -> Result<Json<CreatedCheckIn>, JsonError> {
        let row = match self.store()?.insert(&payload.0).await {
            Ok(row) => row,
            Err(e) => {
                error!(nickname = %payload.nickname, error = %e, "Failed to save check-in");
                return Err(JsonError::internal_server_error(e));
            }
        };

        Ok(Json(CreatedCheckIn::from(row)))
    }

    // insert the demo records, every call adds another copy
    #[oai(path = "/seed", method = "post", operation_id = "checkins::seed")]
    async fn seed(&self) -> Result<Json<SeedResult>, JsonError> {
        let samples = sample_check_ins();
        let count = self.store()?.insert_many(&samples).await.map_err(|e| {
            error!(error = %e, "Seeding failed");
            JsonError::from(e)
        })?;

        info!(count, "Seeded sample check-ins");
        Ok(Json(SeedResult {
            message: "Success".to_string(),
            count,
        }))
    }
}
