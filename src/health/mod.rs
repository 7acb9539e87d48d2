use crate::checkins::CheckInStore;
use std::sync::Arc;

pub mod handler;

pub fn health_checks(store: Option<Arc<dyn CheckInStore>>) -> handler::HealthCheck {
    handler::HealthCheck::new(store)
}
