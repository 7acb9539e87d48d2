use std::sync::Arc;

mod handler;
mod model;
mod seed;
pub mod store;

pub use store::{CheckInStore, PgCheckInStore};

pub fn checkins_api(store: Option<Arc<dyn CheckInStore>>) -> handler::CheckIns {
    handler::CheckIns::new(store)
}
