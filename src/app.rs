use crate::{analyze, checkins, checkins::CheckInStore, config::Config, frontend, health, utils};
use poem::{
    endpoint::BoxEndpoint,
    middleware::{Cors, Tracing},
    EndpointExt, IntoEndpoint, Route,
};
use poem_openapi::OpenApiService;
use std::sync::Arc;
use tracing::{info, warn};

/// Builds the whole HTTP surface. `store` is `None` when the database could
/// not be reached at startup.
pub fn build_app(config: &Config, store: Option<Arc<dyn CheckInStore>>) -> BoxEndpoint<'static> {
    let health_api = health::health_checks(store.clone());
    let checkins_api = checkins::checkins_api(store);
    let analyze_api = analyze::analyze_api(config);

    let api_service = OpenApiService::new(
        (health_api, checkins_api, analyze_api),
        "Check-in Passport",
        "1.0",
    )
    .server(format!("{}/api", config.host));
    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint_yaml();

    let mut route = Route::new()
        .nest(
            "/api",
            api_service
                .into_endpoint()
                .catch_error(utils::unprocessable_payload),
        )
        .nest("/swagger", ui)
        .nest("/swagger/spec", spec);

    if config.has_frontend() {
        info!(static_dir = %config.static_dir.display(), "Serving frontend bundle");
        route = route.nest("/", frontend::frontend(&config.static_dir));
    } else {
        warn!(static_dir = %config.static_dir.display(), "Frontend bundle not found, serving API only");
    }

    route
        .catch_error(utils::not_found)
        .with(Cors::new())
        .with(Tracing)
        .boxed()
}
