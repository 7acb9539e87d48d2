use poem::{
    endpoint::StaticFilesEndpoint,
    handler,
    web::{Data, StaticFileRequest, StaticFileResponse},
    EndpointExt, Result, Route,
};
use std::path::{Path, PathBuf};

#[derive(Clone)]
struct IndexDocument(PathBuf);

// client-side routes all resolve to the same document
#[handler]
async fn index_fallback(
    req: StaticFileRequest,
    Data(index): Data<&IndexDocument>,
) -> Result<StaticFileResponse> {
    Ok(req.create_response(&index.0, true, false)?)
}

/// Routes for a prebuilt single page app: `/assets/*` straight from disk,
/// anything else answered with `index.html`.
pub fn frontend(static_dir: &Path) -> Route {
    Route::new()
        .nest("/assets", StaticFilesEndpoint::new(static_dir.join("assets")))
        .nest(
            "/",
            index_fallback.data(IndexDocument(static_dir.join("index.html"))),
        )
}
