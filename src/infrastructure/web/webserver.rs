//! Route assembly for the SkyCodec HTTP API.

use std::sync::Arc;

use sc_app::usecases::{
    IngestArtifactUseCase, ListStatusChecksUseCase, RecordStatusCheckUseCase,
    RetrieveArtifactUseCase,
};
use sc_app::AppDeps;
use sc_core::AppConfig;
use warp::filters::BoxedFilter;
use warp::{Filter, Reply};

use super::response::handle_rejection;
use super::routes::{compress, download, root, status};

/// Build the complete API filter from the injected dependencies.
///
/// Boxed so the composed route tree has a nameable type for `warp::serve`
/// and for driving the stack in tests.
pub fn api(deps: AppDeps, config: &AppConfig) -> BoxedFilter<(warp::reply::Response,)> {
    let ingest = Arc::new(IngestArtifactUseCase::new(
        deps.blob_store.clone(),
        deps.artifact_repo.clone(),
        deps.codec.clone(),
        deps.clock.clone(),
        config.max_upload_bytes,
    ));
    let retrieve = Arc::new(RetrieveArtifactUseCase::new(
        deps.artifact_repo.clone(),
        deps.blob_store.clone(),
    ));
    let record_status = Arc::new(RecordStatusCheckUseCase::new(
        deps.status_repo.clone(),
        deps.clock.clone(),
    ));
    let list_status = Arc::new(ListStatusChecksUseCase::new(deps.status_repo));

    root::route()
        .or(compress::route(ingest, config.max_upload_bytes))
        .or(download::route(retrieve))
        .or(status::routes(record_status, list_status))
        .recover(handle_rejection)
        .with(cors_config(config))
        .map(|reply| Reply::into_response(reply))
        .boxed()
}

fn cors_config(config: &AppConfig) -> warp::cors::Builder {
    let cors = warp::cors()
        .allow_methods(vec!["GET", "POST"])
        .allow_headers(vec!["content-type"]);

    if config.allow_any_origin() {
        cors.allow_any_origin()
    } else {
        cors.allow_origins(config.origin_list())
            .allow_credentials(true)
    }
}
