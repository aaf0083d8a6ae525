use std::convert::Infallible;
use std::sync::Arc;

use log::error;
use sc_app::usecases::{RetrieveArtifactUseCase, RetrievedArtifact};
use sc_core::artifact::RetrieveError;
use sc_core::FileId;
use warp::http::StatusCode;
use warp::hyper::Body;
use warp::{Filter, Rejection, Reply};

use super::super::response::error_reply;

/// Download route
pub fn route(
    retrieve: Arc<RetrieveArtifactUseCase>,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::path!("api" / "download" / String)
        .and(warp::get())
        .and(with_retrieve(retrieve))
        .and_then(handle_download)
}

fn with_retrieve(
    retrieve: Arc<RetrieveArtifactUseCase>,
) -> impl Filter<Extract = (Arc<RetrieveArtifactUseCase>,), Error = Infallible> + Clone {
    warp::any().map(move || retrieve.clone())
}

async fn handle_download(
    file_id: String,
    retrieve: Arc<RetrieveArtifactUseCase>,
) -> Result<warp::reply::Response, Rejection> {
    let file_id = FileId::from(file_id);
    let artifact = match retrieve.execute(&file_id).await {
        Ok(artifact) => artifact,
        Err(RetrieveError::NotFound(_)) => {
            return Ok(error_reply(StatusCode::NOT_FOUND, "File not found"));
        }
        Err(err) => {
            error!("Failed to retrieve artifact {}: {:?}", file_id, err);
            return Ok(error_reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
            ));
        }
    };

    match binary_response(artifact) {
        Ok(response) => Ok(response),
        Err(err) => {
            error!("Failed to build download response: {}", err);
            Ok(error_reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
            ))
        }
    }
}

fn binary_response(
    artifact: RetrievedArtifact,
) -> Result<warp::reply::Response, warp::http::Error> {
    warp::http::Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/octet-stream")
        .header(
            "Content-Disposition",
            format!(
                "attachment; filename=\"{}\"",
                artifact.record.download_name()
            ),
        )
        .header("Content-Length", artifact.bytes.len().to_string())
        .body(Body::from(artifact.bytes))
}
