use std::convert::Infallible;
use std::sync::Arc;

use bytes::BufMut;
use futures_util::TryStreamExt;
use log::error;
use sc_app::usecases::IngestArtifactUseCase;
use sc_core::artifact::IngestError;
use sc_core::ArtifactRecord;
use serde::Serialize;
use warp::http::StatusCode;
use warp::multipart::{FormData, Part};
use warp::{Filter, Rejection, Reply};

use super::super::response::error_reply;

/// Slack on top of the upload bound so the workflow's own size check is the
/// one that produces the 400 for ordinary oversized files, not the transport.
const MULTIPART_OVERHEAD_BYTES: u64 = 64 * 1024;

#[derive(Serialize)]
struct CompressionResponse {
    file_id: String,
    original_name: String,
    original_size: i64,
    compressed_size: i64,
    compression_ratio: f64,
    message: String,
}

impl From<&ArtifactRecord> for CompressionResponse {
    fn from(record: &ArtifactRecord) -> Self {
        Self {
            file_id: record.file_id.to_string(),
            original_name: record.original_name.clone(),
            original_size: record.original_size,
            compressed_size: record.transformed_size,
            compression_ratio: record.ratio,
            message: "File compressed successfully".to_string(),
        }
    }
}

/// Upload route
pub fn route(
    ingest: Arc<IngestArtifactUseCase>,
    max_upload_bytes: u64,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::path!("api" / "compress")
        .and(warp::post())
        .and(warp::multipart::form().max_length(max_upload_bytes + MULTIPART_OVERHEAD_BYTES))
        .and(with_ingest(ingest))
        .and_then(handle_compress)
}

fn with_ingest(
    ingest: Arc<IngestArtifactUseCase>,
) -> impl Filter<Extract = (Arc<IngestArtifactUseCase>,), Error = Infallible> + Clone {
    warp::any().map(move || ingest.clone())
}

async fn handle_compress(
    mut form: FormData,
    ingest: Arc<IngestArtifactUseCase>,
) -> Result<warp::reply::Response, Rejection> {
    let file_part = loop {
        match form.try_next().await {
            Ok(Some(part)) if part.name() == "file" => break Some(part),
            Ok(Some(_)) => continue,
            Ok(None) => break None,
            Err(e) => {
                error!("Failed to read multipart form: {}", e);
                return Ok(error_reply(
                    StatusCode::BAD_REQUEST,
                    "Invalid multipart form data",
                ));
            }
        }
    };

    let Some(part) = file_part else {
        return Ok(error_reply(StatusCode::BAD_REQUEST, "Missing file field"));
    };

    let original_name = part.filename().unwrap_or("file").to_string();
    let bytes = match collect_part(part).await {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Failed to read upload body: {}", e);
            return Ok(error_reply(
                StatusCode::BAD_REQUEST,
                "Invalid multipart form data",
            ));
        }
    };

    match ingest.execute(&original_name, bytes).await {
        Ok(record) => Ok(warp::reply::json(&CompressionResponse::from(&record)).into_response()),
        Err(IngestError::PayloadTooLarge { .. }) => Ok(error_reply(
            StatusCode::BAD_REQUEST,
            "File size exceeds 10MB limit",
        )),
        Err(IngestError::EmptyFile) => Ok(error_reply(
            StatusCode::BAD_REQUEST,
            "Uploaded file is empty",
        )),
        Err(err) => {
            error!("Compression ingest failed: {:?}", err);
            Ok(error_reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
            ))
        }
    }
}

async fn collect_part(part: Part) -> Result<Vec<u8>, warp::Error> {
    part.stream()
        .try_fold(Vec::new(), |mut acc, buf| async move {
            acc.put(buf);
            Ok(acc)
        })
        .await
}
