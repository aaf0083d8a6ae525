use std::convert::Infallible;

use log::error;
use serde::Serialize;
use warp::http::StatusCode;
use warp::{Rejection, Reply};

/// Error body shape shared by every failure response.
#[derive(Debug, Serialize)]
pub struct ErrorMessage {
    pub detail: String,
}

pub fn error_reply(status: StatusCode, detail: &str) -> warp::reply::Response {
    warp::reply::with_status(
        warp::reply::json(&ErrorMessage {
            detail: detail.to_string(),
        }),
        status,
    )
    .into_response()
}

/// Map rejections raised by warp itself onto the same JSON error shape the
/// handlers use.
pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (status, detail) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not Found")
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        // The multipart filter bounds the request body just above the upload
        // limit; anything that trips it is an oversized upload.
        (StatusCode::BAD_REQUEST, "File size exceeds 10MB limit")
    } else if err
        .find::<warp::filters::body::BodyDeserializeError>()
        .is_some()
    {
        (StatusCode::BAD_REQUEST, "Invalid request body")
    } else if err.find::<warp::reject::MissingHeader>().is_some()
        || err.find::<warp::reject::InvalidHeader>().is_some()
    {
        (StatusCode::BAD_REQUEST, "Invalid request headers")
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
    } else {
        error!("unhandled rejection: {:?}", err);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
    };

    Ok(error_reply(status, detail))
}
