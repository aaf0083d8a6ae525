use std::sync::Arc;

use log::error;
use sc_app::usecases::{ListStatusChecksUseCase, RecordStatusCheckUseCase};
use sc_core::StatusCheck;
use serde::{Deserialize, Serialize};
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

use super::super::response::error_reply;

#[derive(Deserialize)]
struct StatusCheckRequest {
    client_name: String,
}

#[derive(Serialize)]
struct StatusCheckResponse {
    id: String,
    client_name: String,
    created_at_ms: i64,
}

impl From<&StatusCheck> for StatusCheckResponse {
    fn from(check: &StatusCheck) -> Self {
        Self {
            id: check.id.to_string(),
            client_name: check.client_name.clone(),
            created_at_ms: check.created_at_ms,
        }
    }
}

pub fn routes(
    record: Arc<RecordStatusCheckUseCase>,
    list: Arc<ListStatusChecksUseCase>,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    create_route(record).or(list_route(list))
}

fn create_route(
    record: Arc<RecordStatusCheckUseCase>,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::path!("api" / "status")
        .and(warp::post())
        .and(warp::body::json())
        .and(warp::any().map(move || record.clone()))
        .and_then(handle_create)
}

fn list_route(
    list: Arc<ListStatusChecksUseCase>,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::path!("api" / "status")
        .and(warp::get())
        .and(warp::any().map(move || list.clone()))
        .and_then(handle_list)
}

async fn handle_create(
    request: StatusCheckRequest,
    record: Arc<RecordStatusCheckUseCase>,
) -> Result<warp::reply::Response, Rejection> {
    match record.execute(request.client_name).await {
        Ok(check) => Ok(warp::reply::json(&StatusCheckResponse::from(&check)).into_response()),
        Err(err) => {
            error!("Failed to record status check: {:?}", err);
            Ok(error_reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
            ))
        }
    }
}

async fn handle_list(
    list: Arc<ListStatusChecksUseCase>,
) -> Result<warp::reply::Response, Rejection> {
    match list.execute().await {
        Ok(checks) => {
            let body: Vec<StatusCheckResponse> =
                checks.iter().map(StatusCheckResponse::from).collect();
            Ok(warp::reply::json(&body).into_response())
        }
        Err(err) => {
            error!("Failed to list status checks: {:?}", err);
            Ok(error_reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
            ))
        }
    }
}
