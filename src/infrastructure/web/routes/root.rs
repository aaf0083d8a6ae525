use serde::Serialize;
use warp::Filter;

#[derive(Serialize)]
struct ApiInfo {
    message: &'static str,
}

pub fn route() -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    warp::path!("api")
        .and(warp::get())
        .map(|| warp::reply::json(&ApiInfo {
            message: "SkyCodec API",
        }))
}
