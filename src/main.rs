use std::net::SocketAddr;

use anyhow::Result;
use log::info;
use tracing_subscriber::EnvFilter;

use skycodec::bootstrap;
use skycodec::infrastructure::web;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = sc_infra::config::load_config()?;
    let deps = bootstrap::build_app_deps(&config)?;

    let addr: SocketAddr = config.bind_addr.parse()?;
    let api = web::webserver::api(deps, &config);

    info!("skycodec listening on http://{}", addr);
    warp::serve(api).run(addr).await;

    Ok(())
}
