//! Startup wiring: constructs every infrastructure adapter once and groups
//! them into [`AppDeps`]. Lifecycle is tied to process start; nothing is a
//! module-level singleton.

use std::fs;
use std::sync::Arc;

use anyhow::{Context, Result};
use sc_app::AppDeps;
use sc_core::AppConfig;
use sc_infra::codec::PassthroughCodec;
use sc_infra::db::{
    init_db_pool, DieselArtifactRepository, DieselSqliteExecutor, DieselStatusCheckRepository,
};
use sc_infra::fs::FsArtifactStore;
use sc_infra::SystemClock;

pub fn build_app_deps(config: &AppConfig) -> Result<AppDeps> {
    fs::create_dir_all(&config.data_dir).with_context(|| {
        format!("failed to create data dir {}", config.data_dir.display())
    })?;

    let pool = init_db_pool(&config.database_url)?;
    let executor = DieselSqliteExecutor::new(pool);

    Ok(AppDeps {
        artifact_repo: Arc::new(DieselArtifactRepository::new(executor.clone())),
        blob_store: Arc::new(FsArtifactStore::new(config.data_dir.clone())),
        codec: Arc::new(PassthroughCodec),
        status_repo: Arc::new(DieselStatusCheckRepository::new(executor)),
        clock: Arc::new(SystemClock),
    })
}
