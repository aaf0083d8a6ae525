//! Dependency grouping for application construction.
//!
//! Not a builder: no build steps, no defaults, no hidden logic. This struct
//! is the dependency manifest. Every adapter is constructed once at startup
//! and injected here; nothing in the application layer reaches for a
//! process-wide singleton.

use std::sync::Arc;

use sc_core::ports::{
    ArtifactRepositoryPort, BlobStorePort, ClockPort, CodecPort, StatusCheckRepositoryPort,
};

#[derive(Clone)]
pub struct AppDeps {
    // Artifact dependencies
    pub artifact_repo: Arc<dyn ArtifactRepositoryPort>,
    pub blob_store: Arc<dyn BlobStorePort>,
    pub codec: Arc<dyn CodecPort>,

    // Status dependencies
    pub status_repo: Arc<dyn StatusCheckRepositoryPort>,

    // System dependencies
    pub clock: Arc<dyn ClockPort>,
}
