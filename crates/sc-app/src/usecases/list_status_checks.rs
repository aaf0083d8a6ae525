use std::sync::Arc;

use anyhow::Result;
use sc_core::ports::StatusCheckRepositoryPort;
use sc_core::status::StatusCheck;

/// Listings are capped rather than unbounded.
const MAX_RESULTS: i64 = 1000;

pub struct ListStatusChecksUseCase {
    status_repo: Arc<dyn StatusCheckRepositoryPort>,
}

impl ListStatusChecksUseCase {
    pub fn new(status_repo: Arc<dyn StatusCheckRepositoryPort>) -> Self {
        Self { status_repo }
    }

    pub async fn execute(&self) -> Result<Vec<StatusCheck>> {
        self.status_repo.list_recent(MAX_RESULTS).await
    }
}
