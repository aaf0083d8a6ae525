use std::sync::Arc;

use anyhow::Result;
use sc_core::ids::StatusCheckId;
use sc_core::ports::{ClockPort, StatusCheckRepositoryPort};
use sc_core::status::StatusCheck;

pub struct RecordStatusCheckUseCase {
    status_repo: Arc<dyn StatusCheckRepositoryPort>,
    clock: Arc<dyn ClockPort>,
}

impl RecordStatusCheckUseCase {
    pub fn new(status_repo: Arc<dyn StatusCheckRepositoryPort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { status_repo, clock }
    }

    pub async fn execute(&self, client_name: String) -> Result<StatusCheck> {
        let check = StatusCheck::new(StatusCheckId::new(), client_name, self.clock.now_ms());
        self.status_repo.insert(&check).await?;
        Ok(check)
    }
}
