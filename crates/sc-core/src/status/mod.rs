use serde::{Deserialize, Serialize};

use crate::ids::StatusCheckId;

/// Append-only client liveness ping, kept for operational auditing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCheck {
    pub id: StatusCheckId,
    pub client_name: String,
    pub created_at_ms: i64,
}

impl StatusCheck {
    pub fn new(id: StatusCheckId, client_name: String, created_at_ms: i64) -> Self {
        Self {
            id,
            client_name,
            created_at_ms,
        }
    }
}
