use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Identifier for one recorded status check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusCheckId(String);

impl StatusCheckId {
    pub fn new() -> Self {
        StatusCheckId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Default for StatusCheckId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for StatusCheckId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for StatusCheckId {
    fn from(s: String) -> Self {
        StatusCheckId(s)
    }
}
