//! Application configuration domain model

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Upload size bound applied before any write.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Application configuration
///
/// Loaded once at startup; every infrastructure adapter is constructed from
/// this value and injected explicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub bind_addr: String,

    /// Root directory for stored artifact blobs
    pub data_dir: PathBuf,

    /// SQLite database location
    pub database_url: String,

    /// Maximum accepted upload size in bytes
    pub max_upload_bytes: u64,

    /// Comma-separated allowed CORS origins; `*` allows any origin
    pub cors_origins: String,
}

impl AppConfig {
    pub fn origin_list(&self) -> Vec<&str> {
        self.cors_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .collect()
    }

    pub fn allow_any_origin(&self) -> bool {
        self.origin_list().contains(&"*")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8000".to_string(),
            data_dir: PathBuf::from("data"),
            database_url: "data/skycodec.db".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            cors_origins: "*".to_string(),
        }
    }
}
