use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub careers: usize,
    pub skills: usize,
    pub enhancer_enabled: bool,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}
