use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

/// GET /
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Creator Console Portfolio API running"
    }))
}

/// Fixed connectivity report. The service has no database, so the
/// database fields are always null and nothing is actually probed.
#[derive(Debug, Serialize)]
pub struct ProbeReport {
    pub backend: &'static str,
    pub database: &'static str,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub connection_status: &'static str,
    pub collections: Vec<String>,
}

impl ProbeReport {
    fn without_database() -> Self {
        ProbeReport {
            backend: "\u{2705} Running",
            database: "\u{2139}\u{fe0f} Not used for this app",
            database_url: None,
            database_name: None,
            connection_status: "Not Required",
            collections: Vec::new(),
        }
    }
}

/// GET /test
pub async fn probe_handler() -> Json<ProbeReport> {
    Json(ProbeReport::without_database())
}
