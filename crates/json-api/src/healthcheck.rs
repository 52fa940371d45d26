//! Healthcheck Handler

use salvo::prelude::*;
use serde::{Deserialize, Serialize};

/// Liveness payload; does not touch the database.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[handler]
pub(crate) async fn handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
