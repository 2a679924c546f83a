use axum::Json;
use serde_json::{json, Value};

/// GET /health
///
/// Liveness check for the screening service. Touches neither the decoder nor the
/// extractors, so it answers even while uploads are being processed.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "screener-api",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
