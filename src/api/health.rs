use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::database::JsonDatabase;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: i64,
    /// Whether the data directory is reachable
    pub storage: bool,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Data directory unavailable", body = HealthResponse)
    )
)]
pub async fn health_check(db: web::Data<JsonDatabase>) -> impl Responder {
    let storage = tokio::fs::metadata(db.data_dir())
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false);

    let body = HealthResponse {
        status: if storage { "healthy" } else { "degraded" }.to_string(),
        service: "recipe-service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().timestamp(),
        storage,
    };

    if storage {
        HttpResponse::Ok().json(body)
    } else {
        log::warn!("⚠️  Health check: data directory {} unavailable", db.data_dir().display());
        HttpResponse::ServiceUnavailable().json(body)
    }
}
