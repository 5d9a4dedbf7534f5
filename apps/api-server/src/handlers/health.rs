//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub version: &'static str,
}

/// Health check endpoint - returns server status.
///
/// GET /api/health
pub async fn health_check(_state: web::Data<AppState>) -> HttpResponse {
    let response = HealthResponse {
        ok: true,
        version: env!("CARGO_PKG_VERSION"),
    };

    HttpResponse::Ok().json(response)
}
