use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;

pub const SERVICE_NAME: &str = "Invoice Management API";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Root response: confirms the API is running
#[derive(Debug, Serialize, Deserialize)]
pub struct IndexResponse {
    pub message: String,
    pub version: String,
    pub status: String,
}

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Static project metadata
#[derive(Debug, Serialize, Deserialize)]
pub struct AboutResponse {
    pub project: String,
    pub author: String,
    pub version: String,
    pub environment: String,
    pub tech_stack: Vec<String>,
}

/// GET /
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(IndexResponse {
        message: SERVICE_NAME.to_string(),
        version: VERSION.to_string(),
        status: "running".to_string(),
    })
}

/// GET /health - Liveness probe
/// There are no dependencies to check, so being able to answer is enough
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
    })
}

/// GET /about
pub async fn about(config: web::Data<AppConfig>) -> impl Responder {
    HttpResponse::Ok().json(AboutResponse {
        project: SERVICE_NAME.to_string(),
        author: config.author.clone(),
        version: VERSION.to_string(),
        environment: config.env.clone(),
        tech_stack: vec!["Rust".to_string(), "actix-web".to_string()],
    })
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/health", web::get().to(health_check))
        .route("/about", web::get().to(about));
}
