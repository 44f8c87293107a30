use actix_web::{web, HttpResponse};

use crate::core::AppError;
use crate::modules::clients::models::ClientSummary;

/// Get client by name (placeholder payload)
/// GET /clients/{client_name}
pub async fn get_client(path: web::Path<String>) -> Result<HttpResponse, AppError> {
    let client = ClientSummary::placeholder(path.into_inner());

    Ok(HttpResponse::Ok().json(client))
}

/// Configure client routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/clients/{client_name}", web::get().to(get_client));
}
