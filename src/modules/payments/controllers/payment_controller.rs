use actix_web::{web, HttpResponse};

use crate::core::{AppError, ValidatedJson};
use crate::modules::payments::models::CreatePaymentRequest;
use crate::modules::payments::services::PaymentService;

/// Record a payment against an invoice
/// POST /payments
pub async fn create_payment(
    service: web::Data<PaymentService>,
    request: ValidatedJson<CreatePaymentRequest>,
) -> Result<HttpResponse, AppError> {
    let payment = service.create(request.into_inner());

    Ok(HttpResponse::Created().json(payment))
}

/// Configure payment routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/payments", web::post().to(create_payment));
}
