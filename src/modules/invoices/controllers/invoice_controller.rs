use actix_web::{web, HttpResponse};

use crate::core::{AppError, QueryParams, ValidatedJson};
use crate::modules::invoices::models::{
    CreateInvoiceRequest, ListInvoicesQuery, SearchInvoicesQuery,
};
use crate::modules::invoices::services::InvoiceService;

/// Create a new invoice
/// POST /invoices
pub async fn create_invoice(
    service: web::Data<InvoiceService>,
    request: ValidatedJson<CreateInvoiceRequest>,
) -> Result<HttpResponse, AppError> {
    let invoice = service.create(request.into_inner())?;

    Ok(HttpResponse::Created().json(invoice))
}

/// Get invoice by ID (placeholder payload)
/// GET /invoices/{invoice_id}
pub async fn get_invoice(
    service: web::Data<InvoiceService>,
    path: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    let invoice = service.get(path.into_inner());

    Ok(HttpResponse::Ok().json(invoice))
}

/// List fixture invoices
/// GET /invoices?status=&limit=&skip=
pub async fn list_invoices(
    service: web::Data<InvoiceService>,
    query: QueryParams<ListInvoicesQuery>,
) -> Result<HttpResponse, AppError> {
    let page = service.list(&query);

    Ok(HttpResponse::Ok().json(page))
}

/// Search fixture invoices
/// GET /search/invoices?client=&min_amount=&max_amount=
pub async fn search_invoices(
    service: web::Data<InvoiceService>,
    query: QueryParams<SearchInvoicesQuery>,
) -> Result<HttpResponse, AppError> {
    let results = service.search(&query);

    Ok(HttpResponse::Ok().json(results))
}

/// Configure invoice routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/invoices")
            .route("", web::post().to(create_invoice))
            .route("", web::get().to(list_invoices))
            .route("/{invoice_id}", web::get().to(get_invoice)),
    )
    .route("/search/invoices", web::get().to(search_invoices));
}
