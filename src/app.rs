// Application assembly shared by the binary and the HTTP tests

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, Error,
};
use tracing_actix_web::TracingLogger;

use crate::config::AppConfig;
use crate::middleware::{self, RequestId};
use crate::modules::{clients, health, invoices, payments};
use crate::modules::invoices::InvoiceService;
use crate::modules::payments::PaymentService;

/// Services and settings injected into handlers.
///
/// Cloning shares the same services, including their id sequences; build a
/// new state for an isolated set of counters.
#[derive(Clone)]
pub struct AppState {
    pub config: web::Data<AppConfig>,
    pub invoices: web::Data<InvoiceService>,
    pub payments: web::Data<PaymentService>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let invoices = InvoiceService::with_fixtures(config.invoice_number_year);

        Self {
            config: web::Data::new(config),
            invoices: web::Data::new(invoices),
            payments: web::Data::new(PaymentService::new()),
        }
    }

    /// Register shared data, extractor configs and every module's routes
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.config.clone())
            .app_data(self.invoices.clone())
            .app_data(self.payments.clone())
            .app_data(middleware::path_config())
            .configure(health::configure)
            .configure(invoices::configure)
            .configure(clients::configure)
            .configure(payments::configure);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

/// Full application: routes, logging middleware and JSON 404s
pub fn build_app(
    state: &AppState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let state = state.clone();

    App::new()
        .wrap(RequestId)
        .wrap(TracingLogger::default())
        .configure(move |cfg| state.configure(cfg))
        .default_service(web::to(middleware::not_found))
}
