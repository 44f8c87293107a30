// Invoices module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use controllers::configure;
pub use models::{CreateInvoiceRequest, InvoiceRecord, InvoiceResponse, InvoiceStatus};
pub use repositories::{FixtureInvoiceRepository, InvoiceRepository};
pub use services::InvoiceService;
