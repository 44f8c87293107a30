// Payments module

pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::configure;
pub use models::{CreatePaymentRequest, PaymentMethod, PaymentResponse, PaymentStatus};
pub use services::PaymentService;
