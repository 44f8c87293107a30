//! Invoice Management API
//!
//! REST endpoints for invoices, clients and payments over in-process sample
//! data. Creation endpoints validate and price their input but store nothing.

pub mod app;
pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use app::{build_app, AppState};
pub use modules::clients;
pub use modules::invoices;
pub use modules::payments;
