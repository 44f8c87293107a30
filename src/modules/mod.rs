pub mod clients;
pub mod health;
pub mod invoices;
pub mod payments;
