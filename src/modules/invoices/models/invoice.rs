use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::line_item::CreateLineItemRequest;
use crate::core::{AppError, Result};

/// Invoice status as reported by listings and new invoices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Overdue,
}

/// Invoice as held by the read-only listing store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    pub id: u64,
    pub client: String,
    pub total: f64,
    pub status: InvoiceStatus,
}

impl InvoiceRecord {
    pub fn new(id: u64, client: impl Into<String>, total: f64, status: InvoiceStatus) -> Self {
        Self {
            id,
            client: client.into(),
            total,
            status,
        }
    }
}

/// Body of `POST /invoices`. The total is always derived from `items`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateInvoiceRequest {
    #[validate(length(min = 1, max = 100, message = "client must be 1-100 characters"))]
    pub client: String,

    pub due_date: NaiveDate,

    #[validate(length(min = 1, message = "items must contain at least one line item"), nested)]
    pub items: Vec<CreateLineItemRequest>,

    #[serde(default)]
    pub notes: Option<String>,
}

impl CreateInvoiceRequest {
    /// Σ quantity × unit_price, summed in item order
    pub fn total(&self) -> f64 {
        self.items.iter().map(CreateLineItemRequest::subtotal).sum()
    }

    /// Total, rejected under `items` when it overflows `f64`
    pub fn checked_total(&self) -> Result<f64> {
        let total = self.total();
        if total.is_finite() {
            Ok(total)
        } else {
            Err(AppError::invalid_field(
                "items",
                "invoice total is too large to represent",
            ))
        }
    }
}

/// Invoice returned by `POST /invoices`; nothing is stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceResponse {
    pub id: u64,
    pub client: String,
    pub invoice_number: String,
    pub due_date: NaiveDate,
    pub total: f64,
    pub status: InvoiceStatus,
    pub items_count: usize,
}

/// Human-readable invoice number: `INV-<year>-<id zero-padded to 4>`
pub fn format_invoice_number(year: i32, id: u64) -> String {
    format!("INV-{}-{:04}", year, id)
}
