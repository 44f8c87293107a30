// Read-only invoice store backing the listing and search endpoints.
//
// Records are seeded once at startup and never change; invoices created via
// `POST /invoices` are not added here.

use crate::modules::invoices::models::{InvoiceRecord, InvoiceStatus};

/// Source of invoices for listing and search
pub trait InvoiceRepository: Send + Sync {
    /// Every record, in storage order
    fn all(&self) -> &[InvoiceRecord];
}

/// In-process fixture store
#[derive(Debug, Clone)]
pub struct FixtureInvoiceRepository {
    records: Vec<InvoiceRecord>,
}

impl FixtureInvoiceRepository {
    pub fn new(records: Vec<InvoiceRecord>) -> Self {
        Self { records }
    }

    /// The sample invoices served by a fresh process
    pub fn seeded() -> Self {
        Self::new(vec![
            InvoiceRecord::new(1, "Acme Corp", 1500.0, InvoiceStatus::Paid),
            InvoiceRecord::new(2, "Globex Industries", 3200.0, InvoiceStatus::Pending),
            InvoiceRecord::new(3, "Initech", 750.0, InvoiceStatus::Overdue),
            InvoiceRecord::new(4, "Umbrella Corp", 2500.0, InvoiceStatus::Paid),
            InvoiceRecord::new(5, "Stark Enterprises", 1200.0, InvoiceStatus::Pending),
        ])
    }
}

impl Default for FixtureInvoiceRepository {
    fn default() -> Self {
        Self::seeded()
    }
}

impl InvoiceRepository for FixtureInvoiceRepository {
    fn all(&self) -> &[InvoiceRecord] {
        &self.records
    }
}
