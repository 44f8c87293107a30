use std::sync::Arc;

use crate::core::{IdSequence, Result};
use crate::modules::invoices::models::{
    format_invoice_number, CreateInvoiceRequest, InvoicePage, InvoiceRecord, InvoiceResponse,
    InvoiceStatus, ListInvoicesQuery, SearchInvoicesQuery, SearchResults,
};
use crate::modules::invoices::repositories::{FixtureInvoiceRepository, InvoiceRepository};

/// Service for invoice listing, lookup and creation
pub struct InvoiceService {
    repository: Arc<dyn InvoiceRepository>,
    sequence: IdSequence,
    number_year: i32,
}

impl InvoiceService {
    pub fn new(repository: Arc<dyn InvoiceRepository>, number_year: i32) -> Self {
        Self {
            repository,
            sequence: IdSequence::new(),
            number_year,
        }
    }

    /// Service over the seeded fixture store
    pub fn with_fixtures(number_year: i32) -> Self {
        Self::new(Arc::new(FixtureInvoiceRepository::seeded()), number_year)
    }

    /// Filter by exact status, then window `[skip, skip + limit)`.
    /// `total` counts the filtered records before windowing.
    pub fn list(&self, query: &ListInvoicesQuery) -> InvoicePage {
        let filtered: Vec<&InvoiceRecord> = self
            .repository
            .all()
            .iter()
            .filter(|r| query.status.map_or(true, |status| r.status == status))
            .collect();

        let total = filtered.len();
        let invoices = filtered
            .into_iter()
            .skip(query.skip)
            .take(query.limit)
            .cloned()
            .collect();

        InvoicePage {
            invoices,
            total,
            skip: query.skip,
            limit: query.limit,
        }
    }

    /// Every record matching all given filters, in storage order
    pub fn search(&self, query: &SearchInvoicesQuery) -> SearchResults {
        let invoices: Vec<InvoiceRecord> = self
            .repository
            .all()
            .iter()
            .filter(|r| query.matches(r))
            .cloned()
            .collect();

        SearchResults {
            count: invoices.len(),
            invoices,
        }
    }

    /// Placeholder lookup: the payload echoes `id` but does not come from the store
    pub fn get(&self, id: u64) -> InvoiceRecord {
        InvoiceRecord::new(id, "Acme Corp", 1500.0, InvoiceStatus::Pending)
    }

    /// Mint an id and invoice number for a validated request.
    /// Nothing is stored; a later lookup will not find this invoice.
    /// A total that overflows is rejected before an id is taken.
    pub fn create(&self, request: CreateInvoiceRequest) -> Result<InvoiceResponse> {
        let total = request.checked_total()?;
        let id = self.sequence.next();

        tracing::info!(
            invoice_id = id,
            client = %request.client,
            items = request.items.len(),
            total,
            "Invoice created"
        );

        Ok(InvoiceResponse {
            id,
            invoice_number: format_invoice_number(self.number_year, id),
            items_count: request.items.len(),
            client: request.client,
            due_date: request.due_date,
            total,
            status: InvoiceStatus::Pending,
        })
    }

    /// Last invoice id handed out
    pub fn last_id(&self) -> u64 {
        self.sequence.current()
    }
}
