mod invoice;
mod line_item;
mod query;

pub use invoice::{
    format_invoice_number, CreateInvoiceRequest, InvoiceRecord, InvoiceResponse, InvoiceStatus,
};
pub use line_item::CreateLineItemRequest;
pub use query::{
    InvoicePage, ListInvoicesQuery, SearchInvoicesQuery, SearchResults, DEFAULT_LIMIT,
};
