use serde::{Deserialize, Serialize};

use super::invoice::{InvoiceRecord, InvoiceStatus};

pub const DEFAULT_LIMIT: usize = 10;

/// Query parameters for `GET /invoices`
#[derive(Debug, Clone, Deserialize)]
pub struct ListInvoicesQuery {
    #[serde(default)]
    pub status: Option<InvoiceStatus>,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub skip: usize,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

impl Default for ListInvoicesQuery {
    fn default() -> Self {
        Self {
            status: None,
            limit: DEFAULT_LIMIT,
            skip: 0,
        }
    }
}

/// Query parameters for `GET /search/invoices`.
///
/// A bound of `0` is a real bound; only an absent parameter disables a filter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchInvoicesQuery {
    pub client: Option<String>,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
}

impl SearchInvoicesQuery {
    pub fn matches(&self, record: &InvoiceRecord) -> bool {
        if let Some(client) = &self.client {
            if !record
                .client
                .to_lowercase()
                .contains(&client.to_lowercase())
            {
                return false;
            }
        }

        if let Some(min) = self.min_amount {
            if record.total < min {
                return false;
            }
        }

        if let Some(max) = self.max_amount {
            if record.total > max {
                return false;
            }
        }

        true
    }
}

/// One window of the filtered listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoicePage {
    pub invoices: Vec<InvoiceRecord>,
    /// Matches after filtering, before windowing
    pub total: usize,
    pub skip: usize,
    pub limit: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub invoices: Vec<InvoiceRecord>,
    pub count: usize,
}
