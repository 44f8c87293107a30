use serde::{Deserialize, Serialize};

/// Client overview returned by `GET /clients/{client_name}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSummary {
    pub name: String,
    pub email: String,
    pub invoices_count: u32,
    pub status: String,
}

impl ClientSummary {
    /// Stub payload: only `name` depends on the request, the rest is fixed.
    /// There is no client store to consult.
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: "contact@example.com".to_string(),
            invoices_count: 3,
            status: "active".to_string(),
        }
    }
}
