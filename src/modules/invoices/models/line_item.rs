// A line item only lives inside a creation request: it is validated, priced
// into the invoice total, counted, and then dropped.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// One billed product or service in a new invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CreateLineItemRequest {
    /// Product/service description (1-200 characters)
    #[validate(length(min = 1, max = 200, message = "description must be 1-200 characters"))]
    pub description: String,

    #[validate(range(min = 1, message = "quantity must be greater than 0"))]
    pub quantity: i64,

    #[validate(range(exclusive_min = 0.0, message = "unit_price must be greater than 0"))]
    pub unit_price: f64,
}

impl CreateLineItemRequest {
    pub fn new(description: impl Into<String>, quantity: i64, unit_price: f64) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
        }
    }

    /// quantity × unit_price, unrounded
    pub fn subtotal(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}
