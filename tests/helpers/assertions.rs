// Test Assertion Helpers
//
// Checks on response bodies decoded to `serde_json::Value`.

use serde_json::Value;

/// Assert the body is the validation envelope and return the rejected field names
pub fn assert_validation_error(body: &Value) -> Vec<String> {
    assert_eq!(
        body["error"]["code"], 422,
        "Expected validation error envelope, got {}",
        body
    );

    body["error"]["fields"]
        .as_array()
        .unwrap_or_else(|| panic!("Validation error without fields: {}", body))
        .iter()
        .map(|f| f["field"].as_str().unwrap_or_default().to_string())
        .collect()
}

/// Ids of the `invoices` array in a listing or search body
pub fn invoice_ids(body: &Value) -> Vec<u64> {
    body["invoices"]
        .as_array()
        .unwrap_or_else(|| panic!("Body has no invoices array: {}", body))
        .iter()
        .map(|i| i["id"].as_u64().expect("invoice id must be an integer"))
        .collect()
}
