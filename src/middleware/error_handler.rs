// Extractor error handlers
//
// Bad path segments and unknown routes are turned into the same JSON
// envelope as constraint failures instead of actix's plain text responses.
// Body and query failures are reported by the `core` extractors themselves.

use actix_web::{error::PathError, web, Error, HttpRequest, HttpResponse};

use super::request_id::request_id;
use crate::core::AppError;

/// Path extraction config: non-numeric ids are validation errors
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(path_error_handler)
}

/// Reports the failure under the route's parameter names, e.g. `invoice_id`
fn path_error_handler(err: PathError, req: &HttpRequest) -> Error {
    let names: Vec<&str> = req.match_info().iter().map(|(name, _)| name).collect();
    let field = if names.is_empty() {
        "path".to_string()
    } else {
        names.join(", ")
    };

    let app_err = AppError::invalid_field(field, err.to_string());
    log_error(req, &app_err);
    app_err.into()
}

/// Default service: unknown routes answer with the JSON error envelope
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::not_found(format!(
        "{} {}",
        req.method(),
        req.path()
    )))
}

pub fn log_error(req: &HttpRequest, err: &AppError) {
    tracing::warn!(
        request_id = %request_id(req).unwrap_or_default(),
        method = %req.method(),
        path = %req.path(),
        fields = ?err.fields(),
        error = %err,
        "Rejected request input"
    );
}
