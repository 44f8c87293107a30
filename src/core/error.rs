use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde::Serialize;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// A single rejected input value, addressed by its location in the request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Request input failed schema or constraint checks
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        fields: Vec<FieldError>,
    },

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let mut error = serde_json::json!({
            "message": self.to_string(),
            "code": status_code.as_u16(),
        });

        if let AppError::Validation { fields, .. } = self {
            if !fields.is_empty() {
                error["fields"] = serde_json::json!(fields);
            }
        }

        HttpResponse::build(status_code).json(serde_json::json!({ "error": error }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn invalid_field(field: impl Into<String>, msg: impl Into<String>) -> Self {
        let error = FieldError::new(field, msg);
        AppError::Validation {
            message: error.message.clone(),
            fields: vec![error],
        }
    }

    pub fn invalid_fields(fields: Vec<FieldError>) -> Self {
        let names: Vec<&str> = fields.iter().map(|f| f.field.as_str()).collect();
        AppError::Validation {
            message: format!("invalid value for {}", names.join(", ")),
            fields,
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    /// Deserialization failure, addressed by the path serde had reached.
    ///
    /// Root-level failures (syntax errors, empty input) fall back to `location`.
    /// A missing field is appended to the path of the struct that lacked it.
    pub fn from_path_error<E: std::fmt::Display>(
        err: serde_path_to_error::Error<E>,
        location: &str,
    ) -> Self {
        let message = err.inner().to_string();
        let path = err.path().to_string();
        let parent = if path == "." { "" } else { path.as_str() };

        let field = match (missing_field_name(&message), parent) {
            (Some(missing), "") => missing.to_string(),
            (Some(missing), parent) => format!("{}.{}", parent, missing),
            (None, "") => location.to_string(),
            (None, parent) => parent.to_string(),
        };

        AppError::invalid_field(field, message)
    }

    /// Rejected fields, empty for anything but validation errors
    pub fn fields(&self) -> &[FieldError] {
        match self {
            AppError::Validation { fields, .. } => fields,
            _ => &[],
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = Vec::new();
        flatten_validation_errors(&errors, "", &mut fields);
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        AppError::invalid_fields(fields)
    }
}

/// Walk nested validator output into flat `items[0].quantity` style paths
fn flatten_validation_errors(errors: &ValidationErrors, prefix: &str, out: &mut Vec<FieldError>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(errs) => {
                for err in errs {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| describe_code(&err.code));
                    out.push(FieldError::new(path.clone(), message));
                }
            }
            ValidationErrorsKind::Struct(inner) => {
                flatten_validation_errors(inner, &path, out);
            }
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    flatten_validation_errors(inner, &format!("{}[{}]", path, index), out);
                }
            }
        }
    }
}

/// Pull the field name out of serde's "missing field `x`" message
fn missing_field_name(message: &str) -> Option<&str> {
    let rest = message.strip_prefix("missing field `")?;
    rest.split('`').next()
}

fn describe_code(code: &str) -> String {
    match code {
        "length" => "length is out of range".to_string(),
        "range" => "value is out of range".to_string(),
        other => format!("failed '{}' check", other),
    }
}
