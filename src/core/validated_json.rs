use std::future::Future;
use std::ops::Deref;

use actix_web::{dev::Payload, web, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::LocalBoxFuture;
use serde::de::DeserializeOwned;
use validator::Validate;

use super::error::{AppError, Result};
use crate::middleware::log_error;

/// JSON body extractor that runs `validator` constraints before the handler.
///
/// The body is deserialized with path tracking, so a malformed value is
/// reported under its own field (`due_date`, `items[0].quantity`). Constraint
/// failures become `AppError::Validation` listing every bad field.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
{
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, std::result::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        let body = web::Bytes::from_request(&req, payload);

        Box::pin(async move {
            match extract(&req, body).await {
                Ok(value) => Ok(ValidatedJson(value)),
                Err(err) => {
                    log_error(&req, &err);
                    Err(actix_web::Error::from(err))
                }
            }
        })
    }
}

async fn extract<T, F>(req: &HttpRequest, body: F) -> Result<T>
where
    T: DeserializeOwned + Validate,
    F: Future<Output = std::result::Result<web::Bytes, actix_web::Error>>,
{
    if !is_json(req) {
        return Err(AppError::invalid_field(
            "body",
            "Content-Type must be application/json",
        ));
    }

    let bytes = body
        .await
        .map_err(|e| AppError::invalid_field("body", e.to_string()))?;
    let value: T = parse_json(&bytes)?;
    value.validate()?;
    Ok(value)
}

fn is_json(req: &HttpRequest) -> bool {
    let content_type = req.content_type();
    content_type == "application/json" || content_type.ends_with("+json")
}

/// Deserialize a whole JSON document, naming the field that failed
fn parse_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut de = serde_json::Deserializer::from_slice(bytes);
    let value = serde_path_to_error::deserialize(&mut de)
        .map_err(|err| AppError::from_path_error(err, "body"))?;
    de.end()
        .map_err(|err| AppError::invalid_field("body", err.to_string()))?;
    Ok(value)
}
