use std::future::{ready, Ready};
use std::ops::Deref;

use actix_web::{dev::Payload, FromRequest, HttpRequest};
use serde::de::DeserializeOwned;

use super::error::{AppError, Result};
use crate::middleware::log_error;

/// Query string extractor that reports a bad value under its parameter name
/// (`status`, `limit`, `min_amount`) instead of the query as a whole.
#[derive(Debug)]
pub struct QueryParams<T>(pub T);

impl<T> Deref for QueryParams<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: DeserializeOwned> FromRequest for QueryParams<T> {
    type Error = actix_web::Error;
    type Future = Ready<std::result::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = match parse_query(req.query_string()) {
            Ok(value) => Ok(QueryParams(value)),
            Err(err) => {
                log_error(req, &err);
                Err(actix_web::Error::from(err))
            }
        };

        ready(result)
    }
}

fn parse_query<T: DeserializeOwned>(query: &str) -> Result<T> {
    let de = serde_urlencoded::Deserializer::new(form_urlencoded::parse(query.as_bytes()));
    serde_path_to_error::deserialize(de).map_err(|err| AppError::from_path_error(err, "query"))
}
