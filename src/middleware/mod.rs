pub mod error_handler;
pub mod request_id;

pub use error_handler::{log_error, not_found, path_config};
pub use request_id::{request_id, RequestId, REQUEST_ID_HEADER};
