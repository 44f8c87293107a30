pub mod error;
pub mod query_params;
pub mod sequence;
pub mod validated_json;

pub use error::{AppError, FieldError, Result};
pub use query_params::QueryParams;
pub use sequence::IdSequence;
pub use validated_json::ValidatedJson;
