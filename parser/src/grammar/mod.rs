pub(crate) mod header;
mod request;

pub use header::HeaderParser;
pub use request::{ALLOWED_METHODS, RequestParser};
