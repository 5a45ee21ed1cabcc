mod http;

pub use http::{Header, Request};
