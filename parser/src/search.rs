use crate::{
    grammar::header::normalize_name,
    types::{Header, Request},
};

/// Name-based lookup over an ordered header sequence.
///
/// The backing store stays an ordered list, so duplicates and input order
/// are never lost; this trait is only a view on top of it. Queried names go
/// through the same normalization as parsed names, so `"Content-Type"` and
/// `"content-type"` find the same field.
pub trait HeaderSearchable {
    fn headers(&self) -> &[Header];

    /// First header with the given name, if any.
    fn get_header(&self, name: &str) -> Option<&Header> {
        let name = normalize_name(name);
        self.headers().iter().find(|header| header.name == name)
    }

    /// Values of every header with the given name, in input order.
    fn get_header_values(&self, name: &str) -> Vec<&str> {
        let name = normalize_name(name);
        self.headers()
            .iter()
            .filter(|header| header.name == name)
            .map(|header| header.value.as_str())
            .collect()
    }
}

impl HeaderSearchable for Request {
    fn headers(&self) -> &[Header] {
        &self.headers
    }
}
