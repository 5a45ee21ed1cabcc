/// A single HTTP header field.
///
/// Constructed once from a raw header line, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Field name: lower-cased, with every whitespace character removed.
    /// May be empty when the raw line started with `:`.
    pub name: String,
    /// Field value: the text after the first `:`, trimmed of leading and
    /// trailing spaces and tabs. Interior whitespace is kept verbatim.
    pub value: String,
}

impl Header {
    pub fn new(name: String, value: String) -> Self {
        Self { name, value }
    }
}

/// A fully parsed HTTP request.
///
/// A value of this type only exists when parsing succeeded; all fields are
/// owned and the value is immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Request method, always a member of the allowed method set.
    pub method: String,
    /// Request target exactly as it appeared, neither decoded nor validated.
    pub target: String,
    /// Protocol version token, e.g. `HTTP/1.1`. Empty when the command line
    /// carried only a method and a target.
    pub version: String,
    /// Header fields in the order they appeared in the input. Duplicate
    /// names are kept as separate entries.
    pub headers: Vec<Header>,
    /// Everything after the header terminator, byte for byte. May itself
    /// contain CRLF sequences.
    pub payload: String,
}

impl Request {
    pub fn new(
        method: String,
        target: String,
        version: String,
        headers: Vec<Header>,
        payload: String,
    ) -> Self {
        Self {
            method,
            target,
            version,
            headers,
            payload,
        }
    }
}
