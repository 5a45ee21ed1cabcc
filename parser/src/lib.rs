//! HTTP request message parser.
//!
//! This crate turns one complete, already buffered HTTP request message
//! into a structured [`Request`]: method, target, version, the header
//! fields in input order and the raw payload. It does no I/O and holds no
//! state between calls, so independent messages can be parsed from any
//! number of threads without coordination.
//!
//! Lines are delimited by CRLF and the header block must be closed by a
//! blank line (`\r\n\r\n`); a message without that terminator is rejected.
//! Everything after the terminator is kept verbatim as the payload,
//! embedded CRLF sequences included. Chunked transfer encoding, folded
//! headers and HTTP/2+ framing are out of scope.
//!
//! # Examples
//!
//! ```
//! use parser::{HeaderSearchable, RequestParser};
//!
//! let raw = "POST /api/users HTTP/1.1\r\nHost: example.com\r\nContent-Type: application/json\r\n\r\n{\"name\":\"Alice\"}";
//!
//! let request = RequestParser::parse_request(raw).unwrap();
//!
//! assert_eq!(request.method, "POST");
//! assert_eq!(request.target, "/api/users");
//! assert_eq!(request.version, "HTTP/1.1");
//! assert_eq!(request.payload, "{\"name\":\"Alice\"}");
//!
//! // Header names are normalized at parse time; lookups normalize the
//! // queried name the same way.
//! let content_type = request.get_header("Content-Type").unwrap();
//! assert_eq!(content_type.name, "content-type");
//! assert_eq!(content_type.value, "application/json");
//! ```
//!
//! A single header line can be parsed on its own:
//!
//! ```
//! use parser::HeaderParser;
//!
//! let header = HeaderParser::parse_header("X-Time: 12:30:00").unwrap();
//!
//! assert_eq!(header.name, "x-time");
//! assert_eq!(header.value, "12:30:00");
//! ```
//!
//! Failures are returned, never panicked or logged:
//!
//! ```
//! use parser::{ParserError, RequestParser};
//!
//! let result = RequestParser::parse_request("PUT /x HTTP/1.1\r\n\r\n");
//!
//! assert_eq!(result.unwrap_err(), ParserError::InvalidMethod("PUT".to_string()));
//! ```

mod error;
mod grammar;
mod search;
mod types;

pub use error::ParserError;
pub use grammar::{ALLOWED_METHODS, HeaderParser, RequestParser};
pub use search::HeaderSearchable;
pub use types::{Header, Request};

#[cfg(test)]
mod tests {
    use super::*;

    fn serialize(
        method: &str,
        target: &str,
        version: &str,
        headers: &[(&str, &str)],
        payload: &str,
    ) -> String {
        let mut raw = format!("{method} {target} {version}\r\n");
        for (name, value) in headers {
            raw.push_str(name);
            raw.push_str(": ");
            raw.push_str(value);
            raw.push_str("\r\n");
        }
        raw.push_str("\r\n");
        raw.push_str(payload);
        raw
    }

    #[test]
    fn serialized_requests_round_trip_for_every_allowed_method() {
        shared::init_test_logging();

        for method in ALLOWED_METHODS {
            let raw = serialize(
                method,
                "/index.html?q=1",
                "HTTP/1.1",
                &[("Host", "example.com"), ("X-Time", "12:30:00")],
                "line one\r\nline two",
            );

            let request = RequestParser::parse_request(&raw).unwrap();

            assert_eq!(request.method, method);
            assert_eq!(request.target, "/index.html?q=1");
            assert_eq!(request.version, "HTTP/1.1");
            assert_eq!(
                request.headers,
                vec![
                    Header::new("host".to_string(), "example.com".to_string()),
                    Header::new("x-time".to_string(), "12:30:00".to_string()),
                ]
            );
            assert_eq!(request.payload, "line one\r\nline two");
        }
    }

    #[test]
    fn round_trip_normalizes_names_and_trims_values() {
        shared::init_test_logging();

        let raw = serialize(
            "GET",
            "/",
            "HTTP/1.1",
            &[(" Foo Bar ", "  spaced  value\t")],
            "",
        );

        let request = RequestParser::parse_request(&raw).unwrap();

        assert_eq!(
            request.headers,
            vec![Header::new("foobar".to_string(), "spaced  value".to_string())]
        );
    }

    #[test]
    fn empty_header_block_parses_with_zero_headers() {
        let request = RequestParser::parse_request("GET / HTTP/1.1\r\n\r\nbody").unwrap();

        assert!(request.headers.is_empty());
        assert_eq!(request.payload, "body");
    }

    #[test]
    fn any_input_without_the_terminator_is_malformed() {
        for input in [
            "",
            "GET / HTTP/1.1",
            "GET / HTTP/1.1\r\n",
            "GET / HTTP/1.1\r\nHost: example.com\r\n",
            "GET / HTTP/1.1\n\n",
        ] {
            assert!(
                matches!(
                    RequestParser::parse_request(input),
                    Err(ParserError::MalformedRequest(_))
                ),
                "input {input:?} should be rejected"
            );
        }
    }
}
