use std::str::FromStr;

use pest::{Parser, iterators::Pairs};
use pest_derive::Parser;
use tracing::trace;

use crate::{
    error::{ParserError, Result},
    grammar::header::HeaderParser,
    types::Request,
};

/// Methods accepted on the command line. Matching is exact and
/// case-sensitive, so `get` or `Get` are rejected.
pub const ALLOWED_METHODS: [&str; 3] = ["GET", "POST", "HEAD"];

#[derive(Parser)]
#[grammar = "./grammar/request.pest"]
pub struct RequestParser;

impl RequestParser {
    /// Parse a complete HTTP request message.
    ///
    /// The input must be the whole message, already read into memory and
    /// including the `\r\n\r\n` header terminator. The terminator is a hard
    /// requirement: without it the message is rejected no matter how
    /// well-formed the rest is.
    pub fn parse_request(input: &str) -> Result<Request> {
        let request = Self::parse(Rule::request, input)
            .map_err(|_| ParserError::MalformedRequest("missing end of headers".to_string()))?
            .next()
            .ok_or_else(|| ParserError::MalformedRequest("empty parse result".to_string()))?;

        Self::build_request(request.into_inner())
    }

    fn build_request(pairs: Pairs<'_, Rule>) -> Result<Request> {
        let mut lines = Vec::new();
        let mut payload = "";

        for pair in pairs {
            match pair.as_rule() {
                Rule::line => lines.push(pair.as_str()),
                Rule::payload => payload = pair.as_str(),
                _ => continue,
            }
        }

        trace!(
            line_count = lines.len(),
            payload_len = payload.len(),
            "split message into header block and payload"
        );

        let mut lines = lines.into_iter();
        let (method, target, version) = Self::parse_command(lines.next().unwrap_or_default())?;

        let mut headers = Vec::new();
        for line in lines {
            if line.is_empty() {
                continue;
            }
            headers.push(HeaderParser::parse_header(line)?);
        }

        let request = Request::new(method, target, version, headers, payload.to_string());

        trace!(
            method = %request.method,
            target = %request.target,
            header_count = request.headers.len(),
            "parsed request"
        );

        Ok(request)
    }

    /// Split the command line into method, target and version tokens.
    ///
    /// Tokens are separated by runs of spaces. The version token is optional
    /// and defaults to the empty string; anything past it is ignored. Method
    /// and target are mandatory, and the method must be one of
    /// [`ALLOWED_METHODS`].
    fn parse_command(line: &str) -> Result<(String, String, String)> {
        let mut tokens = line.split_whitespace();

        let (Some(method), Some(target)) = (tokens.next(), tokens.next()) else {
            return Err(ParserError::MalformedRequest(
                "invalid command format".to_string(),
            ));
        };
        let version = tokens.next().unwrap_or_default();

        if !ALLOWED_METHODS.contains(&method) {
            return Err(ParserError::InvalidMethod(method.to_string()));
        }

        Ok((method.to_string(), target.to_string(), version.to_string()))
    }
}

impl FromStr for Request {
    type Err = ParserError;

    fn from_str(s: &str) -> Result<Self> {
        RequestParser::parse_request(s)
    }
}
