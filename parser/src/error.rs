use thiserror::Error;

/// Errors produced while parsing a request or a single header line.
///
/// Every variant is a rejected parse: there is no partial result and no
/// recovery. Malformed input never panics or terminates the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParserError {
    /// The message has no `\r\n\r\n` header terminator, or the command line
    /// does not yield at least a method and a target token. Carries the
    /// reason.
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// The command line parsed but its method token is not one of the
    /// allowed methods. Carries the offending token.
    #[error("Unsupported method: {0}")]
    InvalidMethod(String),

    /// A header line has no `:` separator. Carries the offending line.
    #[error("Invalid header format: {0}")]
    MalformedHeader(String),
}

pub type Result<T> = std::result::Result<T, ParserError>;
