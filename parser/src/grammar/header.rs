use crate::{
    error::{ParserError, Result},
    types::Header,
};

/// Parser for a single header line of the form `name: value`.
pub struct HeaderParser;

impl HeaderParser {
    /// Parse one header line, given without its trailing line terminator.
    ///
    /// The first `:` delimits name from value, so values may themselves
    /// contain colons (timestamps, URLs). The name is normalized by
    /// [`normalize_name`]; the value keeps its interior whitespace and only
    /// loses leading and trailing spaces and tabs. An empty name is allowed.
    ///
    /// A line without any `:` fails with [`ParserError::MalformedHeader`]
    /// carrying the line.
    pub fn parse_header(line: &str) -> Result<Header> {
        let (name, value) = line
            .split_once(':')
            .ok_or_else(|| ParserError::MalformedHeader(line.to_string()))?;

        Ok(Header::new(
            normalize_name(name),
            value.trim_matches([' ', '\t']).to_string(),
        ))
    }
}

/// Normalize a header name: strip every whitespace character, then
/// lower-case. `"Foo Bar "` becomes `"foobar"`.
pub(crate) fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_the_first_colon() {
        let header = HeaderParser::parse_header("X-Time: 12:30:00").unwrap();

        assert_eq!(header.name, "x-time");
        assert_eq!(header.value, "12:30:00");
    }

    #[test]
    fn name_is_lowercased_and_whitespace_stripped() {
        let header = HeaderParser::parse_header(" Foo Bar : baz").unwrap();

        assert_eq!(header.name, "foobar");
        assert_eq!(header.value, "baz");
    }

    #[test]
    fn value_trims_spaces_and_tabs_only() {
        let header = HeaderParser::parse_header("User-Agent: \t curl/8.5 (x86_64) \t").unwrap();

        assert_eq!(header.name, "user-agent");
        assert_eq!(header.value, "curl/8.5 (x86_64)");
    }

    #[test]
    fn value_may_be_empty() {
        let header = HeaderParser::parse_header("Accept:").unwrap();

        assert_eq!(header.name, "accept");
        assert_eq!(header.value, "");
    }

    #[test]
    fn empty_name_is_allowed() {
        let header = HeaderParser::parse_header(": value").unwrap();

        assert_eq!(header.name, "");
        assert_eq!(header.value, "value");
    }

    #[test]
    fn line_without_separator_fails() {
        let result = HeaderParser::parse_header("Host example.com");

        assert_eq!(
            result.unwrap_err(),
            ParserError::MalformedHeader("Host example.com".to_string())
        );
    }
}
