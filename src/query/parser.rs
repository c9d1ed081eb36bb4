use crate::core::error::{Error, ErrorKind, Result};
use crate::query::ast::{BooleanOperator, Literal, ParsedQuery};

const OPERATOR_CHARS: [char; 2] = ['&', '|'];
const NEGATION: char = '!';

/// Parser for `word op word op word` queries.
///
/// Lenient by default: any input with exactly two operator characters and
/// exactly three non-blank fragments between them is accepted, so a
/// fragment may hold several words. A `!` with no word after it is
/// rejected in both modes. `strict` additionally requires every fragment
/// to be a single word with at most one leading `!`.
#[derive(Debug, Clone, Default)]
pub struct QueryParser {
    pub strict: bool,
}

impl QueryParser {
    pub fn new() -> Self {
        QueryParser { strict: false }
    }

    pub fn strict() -> Self {
        QueryParser { strict: true }
    }

    /// Parse a query string into its three literals and two operators.
    /// Examples:
    /// - "cat & dog | fish"
    /// - "!cat & dog & fish"
    /// - "cat|dog|fish"
    pub fn parse(&self, input: &str) -> Result<ParsedQuery> {
        if input.trim().is_empty() {
            return Err(Error::new(ErrorKind::EmptyQuery, "query is empty"));
        }

        let operators: Vec<BooleanOperator> = input
            .chars()
            .filter_map(BooleanOperator::from_char)
            .collect();
        let operators: [BooleanOperator; 2] = operators.try_into().map_err(|found: Vec<_>| {
            Error::new(
                ErrorKind::OperatorCountMismatch,
                format!("expected 2 operators, found {}", found.len()),
            )
        })?;

        let fragments: Vec<&str> = input
            .split(OPERATOR_CHARS)
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .collect();
        let fragments: [&str; 3] = fragments.try_into().map_err(|found: Vec<_>| {
            Error::new(
                ErrorKind::WordCountMismatch,
                format!("expected 3 words, found {}", found.len()),
            )
        })?;

        let [a, b, c] = fragments;
        Ok(ParsedQuery {
            literals: [self.parse_literal(a)?, self.parse_literal(b)?, self.parse_literal(c)?],
            operators,
        })
    }

    fn parse_literal(&self, fragment: &str) -> Result<Literal> {
        let (text, negated) = match fragment.strip_prefix(NEGATION) {
            Some(rest) => (rest.trim_start(), true),
            None => (fragment, false),
        };

        if text.is_empty() {
            return Err(malformed(fragment, "negation without a word"));
        }

        if self.strict {
            if fragment.contains(char::is_whitespace) {
                return Err(malformed(fragment, "more than one word"));
            }
            if text.starts_with(NEGATION) {
                return Err(malformed(fragment, "repeated negation"));
            }
        }

        Ok(Literal::new(text, negated))
    }
}

fn malformed(fragment: &str, reason: &str) -> Error {
    Error::new(ErrorKind::MalformedLiteral, format!("{:?}: {}", fragment, reason))
}
