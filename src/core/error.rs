use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    // Query parsing
    EmptyQuery,
    OperatorCountMismatch,
    WordCountMismatch,
    MalformedLiteral,
    // Term normalization
    UnsupportedLanguage,
    // Index build / persistence
    Io,
    MalformedDocument,
    DuplicateDocument,
    MalformedIndex,
    InvalidConfig,
}

impl ErrorKind {
    /// Errors that abandon a single query but leave the engine usable.
    pub fn is_query_error(&self) -> bool {
        matches!(
            self,
            ErrorKind::EmptyQuery
                | ErrorKind::OperatorCountMismatch
                | ErrorKind::WordCountMismatch
                | ErrorKind::MalformedLiteral
                | ErrorKind::UnsupportedLanguage
        )
    }
}

#[derive(Debug, Error)]
#[error("{kind:?}: {context}")]
pub struct Error {
    pub kind: ErrorKind,
    pub context: String,
}

impl Error {
    pub fn new(kind: ErrorKind, context: impl Into<String>) -> Self {
        Error { kind, context: context.into() }
    }

    /// One-line message shown to the user at the query prompt.
    pub fn diagnostic(&self) -> String {
        match self.kind {
            ErrorKind::EmptyQuery => "empty string".to_string(),
            ErrorKind::OperatorCountMismatch => "bad count boolean operators!".to_string(),
            ErrorKind::WordCountMismatch => "bad count words!".to_string(),
            ErrorKind::MalformedLiteral => "bad word!".to_string(),
            ErrorKind::UnsupportedLanguage => format!("unsupported language: {}", self.context),
            _ => self.to_string(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error {
            kind: ErrorKind::Io,
            context: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error {
            kind: ErrorKind::InvalidConfig,
            context: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
