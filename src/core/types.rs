use serde::{Serialize, Deserialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocId(pub u32);

impl From<u32> for DocId {
    fn from(id: u32) -> Self {
        DocId(id)
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A corpus document: its id plus the already-normalized tokens it contains.
/// Repeated tokens are allowed here; the index deduplicates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    pub tokens: Vec<String>,
}

impl Document {
    pub fn new(id: DocId) -> Self {
        Document {
            id,
            tokens: Vec::new(),
        }
    }

    pub fn with_tokens<I, S>(id: DocId, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Document {
            id,
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    pub fn add_token(&mut self, token: impl Into<String>) {
        self.tokens.push(token.into());
    }
}
