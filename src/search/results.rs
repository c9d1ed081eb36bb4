use std::fmt;
use crate::core::types::DocId;
use crate::query::ast::NormalizedQuery;

/// Search results container
#[derive(Debug, Clone)]
pub struct SearchResults {
    pub query: NormalizedQuery,
    pub doc_ids: Vec<DocId>,  // Unique, ascending
    pub took_us: u64,
}

impl SearchResults {
    pub fn len(&self) -> usize {
        self.doc_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doc_ids.is_empty()
    }

    pub fn contains(&self, doc_id: DocId) -> bool {
        self.doc_ids.binary_search(&doc_id).is_ok()
    }
}

/// `Result: 1, 2, 3` as printed by the query loop.
impl fmt::Display for SearchResults {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Result: ")?;
        for (i, id) in self.doc_ids.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", id)?;
        }
        Ok(())
    }
}
