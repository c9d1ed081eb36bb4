use crate::core::types::DocId;
use crate::index::inverted::InvertedIndex;
use crate::index::posting::PostingSet;
use crate::index::universe::UniverseRegistry;
use crate::query::ast::{BooleanOperator, NormalizedLiteral, NormalizedQuery};

/// Evaluates normalized queries against a frozen index.
///
/// Operators apply strictly left to right with no precedence:
/// `a | b & c` is `(a | b) & c`.
pub struct QueryEvaluator<'a> {
    pub index: &'a InvertedIndex,
    pub universe: &'a UniverseRegistry,
}

impl<'a> QueryEvaluator<'a> {
    pub fn new(index: &'a InvertedIndex, universe: &'a UniverseRegistry) -> Self {
        QueryEvaluator { index, universe }
    }

    /// Documents matching one literal. Unknown terms match nothing;
    /// a negated literal matches every other document in the universe.
    pub fn resolve(&self, literal: &NormalizedLiteral) -> PostingSet {
        let postings = self
            .index
            .search_term(&literal.term)
            .cloned()
            .unwrap_or_default();

        if literal.negated {
            self.universe.complement(&postings)
        } else {
            postings
        }
    }

    pub fn evaluate_set(&self, query: &NormalizedQuery) -> PostingSet {
        let [first, second, third] = &query.literals;
        let [op0, op1] = query.operators;

        let left = apply(op0, &self.resolve(first), &self.resolve(second));
        apply(op1, &left, &self.resolve(third))
    }

    /// Matching ids, each once, ascending.
    pub fn evaluate(&self, query: &NormalizedQuery) -> Vec<DocId> {
        self.evaluate_set(query).to_vec()
    }
}

fn apply(op: BooleanOperator, left: &PostingSet, right: &PostingSet) -> PostingSet {
    match op {
        BooleanOperator::And => left.intersect(right),
        BooleanOperator::Or => left.union(right),
    }
}
