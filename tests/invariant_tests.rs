//! Randomized checks of the index and evaluator invariants against a
//! naive reference built from plain hash sets.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{HashMap, HashSet};
use triquery::analysis::normalizer::IdentityNormalizer;
use triquery::index::inverted::Term;
use triquery::parallel::indexer::ParallelIndexer;
use triquery::query::ast::{BooleanOperator, NormalizedLiteral, NormalizedQuery};
use triquery::query::evaluator::QueryEvaluator;
use triquery::{DocId, Document, SearchEngine};

const VOCABULARY: [&str; 8] = ["alpha", "beta", "gamma", "delta", "eps", "zeta", "eta", "theta"];

fn random_corpus(rng: &mut StdRng, docs: usize) -> Vec<Document> {
    let mut used = HashSet::new();
    let mut corpus = Vec::new();
    while corpus.len() < docs {
        let id = rng.gen_range(0..10_000u32);
        if !used.insert(id) {
            continue;
        }
        let len = rng.gen_range(0..20);
        let tokens: Vec<&str> = (0..len)
            .map(|_| VOCABULARY[rng.gen_range(0..VOCABULARY.len())])
            .collect();
        corpus.push(Document::with_tokens(DocId(id), tokens));
    }
    corpus
}

fn reference_index(corpus: &[Document]) -> (HashMap<String, HashSet<u32>>, HashSet<u32>) {
    let mut index: HashMap<String, HashSet<u32>> = HashMap::new();
    let mut universe = HashSet::new();
    for doc in corpus {
        universe.insert(doc.id.0);
        for token in &doc.tokens {
            index.entry(token.clone()).or_default().insert(doc.id.0);
        }
    }
    (index, universe)
}

fn random_query(rng: &mut StdRng) -> NormalizedQuery {
    let mut literal = || {
        let word = VOCABULARY[rng.gen_range(0..VOCABULARY.len())];
        NormalizedLiteral::new(Term::new(word), rng.gen_bool(0.3))
    };
    let literals = [literal(), literal(), literal()];
    let mut op = || if rng.gen_bool(0.5) { BooleanOperator::And } else { BooleanOperator::Or };
    let operators = [op(), op()];
    NormalizedQuery { literals, operators }
}

fn reference_eval(
    query: &NormalizedQuery,
    index: &HashMap<String, HashSet<u32>>,
    universe: &HashSet<u32>,
) -> Vec<u32> {
    let resolve = |lit: &NormalizedLiteral| -> HashSet<u32> {
        let postings = index.get(lit.term.as_str()).cloned().unwrap_or_default();
        if lit.negated {
            universe.difference(&postings).copied().collect()
        } else {
            postings
        }
    };
    let apply = |op: BooleanOperator, a: HashSet<u32>, b: HashSet<u32>| -> HashSet<u32> {
        match op {
            BooleanOperator::And => a.intersection(&b).copied().collect(),
            BooleanOperator::Or => a.union(&b).copied().collect(),
        }
    };

    let left = apply(query.operators[0], resolve(&query.literals[0]), resolve(&query.literals[1]));
    let mut result: Vec<u32> = apply(query.operators[1], left, resolve(&query.literals[2]))
        .into_iter()
        .collect();
    result.sort_unstable();
    result
}

#[test]
fn test_build_is_idempotent_and_matches_reference() {
    let mut rng = StdRng::seed_from_u64(7);
    let corpus = random_corpus(&mut rng, 300);
    let (expected, expected_universe) = reference_index(&corpus);

    let first = ParallelIndexer::new(4).unwrap().build_from_documents(&corpus);
    let second = ParallelIndexer::new(2).unwrap().build_from_documents(&corpus);
    assert_eq!(first.index, second.index);
    assert_eq!(first.universe, second.universe);

    assert_eq!(first.index.len(), expected.len());
    for (term, docs) in &expected {
        let postings = first.index.search_term(&Term::new(term)).unwrap();
        let mut want: Vec<u32> = docs.iter().copied().collect();
        want.sort_unstable();
        let got: Vec<u32> = postings.iter().map(|id| id.0).collect();
        assert_eq!(got, want, "term {}", term);
    }
    assert_eq!(first.universe.len() as usize, expected_universe.len());
}

#[test]
fn test_negation_laws() {
    let mut rng = StdRng::seed_from_u64(11);
    let corpus = random_corpus(&mut rng, 200);
    let built = ParallelIndexer::new(3).unwrap().build_from_documents(&corpus);
    let evaluator = QueryEvaluator::new(&built.index, &built.universe);

    for word in VOCABULARY {
        let positive = evaluator.resolve(&NormalizedLiteral::new(Term::new(word), false));
        let negative = evaluator.resolve(&NormalizedLiteral::new(Term::new(word), true));

        assert!(positive.intersect(&negative).is_empty());
        assert_eq!(negative, built.universe.complement(&positive));
        if !positive.is_empty() {
            assert_eq!(&positive.union(&negative), built.universe.all());
        }
    }
}

#[test]
fn test_random_queries_match_reference() {
    let mut rng = StdRng::seed_from_u64(23);
    let corpus = random_corpus(&mut rng, 250);
    let (index, universe) = reference_index(&corpus);
    let built = ParallelIndexer::new(4).unwrap().build_from_documents(&corpus);
    let evaluator = QueryEvaluator::new(&built.index, &built.universe);

    for _ in 0..500 {
        let query = random_query(&mut rng);
        let got: Vec<u32> = evaluator.evaluate(&query).into_iter().map(|id| id.0).collect();
        assert_eq!(got, reference_eval(&query, &index, &universe), "query {}", query);
    }
}

#[test]
fn test_results_never_contain_duplicates() {
    let mut rng = StdRng::seed_from_u64(31);
    let corpus = random_corpus(&mut rng, 150);
    let built = ParallelIndexer::new(2).unwrap().build_from_documents(&corpus);
    let engine = SearchEngine::from_built(built).with_normalizer(Box::new(IdentityNormalizer));

    for a in VOCABULARY {
        for op in ['&', '|'] {
            let results = engine.search(&format!("{a} | {a} {op} !{a}")).unwrap();
            let unique: HashSet<DocId> = results.doc_ids.iter().copied().collect();
            assert_eq!(unique.len(), results.len());
        }
    }
}
