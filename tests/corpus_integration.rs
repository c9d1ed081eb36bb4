//! End-to-end tests: corpus directory on disk -> index -> queries.

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;
use triquery::index::inverted::Term;
use triquery::storage::index_file::read_index;
use triquery::{Config, DocId, ErrorKind, FailurePolicy, SearchEngine};

fn write_doc(dir: &Path, name: &str, tokens: &[&str]) {
    let mut body = tokens.join("\n");
    body.push('\n');
    fs::write(dir.join(name), body).unwrap();
}

/// doc 1 = {cat, dog}, doc 2 = {dog}, doc 3 = {fish}
fn scenario_corpus() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_doc(dir.path(), "1.txt", &["cat", "dog", "cat"]);
    write_doc(dir.path(), "2.txt", &["dog"]);
    write_doc(dir.path(), "3.txt", &["fish"]);
    dir
}

fn config_for(corpus: &TempDir, out: &TempDir) -> Config {
    Config {
        corpus_dir: corpus.path().to_path_buf(),
        index_path: out.path().join("inverted_index.txt"),
        workers: 3,
        ..Config::default()
    }
}

fn ids(values: &[u32]) -> Vec<DocId> {
    values.iter().copied().map(DocId).collect()
}

#[test]
fn test_scenario_queries() {
    let corpus = scenario_corpus();
    let out = TempDir::new().unwrap();
    let engine = SearchEngine::build(&config_for(&corpus, &out)).unwrap();

    assert_eq!(engine.universe().len(), 3);
    assert_eq!(engine.search("cat & dog & dog").unwrap().doc_ids, ids(&[1]));
    assert_eq!(engine.search("cat | fish | fish").unwrap().doc_ids, ids(&[1, 3]));
    assert_eq!(engine.search("!dog & fish & fish").unwrap().doc_ids, ids(&[3]));
}

#[test]
fn test_no_precedence_end_to_end() {
    let corpus = scenario_corpus();
    let out = TempDir::new().unwrap();
    let engine = SearchEngine::build(&config_for(&corpus, &out)).unwrap();

    // (fish | cat) & dog, not fish | (cat & dog)
    assert_eq!(engine.respond("fish | cat & dog"), "Result: 1");
    assert_eq!(engine.respond("cat | cat | cat"), "Result: 1");
}

#[test]
fn test_negation_uses_actual_universe() {
    let dir = TempDir::new().unwrap();
    write_doc(dir.path(), "150.txt", &["cat"]);
    write_doc(dir.path(), "4000.txt", &["dog"]);
    let out = TempDir::new().unwrap();

    let engine = SearchEngine::build(&config_for(&dir, &out)).unwrap();
    assert_eq!(engine.search("!cat | !cat | !cat").unwrap().doc_ids, ids(&[4000]));
    assert_eq!(engine.search("!fish & !fish & !fish").unwrap().doc_ids, ids(&[150, 4000]));
}

#[test]
fn test_malformed_queries() {
    let corpus = scenario_corpus();
    let out = TempDir::new().unwrap();
    let engine = SearchEngine::build(&config_for(&corpus, &out)).unwrap();

    let kind = |q: &str| engine.search(q).unwrap_err().kind;
    assert_eq!(kind(""), ErrorKind::EmptyQuery);
    assert_eq!(kind("cat dog fish"), ErrorKind::OperatorCountMismatch);
    assert_eq!(kind("cat & dog & fish & extra"), ErrorKind::OperatorCountMismatch);
    assert_eq!(kind("cat & & fish"), ErrorKind::WordCountMismatch);
    assert_eq!(kind("кот & 猫 | dog"), ErrorKind::UnsupportedLanguage);

    // The engine keeps answering after rejected queries
    assert_eq!(engine.respond("dog | dog | dog"), "Result: 1, 2");
}

#[test]
fn test_saved_index_format_and_reload() {
    let corpus = scenario_corpus();
    let out = TempDir::new().unwrap();
    let config = config_for(&corpus, &out);

    let engine = SearchEngine::build(&config).unwrap();

    let text = fs::read_to_string(&config.index_path).unwrap();
    assert_eq!(text, "cat:1\ndog:1,2\nfish:3\n");

    let reloaded = SearchEngine::load(&config).unwrap();
    assert_eq!(reloaded.index(), engine.index());
    assert_eq!(reloaded.respond("!dog & fish | cat"), engine.respond("!dog & fish | cat"));
}

#[test]
fn test_bad_document_aborts_by_default() {
    let corpus = scenario_corpus();
    fs::write(corpus.path().join("4.txt"), [0xc3, 0x28]).unwrap();
    let out = TempDir::new().unwrap();

    let err = SearchEngine::build(&config_for(&corpus, &out)).err().unwrap();
    assert_eq!(err.kind, ErrorKind::MalformedDocument);
}

#[test]
fn test_bad_documents_skipped_on_request() {
    let corpus = scenario_corpus();
    fs::write(corpus.path().join("4.txt"), [0xc3, 0x28]).unwrap();
    write_doc(corpus.path(), "notes.txt", &["cat"]);
    let out = TempDir::new().unwrap();

    let config = Config {
        failure_policy: FailurePolicy::Skip,
        ..config_for(&corpus, &out)
    };
    let engine = SearchEngine::build(&config).unwrap();

    assert_eq!(engine.stats().documents, 3);
    assert_eq!(engine.stats().skipped, 2);
    assert!(!engine.universe().contains(DocId(4)));
    assert_eq!(engine.search("!fish & !fish & !fish").unwrap().doc_ids, ids(&[1, 2]));
}

#[test]
fn test_empty_document_matches_negation() {
    let corpus = scenario_corpus();
    fs::write(corpus.path().join("9.txt"), "").unwrap();
    let out = TempDir::new().unwrap();

    let engine = SearchEngine::build(&config_for(&corpus, &out)).unwrap();
    assert_eq!(engine.search("!dog & !fish & !cat").unwrap().doc_ids, ids(&[9]));
}

#[test]
fn test_repeated_tokens_posted_once() {
    let dir = TempDir::new().unwrap();
    write_doc(dir.path(), "1.txt", &["cat"; 50]);
    let out = TempDir::new().unwrap();

    let engine = SearchEngine::build(&config_for(&dir, &out)).unwrap();
    let cat = engine.index().search_term(&Term::new("cat")).unwrap();
    assert_eq!(cat.len(), 1);
}

#[test]
fn test_concurrent_queries_share_engine() {
    let corpus = scenario_corpus();
    let out = TempDir::new().unwrap();
    let engine = Arc::new(SearchEngine::build(&config_for(&corpus, &out)).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                (0..100)
                    .map(|_| engine.respond("dog & !cat | fish"))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for line in handle.join().unwrap() {
            assert_eq!(line, "Result: 2, 3");
        }
    }
}

#[test]
fn test_strict_mode_from_config() {
    let corpus = scenario_corpus();
    let out = TempDir::new().unwrap();
    let config = Config {
        strict_queries: true,
        ..config_for(&corpus, &out)
    };

    let engine = SearchEngine::build(&config).unwrap();
    assert_eq!(engine.respond("big cat & dog | fish"), "bad word!");
    assert_eq!(engine.respond("cat & dog | fish"), "Result: 1, 3");
}

#[test]
fn test_reading_saved_index_directly() {
    let corpus = scenario_corpus();
    let out = TempDir::new().unwrap();
    let config = config_for(&corpus, &out);

    let engine = SearchEngine::build(&config).unwrap();

    let index = read_index(&config.index_path).unwrap();
    assert_eq!(index.len(), 3);
    assert_eq!(&index, engine.index());
}

#[test]
fn test_long_tokens_are_indexed() {
    let corpus = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let latin = "a".repeat(300);
    let cyrillic = "ж".repeat(200);
    write_doc(corpus.path(), "1.txt", &[latin.as_str(), "cat"]);
    write_doc(corpus.path(), "2.txt", &[cyrillic.as_str(), "dog"]);

    let engine = SearchEngine::build(&config_for(&corpus, &out)).unwrap();
    assert_eq!(engine.index().len(), 4);

    let postings = engine.index().search_term(&Term::new(&latin)).unwrap();
    assert_eq!(postings.to_vec(), ids(&[1]));
    let postings = engine.index().search_term(&Term::new(&cyrillic)).unwrap();
    assert_eq!(postings.to_vec(), ids(&[2]));

    let reloaded = SearchEngine::load(&config_for(&corpus, &out)).unwrap();
    assert_eq!(reloaded.index(), engine.index());
}

#[test]
fn test_numeric_tokens_are_queryable() {
    let corpus = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_doc(corpus.path(), "1.txt", &["2020", "elect"]);
    write_doc(corpus.path(), "2.txt", &["cat"]);

    let engine = SearchEngine::build(&config_for(&corpus, &out)).unwrap();
    assert_eq!(engine.respond("2020 | 2020 | cat"), "Result: 1, 2");
    assert_eq!(engine.respond("2020 & elect & 2020"), "Result: 1");
}

#[test]
fn test_no_save_leaves_no_index_file() {
    let corpus = scenario_corpus();
    let out = TempDir::new().unwrap();
    let config = Config { save_index: false, ..config_for(&corpus, &out) };

    SearchEngine::build(&config).unwrap();
    assert!(!config.index_path.exists());
}
