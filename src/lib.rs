pub mod core;
pub mod storage;
pub mod analysis;
pub mod index;
pub mod parallel;
pub mod query;
pub mod search;

pub use crate::core::config::{Config, FailurePolicy};
pub use crate::core::error::{Error, ErrorKind, Result};
pub use crate::core::types::{DocId, Document};
pub use crate::search::engine::SearchEngine;
pub use crate::search::results::SearchResults;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/*
┌──────────────────────────────── TRIQUERY ARCHITECTURE ────────────────────────────────┐
│                                                                                        │
│   BUILD (once, at startup)                                                             │
│                                                                                        │
│   ┌──────────────────┐   entries   ┌──────────────────────┐   fold/reduce             │
│   │ CorpusReader     │ ──────────▶ │ ParallelIndexer      │ ─────────────┐            │
│   │ • root: PathBuf  │             │ • pool: ThreadPool   │              │            │
│   │ • doc_id_pattern │             │ • policy: Abort|Skip │              ▼            │
│   │ • tokenizer      │             │ • progress: Atomic   │   ┌────────────────────┐  │
│   └──────────────────┘             └──────────────────────┘   │ BuiltIndex         │  │
│                                                                │ • InvertedIndex    │  │
│                                                                │   Term → PostingSet│  │
│                                                                │ • UniverseRegistry │  │
│                                                                │ • BuildStats       │  │
│                                                                └─────────┬──────────┘  │
│                                                                          │ frozen      │
│   QUERY (per line)                                                       ▼             │
│                                                                                        │
│   "a & !b | c" ─▶ QueryParser ─▶ ParsedQuery ─▶ TermNormalizer ─▶ NormalizedQuery     │
│                   (2 ops,        [Literal;3]     (language →       [NormalizedLit;3]  │
│                    3 words)      [Op;2]           stemmer)                │            │
│                                                                           ▼            │
│                            SearchResults ◀── QueryEvaluator: (l0 op0 l1) op1 l2       │
│                            "Result: 1, 3"    !t = universe \ postings(t)              │
│                                                                                        │
│   PERSISTENCE: storage::index_file   term:id1,id2,...  (one line per term)            │
└────────────────────────────────────────────────────────────────────────────────────────┘
*/
