use rayon::prelude::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;
use tracing::{debug, info, warn};
use crate::core::config::{Config, FailurePolicy};
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::Document;
use crate::index::inverted::InvertedIndex;
use crate::index::universe::UniverseRegistry;
use crate::storage::corpus::{CorpusEntry, CorpusReader};

/// Parallel index builder.
///
/// Each rayon worker folds its share of documents into a private
/// index/universe pair; the pairs are then unioned. No state is shared
/// between workers while documents are processed, so nothing is locked.
pub struct ParallelIndexer {
    pub workers: usize,
    pub progress_interval: usize,
    pub policy: FailurePolicy,
    pub progress: Arc<AtomicUsize>,
    pool: rayon::ThreadPool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub documents: usize,
    pub skipped: usize,
    pub terms: usize,
    pub elapsed_ms: u64,
}

/// Result of a build: both structures are frozen from here on.
#[derive(Debug, Clone)]
pub struct BuiltIndex {
    pub index: InvertedIndex,
    pub universe: UniverseRegistry,
    pub stats: BuildStats,
}

#[derive(Default)]
struct Partial {
    index: InvertedIndex,
    universe: UniverseRegistry,
    documents: usize,
    skipped: usize,
}

impl Partial {
    fn add(&mut self, doc: &Document) {
        self.index.add_document(doc.id, &doc.tokens);
        // Registered even without tokens: it still matches negated literals
        self.universe.register(doc.id);
        self.documents += 1;
    }

    fn merge(mut self, other: Partial) -> Partial {
        self.index.merge(other.index);
        self.universe.merge(&other.universe);
        self.documents += other.documents;
        self.skipped += other.skipped;
        self
    }
}

impl ParallelIndexer {
    pub fn new(workers: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("indexer-{}", i))
            .build()
            .map_err(|e| Error::new(ErrorKind::InvalidConfig, format!("indexer pool: {}", e)))?;

        Ok(ParallelIndexer {
            workers,
            progress_interval: 1000,
            policy: FailurePolicy::Abort,
            progress: Arc::new(AtomicUsize::new(0)),
            pool,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let mut indexer = ParallelIndexer::new(config.effective_workers())?;
        indexer.progress_interval = config.progress_interval.max(1);
        indexer.policy = config.failure_policy;
        Ok(indexer)
    }

    /// Get current progress
    pub fn get_progress(&self) -> usize {
        self.progress.load(Ordering::Relaxed)
    }

    /// Index documents that are already in memory.
    pub fn build_from_documents(&self, documents: &[Document]) -> BuiltIndex {
        let started = Instant::now();
        self.begin(documents.len());

        let partial = self.pool.install(|| {
            documents
                .par_iter()
                .fold(Partial::default, |mut acc, doc| {
                    acc.add(doc);
                    self.tick(documents.len());
                    acc
                })
                .reduce(Partial::default, Partial::merge)
        });

        self.finish(partial, started)
    }

    /// Read and index corpus files in parallel.
    ///
    /// Under `Abort` the first unreadable document fails the build and no
    /// index is produced; under `Skip` it is logged and left out of both
    /// the index and the universe.
    pub fn build_from_corpus(&self, reader: &CorpusReader, entries: &[CorpusEntry]) -> Result<BuiltIndex> {
        let started = Instant::now();
        self.begin(entries.len());

        let partial = self.pool.install(|| {
            entries
                .par_iter()
                .try_fold(Partial::default, |mut acc, entry| {
                    match reader.load(entry) {
                        Ok(doc) => acc.add(&doc),
                        Err(e) if self.policy == FailurePolicy::Skip => {
                            warn!(path = %entry.path.display(), error = %e, "skipping document");
                            acc.skipped += 1;
                        }
                        Err(e) => return Err(e),
                    }
                    self.tick(entries.len());
                    Ok(acc)
                })
                .try_reduce(Partial::default, |a, b| Ok(a.merge(b)))
        })?;

        Ok(self.finish(partial, started))
    }

    fn begin(&self, total: usize) {
        self.progress.store(0, Ordering::Relaxed);
        info!(documents = total, workers = self.workers, "building index");
    }

    fn tick(&self, total: usize) {
        let current = self.progress.fetch_add(1, Ordering::Relaxed) + 1;
        if current % self.progress_interval == 0 {
            let percent = (current * 100) / total.max(1);
            debug!("Indexing progress: {}% ({}/{})", percent, current, total);
        }
    }

    fn finish(&self, partial: Partial, started: Instant) -> BuiltIndex {
        let stats = BuildStats {
            documents: partial.documents,
            skipped: partial.skipped,
            terms: partial.index.len(),
            elapsed_ms: started.elapsed().as_millis() as u64,
        };
        info!(
            documents = stats.documents,
            skipped = stats.skipped,
            terms = stats.terms,
            universe = partial.universe.len(),
            elapsed_ms = stats.elapsed_ms,
            "index built"
        );

        BuiltIndex {
            index: partial.index,
            universe: partial.universe,
            stats,
        }
    }
}
