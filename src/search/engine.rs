use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};
use crate::analysis::normalizer::{StemmingNormalizer, TermNormalizer};
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::types::Document;
use crate::index::inverted::InvertedIndex;
use crate::index::universe::UniverseRegistry;
use crate::parallel::indexer::{BuildStats, BuiltIndex, ParallelIndexer};
use crate::query::ast::{Literal, NormalizedLiteral, NormalizedQuery, ParsedQuery};
use crate::query::evaluator::QueryEvaluator;
use crate::query::parser::QueryParser;
use crate::search::results::SearchResults;
use crate::storage::corpus::CorpusReader;
use crate::storage::index_file;

/// Built once, then answers queries.
///
/// The index and universe are never mutated after construction, so one
/// engine behind an `Arc` can serve queries from many threads.
pub struct SearchEngine {
    index: InvertedIndex,
    universe: UniverseRegistry,
    parser: QueryParser,
    normalizer: Box<dyn TermNormalizer>,
    stats: BuildStats,
}

impl SearchEngine {
    pub fn new(index: InvertedIndex, universe: UniverseRegistry) -> Self {
        let stats = BuildStats {
            documents: universe.len() as usize,
            terms: index.len(),
            ..BuildStats::default()
        };
        SearchEngine {
            index,
            universe,
            parser: QueryParser::new(),
            normalizer: Box::new(StemmingNormalizer::default()),
            stats,
        }
    }

    pub fn from_built(built: BuiltIndex) -> Self {
        let mut engine = SearchEngine::new(built.index, built.universe);
        engine.stats = built.stats;
        engine
    }

    pub fn with_parser(mut self, parser: QueryParser) -> Self {
        self.parser = parser;
        self
    }

    pub fn with_normalizer(mut self, normalizer: Box<dyn TermNormalizer>) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Read the corpus directory and index it in parallel. With
    /// `save_index` set the index is written to `index_path` before the
    /// engine is returned.
    pub fn build(config: &Config) -> Result<Self> {
        config.validate()?;

        let reader = CorpusReader::new(config.corpus_dir.clone(), config.doc_id_regex()?);
        let (entries, skipped_names) = reader.discover(config.failure_policy)?;

        let indexer = ParallelIndexer::from_config(config)?;
        let mut built = indexer.build_from_corpus(&reader, &entries)?;
        built.stats.skipped += skipped_names;

        let engine = SearchEngine::from_built(built).with_parser(parser_for(config));
        if config.save_index {
            engine.save(&config.index_path)?;
        } else {
            info!("index not saved (save_index is off)");
        }
        Ok(engine)
    }

    /// Index documents already held in memory.
    pub fn from_documents(documents: &[Document], config: &Config) -> Result<Self> {
        let indexer = ParallelIndexer::from_config(config)?;
        let built = indexer.build_from_documents(documents);
        Ok(SearchEngine::from_built(built).with_parser(parser_for(config)))
    }

    /// Restore from a saved index file instead of the corpus.
    ///
    /// The file only lists documents under some term, so documents that had
    /// no tokens are not part of the restored universe.
    pub fn load(config: &Config) -> Result<Self> {
        let index = index_file::read_index(&config.index_path)?;
        let universe: UniverseRegistry = index.documents().iter().collect();
        Ok(SearchEngine::new(index, universe).with_parser(parser_for(config)))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        index_file::write_index(path, &self.index)
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    pub fn universe(&self) -> &UniverseRegistry {
        &self.universe
    }

    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    pub fn normalize(&self, parsed: &ParsedQuery) -> Result<NormalizedQuery> {
        let [a, b, c] = &parsed.literals;
        let normalize = |literal: &Literal| -> Result<NormalizedLiteral> {
            Ok(NormalizedLiteral::new(self.normalizer.normalize(&literal.text)?, literal.negated))
        };

        Ok(NormalizedQuery {
            literals: [normalize(a)?, normalize(b)?, normalize(c)?],
            operators: parsed.operators,
        })
    }

    /// Parse, normalize and evaluate one query line.
    pub fn search(&self, input: &str) -> Result<SearchResults> {
        let started = Instant::now();

        let parsed = self.parser.parse(input)?;
        let query = self.normalize(&parsed)?;
        debug!(raw = %parsed, normalized = %query, "evaluating query");

        let doc_ids = QueryEvaluator::new(&self.index, &self.universe).evaluate(&query);
        let took_us = started.elapsed().as_micros() as u64;
        debug!(hits = doc_ids.len(), took_us, "query done");

        Ok(SearchResults { query, doc_ids, took_us })
    }

    /// The line printed for a query: results or a diagnostic.
    pub fn respond(&self, input: &str) -> String {
        match self.search(input) {
            Ok(results) => results.to_string(),
            Err(e) => {
                debug!(input, error = %e, "query rejected");
                e.diagnostic()
            }
        }
    }
}

fn parser_for(config: &Config) -> QueryParser {
    QueryParser { strict: config.strict_queries }
}
