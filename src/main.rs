use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::{info, warn};
use triquery::search::session;
use triquery::{Config, FailurePolicy, SearchEngine};

#[derive(Parser)]
#[command(name = "triquery")]
#[command(about = "Three-term boolean search over a pre-stemmed corpus", long_about = None)]
struct Args {
    /// JSON config file; flags below override it
    #[arg(long, env = "TRIQUERY_CONFIG")]
    config: Option<PathBuf>,

    /// Directory with one pre-stemmed document per file
    #[arg(long, env = "TRIQUERY_CORPUS_DIR")]
    corpus_dir: Option<PathBuf>,

    /// Where the index is saved to / loaded from
    #[arg(long, env = "TRIQUERY_INDEX_PATH")]
    index_path: Option<PathBuf>,

    /// Indexing threads (0 = one per CPU)
    #[arg(long, env = "TRIQUERY_WORKERS")]
    workers: Option<usize>,

    /// Reject multi-word and doubly negated literals
    #[arg(long)]
    strict: bool,

    /// Log and skip unreadable documents instead of aborting the build
    #[arg(long)]
    skip_bad_documents: bool,

    /// Load a previously saved index instead of reading the corpus
    #[arg(long)]
    load_index: bool,

    /// Don't write the index file after building
    #[arg(long)]
    no_save: bool,

    /// Answer these queries and exit instead of prompting
    #[arg(long = "query", short = 'q')]
    queries: Vec<String>,
}

impl Args {
    fn into_config(self) -> Result<(Config, bool, Vec<String>)> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => Config::default(),
        };

        if let Some(dir) = self.corpus_dir {
            config.corpus_dir = dir;
        }
        if let Some(path) = self.index_path {
            config.index_path = path;
        }
        if let Some(workers) = self.workers {
            config.workers = workers;
        }
        if self.strict {
            config.strict_queries = true;
        }
        if self.skip_bad_documents {
            config.failure_policy = FailurePolicy::Skip;
        }
        if self.no_save {
            config.save_index = false;
        }
        config.validate()?;

        Ok((config, self.load_index, self.queries))
    }
}

fn main() -> Result<()> {
    let (config, load_index, queries) = Args::parse().into_config()?;

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    info!("Starting triquery v{}", triquery::VERSION);

    let engine = if load_index {
        SearchEngine::load(&config)
            .with_context(|| format!("loading index {}", config.index_path.display()))?
    } else {
        println!("Reading...");
        let engine = SearchEngine::build(&config)
            .with_context(|| format!("indexing {}", config.corpus_dir.display()))?;
        if engine.stats().skipped > 0 {
            warn!(skipped = engine.stats().skipped, "some documents were not indexed");
        }
        if config.save_index {
            println!("Saving index...");
        }
        engine
    };

    let stdout = io::stdout();
    if !queries.is_empty() {
        session::answer_queries(&engine, &queries, stdout.lock())?;
        return Ok(());
    }

    session::run_queries(&engine, io::stdin().lock(), stdout.lock())?;
    info!("exiting");
    Ok(())
}
