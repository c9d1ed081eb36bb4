use std::fs;
use std::path::{Path, PathBuf};
use regex::Regex;
use serde::{Serialize, Deserialize};
use crate::core::error::{Error, ErrorKind, Result};

/// What the index builder does with a document it cannot read or identify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// First bad document fails the whole build.
    Abort,
    /// Bad documents are logged and left out of the index and the universe.
    Skip,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub corpus_dir: PathBuf,
    pub index_path: PathBuf,

    // Index builder
    pub workers: usize,                 // 0 = one per CPU
    pub progress_interval: usize,       // log every N documents
    pub doc_id_pattern: String,         // applied to the file stem
    pub failure_policy: FailurePolicy,
    pub save_index: bool,

    // Query loop
    pub strict_queries: bool,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            corpus_dir: PathBuf::from("./stemmed"),
            index_path: PathBuf::from("./inverted_index.txt"),

            workers: num_cpus::get(),
            progress_interval: 1000,
            doc_id_pattern: r"^(\d+)$".to_string(),
            failure_policy: FailurePolicy::Abort,
            save_index: true,

            strict_queries: false,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load a JSON config file; missing fields keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.progress_interval == 0 {
            return Err(Error::new(ErrorKind::InvalidConfig, "progress_interval must be positive"));
        }
        self.doc_id_regex()?;
        Ok(())
    }

    pub fn doc_id_regex(&self) -> Result<Regex> {
        Regex::new(&self.doc_id_pattern).map_err(|e| {
            Error::new(ErrorKind::InvalidConfig, format!("doc_id_pattern: {}", e))
        })
    }

    pub fn effective_workers(&self) -> usize {
        if self.workers == 0 { num_cpus::get() } else { self.workers }
    }
}
