use crate::analysis::language::{Language, LanguageIdentifier, ScriptIdentifier};
use crate::analysis::stemmer::StemmerSet;
use crate::core::error::{Error, ErrorKind, Result};
use crate::index::inverted::Term;

/// Turns a raw query word into the term form stored in the index.
pub trait TermNormalizer: Send + Sync {
    fn identify_language(&self, raw: &str) -> Option<Language>;

    /// Fails with `UnsupportedLanguage` when no stemmer applies.
    fn normalize(&self, raw: &str) -> Result<Term>;
}

/// Lowercase, pick the stemmer by detected language, stem.
pub struct StemmingNormalizer {
    pub identifier: Box<dyn LanguageIdentifier>,
    stemmers: StemmerSet,
}

impl StemmingNormalizer {
    pub fn new(identifier: Box<dyn LanguageIdentifier>) -> Self {
        StemmingNormalizer {
            identifier,
            stemmers: StemmerSet::new(),
        }
    }
}

impl Default for StemmingNormalizer {
    fn default() -> Self {
        Self::new(Box::new(ScriptIdentifier))
    }
}

impl TermNormalizer for StemmingNormalizer {
    fn identify_language(&self, raw: &str) -> Option<Language> {
        self.identifier.identify(raw)
    }

    fn normalize(&self, raw: &str) -> Result<Term> {
        let language = self
            .identify_language(raw)
            .ok_or_else(|| Error::new(ErrorKind::UnsupportedLanguage, raw))?;

        let lowered = raw.to_lowercase();
        Ok(Term::new(&self.stemmers.stem(language, &lowered)))
    }
}

/// Leaves words untouched; for corpora that were never stemmed.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityNormalizer;

impl TermNormalizer for IdentityNormalizer {
    fn identify_language(&self, _raw: &str) -> Option<Language> {
        None
    }

    fn normalize(&self, raw: &str) -> Result<Term> {
        Ok(Term::new(raw))
    }
}
