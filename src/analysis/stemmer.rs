use rust_stemmers::Stemmer;
use crate::analysis::language::Language;

/// Snowball stemmers for every supported language, created once.
pub struct StemmerSet {
    english: Stemmer,
    russian: Stemmer,
}

impl StemmerSet {
    pub fn new() -> Self {
        StemmerSet {
            english: Stemmer::create(Language::English.algorithm()),
            russian: Stemmer::create(Language::Russian.algorithm()),
        }
    }

    pub fn stemmer(&self, language: Language) -> &Stemmer {
        match language {
            Language::English => &self.english,
            Language::Russian => &self.russian,
        }
    }

    /// Stem an already lowercased word.
    pub fn stem(&self, language: Language, word: &str) -> String {
        self.stemmer(language).stem(word).into_owned()
    }
}

impl Default for StemmerSet {
    fn default() -> Self {
        Self::new()
    }
}
