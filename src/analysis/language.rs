use rust_stemmers::Algorithm;

/// Languages the normalizer has a stemmer for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Russian,
}

impl Language {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Language::English => Algorithm::English,
            Language::Russian => Algorithm::Russian,
        }
    }
}

pub trait LanguageIdentifier: Send + Sync {
    /// Most likely language of a single word, or `None` if it can't be told.
    fn identify(&self, text: &str) -> Option<Language>;
}

/// Identifies a word by the script of its letters.
///
/// Query literals are single words, where statistical n-gram models have
/// almost nothing to work with; the script alone separates the two
/// supported languages. Digits and punctuation are ignored. A word made
/// only of them (`2020`, `3.14`) goes to English, whose stemmer leaves it
/// unchanged. Empty words and words with letters from an unknown script,
/// or from several scripts, are unidentified.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptIdentifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Script {
    Latin,
    Cyrillic,
    Other,
}

fn script_of(c: char) -> Script {
    match c {
        'a'..='z' | 'A'..='Z' => Script::Latin,
        '\u{00C0}'..='\u{024F}' => Script::Latin,
        '\u{0400}'..='\u{04FF}' | '\u{0500}'..='\u{052F}' => Script::Cyrillic,
        _ => Script::Other,
    }
}

impl LanguageIdentifier for ScriptIdentifier {
    fn identify(&self, text: &str) -> Option<Language> {
        let mut seen: Option<Script> = None;

        for c in text.chars().filter(|c| c.is_alphabetic()) {
            let script = script_of(c);
            if script == Script::Other {
                return None;
            }
            match seen {
                None => seen = Some(script),
                Some(prev) if prev != script => return None,
                Some(_) => {}
            }
        }

        match seen {
            None if text.trim().is_empty() => None,
            None | Some(Script::Latin) => Some(Language::English),
            Some(Script::Cyrillic) => Some(Language::Russian),
            Some(Script::Other) => None,
        }
    }
}
