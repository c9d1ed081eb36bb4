pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Splits pre-stemmed document text on any whitespace.
///
/// Corpus files hold one token per line, but several per line work the
/// same way. Tokens are taken verbatim, whatever their length: the corpus
/// is already normalized.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }
}
