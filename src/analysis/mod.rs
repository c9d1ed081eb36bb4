pub mod language;
pub mod normalizer;
pub mod stemmer;
pub mod tokenizer;
