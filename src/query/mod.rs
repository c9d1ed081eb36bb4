pub mod ast;
pub mod evaluator;
pub mod parser;
