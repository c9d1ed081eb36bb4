use std::fmt;
use crate::index::inverted::Term;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BooleanOperator {
    And, // `&`, intersection
    Or,  // `|`, union
}

impl BooleanOperator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '&' => Some(BooleanOperator::And),
            '|' => Some(BooleanOperator::Or),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            BooleanOperator::And => '&',
            BooleanOperator::Or => '|',
        }
    }
}

/// One query word with its negation flag; `text` has the `!` stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pub text: String,
    pub negated: bool,
}

impl Literal {
    pub fn new(text: impl Into<String>, negated: bool) -> Self {
        Literal { text: text.into(), negated }
    }

    pub fn positive(text: impl Into<String>) -> Self {
        Literal::new(text, false)
    }

    pub fn negative(text: impl Into<String>) -> Self {
        Literal::new(text, true)
    }
}

/// `literals[0] operators[0] literals[1] operators[1] literals[2]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    pub literals: [Literal; 3],
    pub operators: [BooleanOperator; 2],
}

/// A literal after normalization: the term looked up in the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedLiteral {
    pub term: Term,
    pub negated: bool,
}

impl NormalizedLiteral {
    pub fn new(term: Term, negated: bool) -> Self {
        NormalizedLiteral { term, negated }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery {
    pub literals: [NormalizedLiteral; 3],
    pub operators: [BooleanOperator; 2],
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.negated {
            write!(f, "!")?;
        }
        write!(f, "{}", self.text)
    }
}

impl fmt::Display for NormalizedLiteral {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.negated {
            write!(f, "!")?;
        }
        write!(f, "{}", self.term)
    }
}

impl fmt::Display for ParsedQuery {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.literals[0],
            self.operators[0].symbol(),
            self.literals[1],
            self.operators[1].symbol(),
            self.literals[2]
        )
    }
}

impl fmt::Display for NormalizedQuery {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "({} {} {}) {} {}",
            self.literals[0],
            self.operators[0].symbol(),
            self.literals[1],
            self.operators[1].symbol(),
            self.literals[2]
        )
    }
}
