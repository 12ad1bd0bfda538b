//! The two-sorted expression trees the parser produces.
//!
//! `Formula` and `Term` are disjoint immutable value trees; `Expr` is the
//! sum the recursive parser actually returns, since at most split points the
//! sort of a sub-range is only known after parsing it. Callers that need a
//! specific sort go through [`Expr::into_formula`] / [`Expr::into_term`],
//! which fail with `SortMismatch` instead of coercing silently. The single
//! sanctioned exception: a bare `Term::Variable` in a formula position
//! becomes the 0-ary predicate of the same name (a propositional atom).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::diagnostics::{ParseError, Span};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sort {
    Formula,
    Term,
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sort::Formula => write!(f, "formula"),
            Sort::Term => write!(f, "term"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Formula {
    Implication(Box<Formula>, Box<Formula>),
    Disjunction(Box<Formula>, Box<Formula>),
    Conjunction(Box<Formula>, Box<Formula>),
    Negation(Box<Formula>),
    Universal(String, Box<Formula>),
    Existential(String, Box<Formula>),
    Predicate { name: String, args: Vec<Term> },
    Equals(Term, Term),
}

impl Formula {
    pub fn predicate(name: impl Into<String>, args: Vec<Term>) -> Self {
        Formula::Predicate {
            name: name.into(),
            args,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Term {
    Addition(Box<Term>, Box<Term>),
    Multiplication(Box<Term>, Box<Term>),
    FunctionCall { name: String, args: Vec<Term> },
    Successor(Box<Term>),
    Zero,
    Variable(String),
}

impl Term {
    pub fn variable(name: impl Into<String>) -> Self {
        Term::Variable(name.into())
    }

    pub fn function(name: impl Into<String>, args: Vec<Term>) -> Self {
        Term::FunctionCall {
            name: name.into(),
            args,
        }
    }
}

/// One parsed expression of either sort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expr {
    Formula(Formula),
    Term(Term),
}

impl Expr {
    pub fn sort(&self) -> Sort {
        match self {
            Expr::Formula(_) => Sort::Formula,
            Expr::Term(_) => Sort::Term,
        }
    }

    /// Checked coercion into a formula. A bare variable is reinterpreted as
    /// a 0-ary predicate; every other term-only variant is a sort violation
    /// reported against `at`.
    pub fn into_formula(self, at: Span) -> Result<Formula, ParseError> {
        match self {
            Expr::Formula(formula) => Ok(formula),
            Expr::Term(Term::Variable(name)) => Ok(Formula::Predicate {
                name,
                args: Vec::new(),
            }),
            Expr::Term(_) => Err(ParseError::SortMismatch {
                expected: Sort::Formula,
                found: Sort::Term,
                span: at,
            }),
        }
    }

    /// Checked coercion into a term. No formula variant satisfies a term
    /// position; the variable exemption only runs in the other direction.
    pub fn into_term(self, at: Span) -> Result<Term, ParseError> {
        match self {
            Expr::Term(term) => Ok(term),
            Expr::Formula(_) => Err(ParseError::SortMismatch {
                expected: Sort::Term,
                found: Sort::Formula,
                span: at,
            }),
        }
    }
}
