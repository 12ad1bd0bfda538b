//! The precedence contract of the surface grammar, written down as data.
//!
//! The parser tries the alternatives of [`ALTERNATIVES`] strictly in order
//! and commits to the first one that fires, so the array *is* the precedence
//! table: earlier entries bind looser. Binary operators additionally carry
//! their scan direction, which is what realizes associativity: the first
//! weight-0 match of a left-to-right scan leaves the recursion on the right
//! (right-associative), a right-to-left scan leaves it on the left.

use crate::ast::Sort;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan {
    LeftToRight,
    RightToLeft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Implication,
    Disjunction,
    Conjunction,
    Equals,
    Addition,
    Multiplication,
}

impl BinaryOp {
    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Implication => '>',
            BinaryOp::Disjunction => '|',
            BinaryOp::Conjunction => '&',
            BinaryOp::Equals => '=',
            BinaryOp::Addition => '+',
            BinaryOp::Multiplication => '*',
        }
    }

    pub fn scan(self) -> Scan {
        match self {
            BinaryOp::Implication => Scan::LeftToRight,
            _ => Scan::RightToLeft,
        }
    }

    /// Sort both operands must coerce to.
    pub fn operand_sort(self) -> Sort {
        match self {
            BinaryOp::Implication | BinaryOp::Disjunction | BinaryOp::Conjunction => Sort::Formula,
            BinaryOp::Equals | BinaryOp::Addition | BinaryOp::Multiplication => Sort::Term,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alternative {
    Binary(BinaryOp),
    Negation,
    Quantifier,
    Predicate,
    Function,
    Successor,
    Group,
    Zero,
    Variable,
}

/// All fourteen grammar alternatives, loosest first.
pub const ALTERNATIVES: [Alternative; 14] = [
    Alternative::Binary(BinaryOp::Implication),
    Alternative::Binary(BinaryOp::Disjunction),
    Alternative::Binary(BinaryOp::Conjunction),
    Alternative::Negation,
    Alternative::Quantifier,
    Alternative::Predicate,
    Alternative::Binary(BinaryOp::Equals),
    Alternative::Binary(BinaryOp::Addition),
    Alternative::Binary(BinaryOp::Multiplication),
    Alternative::Function,
    Alternative::Successor,
    Alternative::Group,
    Alternative::Zero,
    Alternative::Variable,
];
