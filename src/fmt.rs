//! Canonical rendering of expression trees back into the surface grammar.
//!
//! Binary nodes are always parenthesized, so precedence never has to be
//! reconstructed: re-parsing a rendering yields a structurally identical
//! tree. Unary forms keep their surface spelling (`!`, `@x1`, postfix `'`).

use std::fmt;

use crate::ast::{Expr, Formula, Term};

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Implication(left, right) => write!(f, "({left}>{right})"),
            Formula::Disjunction(left, right) => write!(f, "({left}|{right})"),
            Formula::Conjunction(left, right) => write!(f, "({left}&{right})"),
            Formula::Negation(body) => write!(f, "!{body}"),
            Formula::Universal(variable, body) => write!(f, "@{variable}{body}"),
            Formula::Existential(variable, body) => write!(f, "?{variable}{body}"),
            Formula::Predicate { name, args } => write_application(f, name, args),
            Formula::Equals(left, right) => write!(f, "({left}={right})"),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Addition(left, right) => write!(f, "({left}+{right})"),
            Term::Multiplication(left, right) => write!(f, "({left}*{right})"),
            Term::FunctionCall { name, args } => write_application(f, name, args),
            Term::Successor(inner) => write!(f, "{inner}'"),
            Term::Zero => write!(f, "0"),
            Term::Variable(name) => write!(f, "{name}"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Formula(formula) => formula.fmt(f),
            Expr::Term(term) => term.fmt(f),
        }
    }
}

fn write_application(f: &mut fmt::Formatter<'_>, name: &str, args: &[Term]) -> fmt::Result {
    if args.is_empty() {
        return write!(f, "{name}");
    }
    write!(f, "{name}(")?;
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }
        write!(f, "{arg}")?;
    }
    write!(f, ")")
}

pub fn render_formula(formula: &Formula) -> String {
    formula.to_string()
}

pub fn render_term(term: &Term) -> String {
    term.to_string()
}

pub fn render_expr(expr: &Expr) -> String {
    expr.to_string()
}
