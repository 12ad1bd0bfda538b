#![allow(dead_code)]

use folparse::{Formula, Term};
use proptest::prelude::*;

// Predicate names are kept upper-case so a rendered 0-ary predicate never
// re-parses as a term variable; that keeps round trips exact.
fn predicate_name() -> impl Strategy<Value = String> {
    "[A-Z][0-9]{0,2}"
}

fn variable_name() -> impl Strategy<Value = String> {
    "[a-z][0-9]{0,2}"
}

pub fn term_strategy() -> impl Strategy<Value = Term> {
    let leaf = prop_oneof![
        Just(Term::Zero),
        variable_name().prop_map(Term::Variable),
    ];
    leaf.prop_recursive(4, 24, 3, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone())
                .prop_map(|(a, b)| Term::Addition(Box::new(a), Box::new(b))),
            (inner.clone(), inner.clone())
                .prop_map(|(a, b)| Term::Multiplication(Box::new(a), Box::new(b))),
            inner.clone().prop_map(|t| Term::Successor(Box::new(t))),
            // Function calls need at least one argument: the surface form
            // 'f()' does not exist in the grammar.
            (variable_name(), prop::collection::vec(inner, 1..3))
                .prop_map(|(name, args)| Term::FunctionCall { name, args }),
        ]
    })
}

pub fn formula_strategy() -> impl Strategy<Value = Formula> {
    let leaf = prop_oneof![
        (predicate_name(), prop::collection::vec(term_strategy(), 0..3))
            .prop_map(|(name, args)| Formula::Predicate { name, args }),
        (term_strategy(), term_strategy()).prop_map(|(l, r)| Formula::Equals(l, r)),
    ];
    leaf.prop_recursive(3, 16, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone())
                .prop_map(|(a, b)| Formula::Implication(Box::new(a), Box::new(b))),
            (inner.clone(), inner.clone())
                .prop_map(|(a, b)| Formula::Disjunction(Box::new(a), Box::new(b))),
            (inner.clone(), inner.clone())
                .prop_map(|(a, b)| Formula::Conjunction(Box::new(a), Box::new(b))),
            inner.clone().prop_map(|f| Formula::Negation(Box::new(f))),
            (variable_name(), inner.clone())
                .prop_map(|(v, f)| Formula::Universal(v, Box::new(f))),
            (variable_name(), inner.clone())
                .prop_map(|(v, f)| Formula::Existential(v, Box::new(f))),
        ]
    })
}
