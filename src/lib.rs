pub mod ast;
pub mod diagnostics;
pub mod fmt;
pub mod grammar;
pub mod lexical;
pub mod parser;

pub use ast::{Expr, Formula, Sort, Term};
pub use diagnostics::{ParseError, Span, hint_for_code};
pub use fmt::{render_expr, render_formula, render_term};
pub use lexical::clean;
pub use parser::{
    DEFAULT_MAX_DEPTH, ParseOptions, parse_many, parse_many_with, parse_one, parse_one_with,
};
