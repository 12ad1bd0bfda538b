//! Recursive-descent parser over character ranges of the cleaned input.
//!
//! There is no token stream. Each call owns an inclusive range `[l, r]` of
//! the character buffer and walks [`grammar::ALTERNATIVES`] in order,
//! committing to the first alternative that fires. Binary operators are
//! located by a bracket-weight scan: the weight counter changes on every
//! parenthesis of the range, and an operator only splits the range while the
//! weight is exactly 0, which keeps splits at the current nesting level.
//! Right-to-left scans update the weight mirrored (`)` opens, `(` closes).

use crate::ast::{Expr, Formula, Term};
use crate::diagnostics::{ParseError, Span};
use crate::grammar::{ALTERNATIVES, Alternative, BinaryOp, Scan};
use crate::lexical::{clean, is_digit, is_lower_alpha, is_upper_alpha};

pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Knobs for the parsing entry points. `max_depth` bounds the recursion so
/// hostile nesting fails with `TooDeep` instead of exhausting the stack.
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Parses exactly one formula or term from `src`. Whitespace is stripped
/// first; input containing a top-level comma is rejected.
pub fn parse_one(src: &str) -> Result<Expr, ParseError> {
    parse_one_with(src, ParseOptions::default())
}

pub fn parse_one_with(src: &str, options: ParseOptions) -> Result<Expr, ParseError> {
    let chars: Vec<char> = clean(src).chars().collect();
    if chars.is_empty() {
        return Err(ParseError::EmptyRange {
            span: Span::new(0, 0),
        });
    }
    if let Some(pos) = toplevel_comma(&chars) {
        return Err(ParseError::NoMatchingAlternative {
            span: Span::new(pos, pos),
        });
    }
    parse_range(&chars, 0, chars.len() - 1, 0, &options)
}

/// Parses a comma-separated sequence of formulas and terms, preserving
/// source order. Commas inside parentheses belong to argument lists and do
/// not split.
pub fn parse_many(src: &str) -> Result<Vec<Expr>, ParseError> {
    parse_many_with(src, ParseOptions::default())
}

pub fn parse_many_with(src: &str, options: ParseOptions) -> Result<Vec<Expr>, ParseError> {
    let chars: Vec<char> = clean(src).chars().collect();
    if chars.is_empty() {
        return Err(ParseError::EmptyRange {
            span: Span::new(0, 0),
        });
    }
    let items = parse_list(&chars, 0, chars.len() - 1, 0, &options)?;
    Ok(items.into_iter().map(|(expr, _)| expr).collect())
}

/// Weight-0 comma split of `[l, r]`; the trailing segment is always parsed,
/// so a comma-free range yields a single element.
fn parse_list(
    chars: &[char],
    l: usize,
    r: usize,
    depth: usize,
    options: &ParseOptions,
) -> Result<Vec<(Expr, Span)>, ParseError> {
    let mut items = Vec::new();
    let mut last = l;
    let mut weight = 0i32;

    for pos in l..=r {
        if weight == 0 && chars[pos] == ',' {
            items.push(parse_segment(chars, last, pos, depth, options)?);
            last = pos + 1;
        }
        match chars[pos] {
            '(' => weight += 1,
            ')' => weight -= 1,
            _ => {}
        }
    }

    items.push(parse_segment(chars, last, r + 1, depth, options)?);
    Ok(items)
}

/// Parses `[last, end)` as one list element. An empty segment (adjacent
/// commas, leading or trailing comma) is an error.
fn parse_segment(
    chars: &[char],
    last: usize,
    end: usize,
    depth: usize,
    options: &ParseOptions,
) -> Result<(Expr, Span), ParseError> {
    if last >= end {
        return Err(ParseError::EmptyRange {
            span: Span::new(last, last),
        });
    }
    let span = Span::new(last, end - 1);
    let expr = parse_range(chars, last, end - 1, depth, options)?;
    Ok((expr, span))
}

fn parse_range(
    chars: &[char],
    l: usize,
    r: usize,
    depth: usize,
    options: &ParseOptions,
) -> Result<Expr, ParseError> {
    if l > r {
        return Err(ParseError::EmptyRange {
            span: Span::new(l, l),
        });
    }
    if depth >= options.max_depth {
        return Err(ParseError::TooDeep {
            limit: options.max_depth,
            span: Span::new(l, r),
        });
    }

    for alternative in &ALTERNATIVES {
        if let Some(expr) = try_alternative(*alternative, chars, l, r, depth, options)? {
            return Ok(expr);
        }
    }

    // No alternative fired. Distinguish broken nesting from a plain
    // malformed token before giving up.
    if !is_balanced(chars, l, r) {
        return Err(ParseError::UnbalancedBrackets {
            span: Span::new(l, r),
        });
    }
    Err(ParseError::NoMatchingAlternative {
        span: Span::new(l, r),
    })
}

/// `Ok(None)` means the alternative did not fire and the next one should be
/// tried; `Ok(Some(_))` and `Err(_)` are both commitments.
fn try_alternative(
    alternative: Alternative,
    chars: &[char],
    l: usize,
    r: usize,
    depth: usize,
    options: &ParseOptions,
) -> Result<Option<Expr>, ParseError> {
    match alternative {
        Alternative::Binary(op) => try_binary(op, chars, l, r, depth, options),
        Alternative::Negation => try_negation(chars, l, r, depth, options),
        Alternative::Quantifier => try_quantifier(chars, l, r, depth, options),
        Alternative::Predicate => try_predicate(chars, l, r, depth, options),
        Alternative::Function => try_function(chars, l, r, depth, options),
        Alternative::Successor => try_successor(chars, l, r, depth, options),
        Alternative::Group => try_group(chars, l, r, depth, options),
        Alternative::Zero => Ok((l == r && chars[l] == '0').then_some(Expr::Term(Term::Zero))),
        Alternative::Variable => Ok(try_variable(chars, l, r)),
    }
}

fn try_binary(
    op: BinaryOp,
    chars: &[char],
    l: usize,
    r: usize,
    depth: usize,
    options: &ParseOptions,
) -> Result<Option<Expr>, ParseError> {
    let Some(pos) = find_split(op, chars, l, r) else {
        return Ok(None);
    };

    let mut left_end = pos;
    // The implication arrow may be spelled '->'; the '-' belongs to the
    // operator, not to the left operand.
    if op == BinaryOp::Implication && pos > l && chars[pos - 1] == '-' {
        left_end = pos - 1;
    }
    if left_end == l {
        return Err(ParseError::EmptyRange {
            span: Span::new(l, l),
        });
    }
    if pos == r {
        return Err(ParseError::EmptyRange {
            span: Span::new(r, r),
        });
    }

    let left_span = Span::new(l, left_end - 1);
    let right_span = Span::new(pos + 1, r);
    let left = parse_range(chars, l, left_end - 1, depth + 1, options)?;
    let right = parse_range(chars, pos + 1, r, depth + 1, options)?;

    let expr = match op {
        BinaryOp::Implication => Expr::Formula(Formula::Implication(
            Box::new(left.into_formula(left_span)?),
            Box::new(right.into_formula(right_span)?),
        )),
        BinaryOp::Disjunction => Expr::Formula(Formula::Disjunction(
            Box::new(left.into_formula(left_span)?),
            Box::new(right.into_formula(right_span)?),
        )),
        BinaryOp::Conjunction => Expr::Formula(Formula::Conjunction(
            Box::new(left.into_formula(left_span)?),
            Box::new(right.into_formula(right_span)?),
        )),
        BinaryOp::Equals => Expr::Formula(Formula::Equals(
            left.into_term(left_span)?,
            right.into_term(right_span)?,
        )),
        BinaryOp::Addition => Expr::Term(Term::Addition(
            Box::new(left.into_term(left_span)?),
            Box::new(right.into_term(right_span)?),
        )),
        BinaryOp::Multiplication => Expr::Term(Term::Multiplication(
            Box::new(left.into_term(left_span)?),
            Box::new(right.into_term(right_span)?),
        )),
    };
    Ok(Some(expr))
}

/// First weight-0 occurrence of the operator symbol in the scan direction of
/// `op`. The weight is updated for every character of the range whether or
/// not it matched, so the counter stays consistent across the traversal.
fn find_split(op: BinaryOp, chars: &[char], l: usize, r: usize) -> Option<usize> {
    let symbol = op.symbol();
    let mut weight = 0i32;
    match op.scan() {
        Scan::LeftToRight => {
            for pos in l..=r {
                if weight == 0 && chars[pos] == symbol {
                    return Some(pos);
                }
                match chars[pos] {
                    '(' => weight += 1,
                    ')' => weight -= 1,
                    _ => {}
                }
            }
        }
        Scan::RightToLeft => {
            for pos in (l..=r).rev() {
                if weight == 0 && chars[pos] == symbol {
                    return Some(pos);
                }
                match chars[pos] {
                    '(' => weight -= 1,
                    ')' => weight += 1,
                    _ => {}
                }
            }
        }
    }
    None
}

fn try_negation(
    chars: &[char],
    l: usize,
    r: usize,
    depth: usize,
    options: &ParseOptions,
) -> Result<Option<Expr>, ParseError> {
    if chars[l] != '!' {
        return Ok(None);
    }
    if l == r {
        return Err(ParseError::EmptyRange {
            span: Span::new(l, l),
        });
    }
    let body_span = Span::new(l + 1, r);
    let body = parse_range(chars, l + 1, r, depth + 1, options)?.into_formula(body_span)?;
    Ok(Some(Expr::Formula(Formula::Negation(Box::new(body)))))
}

fn try_quantifier(
    chars: &[char],
    l: usize,
    r: usize,
    depth: usize,
    options: &ParseOptions,
) -> Result<Option<Expr>, ParseError> {
    if chars[l] != '@' && chars[l] != '?' {
        return Ok(None);
    }
    // Marker, then one letter, then a maximal digit run for the subscript.
    if l + 1 > r || !is_lower_alpha(chars[l + 1]) {
        return Err(ParseError::InvalidQuantifierVariable {
            span: Span::new(l, r),
        });
    }
    let mut m = l + 2;
    while m <= r && is_digit(chars[m]) {
        m += 1;
    }
    if m > r {
        // The digit run ran past the end of the range: quantifier without a
        // body.
        return Err(ParseError::InvalidQuantifierVariable {
            span: Span::new(l, r),
        });
    }

    let variable: String = chars[l + 1..m].iter().collect();
    let body_span = Span::new(m, r);
    let body = parse_range(chars, m, r, depth + 1, options)?.into_formula(body_span)?;
    let formula = if chars[l] == '@' {
        Formula::Universal(variable, Box::new(body))
    } else {
        Formula::Existential(variable, Box::new(body))
    };
    Ok(Some(Expr::Formula(formula)))
}

fn try_predicate(
    chars: &[char],
    l: usize,
    r: usize,
    depth: usize,
    options: &ParseOptions,
) -> Result<Option<Expr>, ParseError> {
    if !is_upper_alpha(chars[l]) {
        return Ok(None);
    }
    let mut m = l + 1;
    while m <= r && is_digit(chars[m]) {
        m += 1;
    }
    let name: String = chars[l..m].iter().collect();

    if m > r {
        // Name consumes the whole range: 0-ary predicate.
        return Ok(Some(Expr::Formula(Formula::Predicate {
            name,
            args: Vec::new(),
        })));
    }
    if chars[m] != '(' || !group_extends_to(chars, m, r) {
        // Something follows the name that is not a whole-range argument
        // list; leave it to the lower-precedence alternatives.
        return Ok(None);
    }

    let args = parse_args(chars, m + 1, r - 1, depth, options)?;
    Ok(Some(Expr::Formula(Formula::Predicate { name, args })))
}

fn try_function(
    chars: &[char],
    l: usize,
    r: usize,
    depth: usize,
    options: &ParseOptions,
) -> Result<Option<Expr>, ParseError> {
    if !is_lower_alpha(chars[l]) {
        return Ok(None);
    }
    let mut m = l + 1;
    while m <= r && is_digit(chars[m]) {
        m += 1;
    }
    // Without the parenthesized argument list there is no function form;
    // the bare name falls through to the variable alternative.
    if m > r || chars[m] != '(' || !group_extends_to(chars, m, r) {
        return Ok(None);
    }

    let name: String = chars[l..m].iter().collect();
    let args = parse_args(chars, m + 1, r - 1, depth, options)?;
    Ok(Some(Expr::Term(Term::FunctionCall { name, args })))
}

/// Argument list between the parens of a predicate or function application:
/// every element must coerce to a term.
fn parse_args(
    chars: &[char],
    l: usize,
    r: usize,
    depth: usize,
    options: &ParseOptions,
) -> Result<Vec<Term>, ParseError> {
    if l > r {
        return Err(ParseError::EmptyRange {
            span: Span::new(l, l),
        });
    }
    let items = parse_list(chars, l, r, depth + 1, options)?;
    let mut args = Vec::with_capacity(items.len());
    for (expr, span) in items {
        args.push(expr.into_term(span)?);
    }
    Ok(args)
}

fn try_successor(
    chars: &[char],
    l: usize,
    r: usize,
    depth: usize,
    options: &ParseOptions,
) -> Result<Option<Expr>, ParseError> {
    if chars[r] != '\'' {
        return Ok(None);
    }
    if l == r {
        return Err(ParseError::EmptyRange {
            span: Span::new(l, l),
        });
    }
    let inner_span = Span::new(l, r - 1);
    let inner = parse_range(chars, l, r - 1, depth + 1, options)?.into_term(inner_span)?;
    Ok(Some(Expr::Term(Term::Successor(Box::new(inner)))))
}

fn try_group(
    chars: &[char],
    l: usize,
    r: usize,
    depth: usize,
    options: &ParseOptions,
) -> Result<Option<Expr>, ParseError> {
    if chars[l] != '(' {
        return Ok(None);
    }
    if !group_extends_to(chars, l, r) {
        return Err(ParseError::UnbalancedBrackets {
            span: Span::new(l, r),
        });
    }
    if l + 1 > r - 1 {
        return Err(ParseError::EmptyRange {
            span: Span::new(l, r),
        });
    }
    // Sort is inherited from the inner range.
    parse_range(chars, l + 1, r - 1, depth + 1, options).map(Some)
}

fn try_variable(chars: &[char], l: usize, r: usize) -> Option<Expr> {
    if !is_lower_alpha(chars[l]) {
        return None;
    }
    if !chars[l + 1..=r].iter().all(|c| is_digit(*c)) {
        return None;
    }
    let name: String = chars[l..=r].iter().collect();
    Some(Expr::Term(Term::Variable(name)))
}

/// Whether the `(` at `open` finds its matching `)` exactly at `r`.
fn group_extends_to(chars: &[char], open: usize, r: usize) -> bool {
    if chars[r] != ')' {
        return false;
    }
    let mut weight = 0i32;
    for pos in open..=r {
        match chars[pos] {
            '(' => weight += 1,
            ')' => {
                weight -= 1;
                if weight == 0 {
                    return pos == r;
                }
            }
            _ => {}
        }
    }
    false
}

fn is_balanced(chars: &[char], l: usize, r: usize) -> bool {
    let mut weight = 0i32;
    for pos in l..=r {
        match chars[pos] {
            '(' => weight += 1,
            ')' => weight -= 1,
            _ => {}
        }
        if weight < 0 {
            return false;
        }
    }
    weight == 0
}

fn toplevel_comma(chars: &[char]) -> Option<usize> {
    let mut weight = 0i32;
    for (pos, c) in chars.iter().enumerate() {
        if weight == 0 && *c == ',' {
            return Some(pos);
        }
        match c {
            '(' => weight += 1,
            ')' => weight -= 1,
            _ => {}
        }
    }
    None
}
