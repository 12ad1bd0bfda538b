use folparse::lexical::{clean, is_digit, is_lower_alpha, is_upper_alpha};

#[test]
fn clean_removes_every_whitespace_character() {
    assert_eq!(clean("@x1 P (x1)"), "@x1P(x1)");
    assert_eq!(clean("a +\tb\n* c"), "a+b*c");
    assert_eq!(clean("  A  >  B  "), "A>B");
}

#[test]
fn clean_keeps_relative_order() {
    assert_eq!(clean("P ( x , y )"), "P(x,y)");
}

#[test]
fn clean_is_idempotent() {
    for src in ["", "   ", "A > B", "@x1P(x1)", "0 ' '"] {
        let once = clean(src);
        assert_eq!(clean(&once), once);
    }
}

#[test]
fn clean_of_blank_input_is_empty() {
    assert_eq!(clean(""), "");
    assert_eq!(clean(" \t\n"), "");
}

#[test]
fn digit_predicate_covers_ascii_digits_only() {
    for c in '0'..='9' {
        assert!(is_digit(c));
    }
    assert!(!is_digit('a'));
    assert!(!is_digit('A'));
    assert!(!is_digit('\''));
}

#[test]
fn case_predicates_are_ascii_and_disjoint() {
    for c in 'A'..='Z' {
        assert!(is_upper_alpha(c));
        assert!(!is_lower_alpha(c));
    }
    for c in 'a'..='z' {
        assert!(is_lower_alpha(c));
        assert!(!is_upper_alpha(c));
    }
    // No locale sensitivity: non-ASCII letters are outside the grammar.
    assert!(!is_upper_alpha('Ä'));
    assert!(!is_lower_alpha('é'));
}
