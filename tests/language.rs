use std::fs;

use cosmo::{
    error::{Diagnostic, ErrorKind, report},
    interpreter::{
        lexer::{TokenKind, tokenize},
        value::Value,
    },
    run,
};
use walkdir::WalkDir;

fn assert_value(source: &str, expected: Value) {
    match run("<test>", source) {
        Ok(value) => assert_eq!(value, expected, "wrong result for {source:?}"),
        Err(e) => panic!("Script failed: {source:?}\n{}", report::render(source, &e)),
    }
}

fn assert_fails_with(source: &str, kind: ErrorKind) -> Diagnostic {
    match run("<test>", source) {
        Ok(value) => panic!("Script succeeded with {value} but was expected to fail: {source:?}"),
        Err(diagnostic) => {
            assert_eq!(diagnostic.kind(), kind, "wrong error kind for {source:?}");
            diagnostic
        },
    }
}

#[test]
fn integer_token_spans_exactly_its_digits() {
    let tokens = tokenize("  42 ").unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Integer(42));
    assert_eq!(tokens[0].span.start.offset, 2);
    assert_eq!(tokens[0].span.start.column, 2);
    assert_eq!(tokens[0].span.end.offset, 4);

    // The end-of-input sentinel is zero-width at the final position.
    assert_eq!(tokens[1].kind, TokenKind::Eof);
    assert_eq!(tokens[1].span.start.offset, 5);
    assert_eq!(tokens[1].span.start, tokens[1].span.end);
}

#[test]
fn float_literal_forms() {
    let tokens = tokenize("3.14").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Real(3.14));

    assert_value(".5 + .5", Value::Real(1.0));
    assert_value("5. / 2", Value::Real(2.5));
}

#[test]
fn illegal_character_discards_all_tokens() {
    let error = tokenize("1 + $").unwrap_err();

    let span = error.span();
    assert_eq!(span.start.offset, 4);
    assert_eq!(span.end.offset, 5);
    assert_eq!(error.kind(), ErrorKind::IllegalCharacter);
}

#[test]
fn lone_dot_is_an_illegal_character() {
    let error = tokenize(".").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::IllegalCharacter);

    // A leading double dot can never begin a literal either.
    assert_eq!(tokenize("..5").unwrap_err().kind(), ErrorKind::IllegalCharacter);
}

#[test]
fn second_dot_terminates_a_literal() {
    // `1.2.3` lexes as `1.2` then `.3`; the adjacency is a parse error.
    let tokens = tokenize("1.2.3").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Real(1.2));
    assert_eq!(tokens[1].kind, TokenKind::Real(0.3));

    assert_fails_with("1.2.3", ErrorKind::InvalidSyntax);
}

#[test]
fn oversized_integer_literal_is_rejected() {
    let error = tokenize("99999999999999999999").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::InvalidSyntax);
    assert_eq!(error.span().end.offset, 20);
}

#[test]
fn positions_track_lines() {
    let error = tokenize("1 +\n$").unwrap_err();

    assert_eq!(error.span().start.line, 1);
    assert_eq!(error.span().start.column, 0);
    assert_eq!(error.span().start.offset, 4);
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", Value::Integer(3));
    assert_value("8 - 5", Value::Integer(3));
    assert_value("7 * 9", Value::Integer(63));
    assert_value("10 / 2", Value::Integer(5));
    assert_value("10 / 4", Value::Real(2.5));
    assert_value("1.5 + 1.5", Value::Real(3.0));
}

#[test]
fn precedence_and_grouping() {
    assert_value("1 + 2 * 3", Value::Integer(7));
    assert_value("(1 + 2) * 3", Value::Integer(9));
    assert_value("10 - 4 - 3", Value::Integer(3));
    assert_value("100 / 10 / 5", Value::Integer(2));
}

#[test]
fn exponentiation_is_right_associative() {
    assert_value("2 ^ 3 ^ 2", Value::Integer(512));
    assert_value("2 ^ 10", Value::Integer(1024));
    assert_value("4 ^ 0.5", Value::Real(4.0_f64.powf(0.5)));
}

#[test]
fn unary_operators() {
    assert_value("-3 + 5", Value::Integer(2));
    assert_value("--3", Value::Integer(3));
    assert_value("+(3 * 3)", Value::Integer(9));
    // Negation binds looser than exponentiation.
    assert_value("-2 ^ 2", Value::Integer(-4));
}

#[test]
fn square_roots() {
    assert_value("|4", Value::Real(2.0));
    assert_value("|2.25", Value::Real(1.5));
    assert_value("| (144 / (6 + 6)) * |9", Value::Real(12.0_f64.sqrt() * 3.0));
    assert_value("|0", Value::Real(0.0));
}

#[test]
fn division_by_zero_points_at_the_right_operand() {
    let diagnostic = assert_fails_with("10 / 0", ErrorKind::Runtime);

    let span = diagnostic.span();
    assert_eq!(span.start.offset, 5);
    assert_eq!(span.end.offset, 6);

    assert_fails_with("1 / (2 - 2)", ErrorKind::Runtime);
    assert_fails_with("1 / 0.0", ErrorKind::Runtime);
}

#[test]
fn negative_square_root_points_at_the_operand() {
    let diagnostic = assert_fails_with("|-4", ErrorKind::Runtime);

    let span = diagnostic.span();
    assert_eq!(span.start.offset, 1);
    assert_eq!(span.end.offset, 3);
}

#[test]
fn syntax_errors() {
    assert_fails_with("1 +", ErrorKind::InvalidSyntax);
    assert_fails_with("(1 + 2", ErrorKind::InvalidSyntax);
    assert_fails_with("1 2", ErrorKind::InvalidSyntax);
    assert_fails_with(")", ErrorKind::InvalidSyntax);
    assert_fails_with("", ErrorKind::InvalidSyntax);
    assert_fails_with("2 ^ -3", ErrorKind::InvalidSyntax);
}

#[test]
fn runs_are_idempotent() {
    assert_eq!(run("<test>", "2 ^ 3 ^ 2"), run("<test>", "2 ^ 3 ^ 2"));
    assert_eq!(run("<test>", "10 / 0"), run("<test>", "10 / 0"));
    assert_eq!(run("<test>", "1 +"), run("<test>", "1 +"));
}

#[test]
fn runtime_reports_carry_a_traceback() {
    let source = "10 / 0";
    let diagnostic = run("<test>", source).unwrap_err();

    assert_eq!(report::render(source, &diagnostic),
               "in <program> at line 1\n\
                Runtime error: division by zero\n\
                File <test>, line 1\n\
                \n\
                10 / 0\n     \
                ^");
}

#[test]
fn syntax_reports_underline_the_offending_span() {
    let source = "(1 + 2";
    let diagnostic = run("<test>", source).unwrap_err();

    assert_eq!(report::render(source, &diagnostic),
               "Invalid syntax: expected ')' but none found\n\
                File <test>, line 1\n\
                \n\
                (1 + 2\n      \
                ^");
}

#[test]
fn script_files_evaluate() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| {
                                         e.path().extension().is_some_and(|ext| ext == "cosmo")
                                     })
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = run(&path.display().to_string(), &source) {
            panic!("Script {path:?} failed:\n{}", report::render(&source, &e));
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}
