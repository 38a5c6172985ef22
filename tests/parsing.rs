use letlang::{ast::Expr, error::ParseError, interpreter::parser::core::ParseOutcome, parse_source};

fn parse(src: &str) -> ParseOutcome {
    match parse_source(src) {
        Ok(outcome) => outcome,
        Err(e) => panic!("Parse aborted for: {src}\nError: {e}"),
    }
}

fn fatal(src: &str) -> ParseError {
    match parse_source(src) {
        Ok(_) => panic!("Parse succeeded but a fatal error was expected for: {src}"),
        Err(e) => e,
    }
}

fn single_diagnostic(src: &str) -> ParseError {
    let mut outcome = parse(src);
    assert_eq!(outcome.diagnostics.len(), 1, "Wrong diagnostic count for: {src}");
    outcome.diagnostics.remove(0)
}

#[test]
fn clean_programs_parse_without_diagnostics() {
    let outcome = parse("global a := 1 a + 1 fun f x => x apply f 2");
    assert!(!outcome.has_errors());
    assert_eq!(outcome.program.statements.len(), 4);

    let outcome = parse("# note # let x := 1 in x + 1 # trailing #");
    assert!(!outcome.has_errors());
    assert_eq!(outcome.program.statements.len(), 1);
}

#[test]
fn missing_keywords_are_recorded() {
    assert!(matches!(single_diagnostic("let x := 1 x"), ParseError::ExpectedIn { line: 1 }));
    assert!(matches!(single_diagnostic("if 1 < 2 22 else 33"), ParseError::ExpectedThen { .. }));
    assert!(matches!(single_diagnostic("if true then 1 2"), ParseError::ExpectedElse { .. }));
    assert!(matches!(single_diagnostic("fun f := lambda x x + 1"),
                     ParseError::ExpectedArrow { .. }));
    assert!(matches!(single_diagnostic("fun f := 5"), ParseError::ExpectedLambda { .. }));
    assert!(matches!(single_diagnostic("let y 2 in y"), ParseError::ExpectedAssign { .. }));
}

#[test]
fn binding_arity_mismatch_is_recorded() {
    assert!(matches!(single_diagnostic("let x, y := 1 in x"),
                     ParseError::BindingCountMismatch { names: 2, exprs: 1, .. }));
}

#[test]
fn binding_without_a_name_is_recorded() {
    let outcome = parse("let := 1 in 2");
    assert_eq!(outcome.diagnostics.len(), 2);
    assert!(matches!(outcome.diagnostics[0], ParseError::ExpectedIdentifier { .. }));
    assert!(matches!(outcome.diagnostics[1],
                     ParseError::BindingCountMismatch { names: 0, exprs: 1, .. }));
}

#[test]
fn illegal_list_elements_are_skipped() {
    let outcome = parse("list(1, true, 2)");
    assert_eq!(outcome.diagnostics.len(), 1);
    assert!(matches!(outcome.diagnostics[0], ParseError::InvalidListElement { .. }));
    match &outcome.program.statements[0] {
        Expr::List { elements, .. } => assert_eq!(elements.len(), 2),
        other => panic!("Expected a list literal, found {other:?}"),
    }
}

#[test]
fn illegal_tuple_elements_are_skipped() {
    let outcome = parse("tuple(1, if, 2)");
    assert_eq!(outcome.diagnostics.len(), 1);
    assert!(matches!(outcome.diagnostics[0], ParseError::InvalidTupleElement { .. }));
    match &outcome.program.statements[0] {
        Expr::Tuple { elements, .. } => assert_eq!(elements.len(), 2),
        other => panic!("Expected a tuple literal, found {other:?}"),
    }
}

#[test]
fn list_without_opening_paren_is_recorded() {
    assert!(matches!(single_diagnostic("list 1, 2)"), ParseError::UnexpectedToken { .. }));
}

#[test]
fn apply_requires_a_name_or_lambda_callee() {
    assert!(matches!(single_diagnostic("apply 5 3"), ParseError::InvalidCallee { .. }));
}

#[test]
fn grouped_identifier_is_not_a_callee() {
    assert!(matches!(fatal("apply (f) 3"), ParseError::UnrecognizedFactor { .. }));
}

#[test]
fn unknown_symbols_abort_the_parse() {
    match fatal("5 $") {
        ParseError::UnrecognizedFactor { token, line } => {
            assert_eq!(token, r#"Unknown("$")"#);
            assert_eq!(line, 1);
        },
        other => panic!("Wrong error: {other:?}"),
    }
    assert!(matches!(fatal("let x := 3 @ 4 in x"), ParseError::UnrecognizedFactor { .. }));
}

#[test]
fn input_may_not_end_mid_expression() {
    assert!(matches!(fatal("1 +"), ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(fatal("apply f"), ParseError::UnexpectedEndOfInput { .. }));
}

#[test]
fn comments_must_be_closed() {
    assert!(matches!(fatal("1 + # oops"), ParseError::UnterminatedComment { .. }));
    assert!(matches!(fatal("# only"), ParseError::UnterminatedComment { .. }));
}

#[test]
fn several_diagnostics_can_come_from_one_run() {
    let outcome = parse("let x := 1 x let y 2 in y");
    assert_eq!(outcome.diagnostics.len(), 2);
    assert!(matches!(outcome.diagnostics[0], ParseError::ExpectedIn { .. }));
    assert!(matches!(outcome.diagnostics[1], ParseError::ExpectedAssign { .. }));
    assert_eq!(outcome.program.statements.len(), 3);
}

#[test]
fn diagnostics_point_at_the_offending_line() {
    let outcome = parse("1 + 1\nlet x := 2 x");
    assert_eq!(outcome.diagnostics.len(), 1);
    assert!(matches!(outcome.diagnostics[0], ParseError::ExpectedIn { line: 2 }));
}
