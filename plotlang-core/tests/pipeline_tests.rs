//! End-to-end pipeline tests: source text through lexer and parser to a
//! fully evaluated statement.

use plotlang_core::{Lexer, ParseError, Parser, Point, Statement, TokenKind};

fn run(input: &str) -> Result<Statement, ParseError> {
    let tokens = Lexer::new().scan(input);
    Parser::new(tokens).parse()
}

#[test]
fn test_origin_assignment_evaluates_operands() {
    assert_eq!(
        run("origin is ( 10 , 2 ** 3 ) ;").unwrap(),
        Statement::SetOrigin { x: 10.0, y: 8.0 }
    );
}

#[test]
fn test_rotation_accepts_named_constants() {
    let Statement::SetRotation { angle } = run("rot is 2 * pi ;").unwrap() else {
        panic!("not a rotation");
    };
    assert!((angle - std::f64::consts::TAU).abs() < 1e-11);
}

#[test]
fn test_unit_circle_plot() {
    let Statement::IteratePlot { points, .. } =
        run("for t from 0 to 2 * pi step pi / 2 draw ( cos ( t ) , sin ( t ) ) ;").unwrap()
    else {
        panic!("not a plot");
    };
    assert_eq!(points.len(), 5);
    assert!((points[0].x - 1.0).abs() < 1e-12);
    assert!(points[0].y.abs() < 1e-12);
    // quarter turn
    assert!(points[1].x.abs() < 1e-12);
    assert!((points[1].y - 1.0).abs() < 1e-12);
}

#[test]
fn test_inclusive_endpoint_count() {
    let Statement::IteratePlot { points, .. } =
        run("for t from 0 to 10 step 1 draw ( t , 0 ) ;").unwrap()
    else {
        panic!("not a plot");
    };
    assert_eq!(points.len(), 11);
}

#[test]
fn test_descending_range_is_normalized() {
    let forward = run("for t from 0 to 3 step 1 draw ( t , t + 1 ) ;").unwrap();
    let backward = run("for t from 3 to 0 step -1 draw ( t , t + 1 ) ;").unwrap();
    assert_eq!(forward, backward);
}

#[test]
fn test_case_insensitive_command() {
    assert_eq!(
        run("ORIGIN IS ( 0 , 0 ) ;").unwrap(),
        Statement::SetOrigin { x: 0.0, y: 0.0 }
    );
}

#[test]
fn test_no_whitespace_command() {
    let Statement::IteratePlot { points, .. } =
        run("for t from 0 to 2 step 1 draw(t,t*t);").unwrap()
    else {
        panic!("not a plot");
    };
    assert_eq!(
        points,
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 4.0)
        ]
    );
}

#[test]
fn test_missing_semicolon_is_unexpected_end() {
    let err = run("reset").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedEnd { .. }));
}

#[test]
fn test_missing_comma_points_at_offending_token() {
    let err = run("origin is ( 1 2 ) ;").unwrap_err();
    assert_eq!(err.position(), Some(4));
    assert!(matches!(err, ParseError::UnexpectedToken { expected: "','", .. }));
}

#[test]
fn test_lexical_error_surfaces_through_parser() {
    let err = run("rot is 12. ;").unwrap_err();
    assert!(matches!(err, ParseError::Lexical { ref text, .. } if text == "12."));
}

#[test]
fn test_failed_parse_leaves_no_partial_statement() {
    // the draw body itself is broken; the whole statement is rejected
    let err = run("for t from 0 to 5 step 1 draw ( t t ) ;").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedToken { .. }));
}

#[test]
fn test_tokens_survive_for_diagnostics() {
    let tokens = Lexer::new().scan("origin is ( 1 2 ) ;");
    let mut parser = Parser::new(tokens);
    let err = parser.parse().unwrap_err();
    let position = err.position().unwrap();
    assert_eq!(parser.cursor().tokens()[position].kind, TokenKind::Const);
    assert_eq!(parser.cursor().tokens()[position].text, "2");
}

#[test]
fn test_repeated_runs_are_identical() {
    let input = "for t from 0 to 1 step 0.25 draw ( t , sqrt ( t ) ) ;";
    assert_eq!(run(input).unwrap(), run(input).unwrap());
}
