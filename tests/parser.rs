use eqsolve::{
    BinaryOp, EquationError, Expr, MAX_DEPTH, ParseError, TokenKind, UnaryOp, parse,
    parse_expression,
};

fn expr(input: &str) -> Expr {
    parse_expression(input).unwrap_or_else(|e| panic!("failed to parse {input}: {e}"))
}

fn num(literal: &str) -> Expr {
    Expr::number(literal)
}

fn var(name: char) -> Expr {
    Expr::var(name)
}

fn mul(a: Expr, b: Expr) -> Expr {
    Expr::binary(BinaryOp::Mul, a, b)
}

fn add(a: Expr, b: Expr) -> Expr {
    Expr::binary(BinaryOp::Add, a, b)
}

fn sub(a: Expr, b: Expr) -> Expr {
    Expr::binary(BinaryOp::Sub, a, b)
}

fn div(a: Expr, b: Expr) -> Expr {
    Expr::binary(BinaryOp::Div, a, b)
}

#[test]
fn number_literals_stay_verbatim() {
    assert_eq!(expr("123"), num("123"));
    assert_eq!(expr("3.14"), num("3.14"));
}

#[test]
fn precedence_and_left_associativity() {
    assert_eq!(expr("1 + 2 * 3"), add(num("1"), mul(num("2"), num("3"))));
    assert_eq!(expr("8 - 4 - 2"), sub(sub(num("8"), num("4")), num("2")));
    assert_eq!(expr("8 / 4 / 2"), div(div(num("8"), num("4")), num("2")));
    assert_eq!(expr("(1 + 2) * 3"), mul(add(num("1"), num("2")), num("3")));
}

#[test]
fn implicit_multiplication_keeps_source_order() {
    assert_eq!(expr("2x"), mul(num("2"), var('x')));
    assert_eq!(expr("x2"), mul(var('x'), num("2")));
    assert_eq!(expr("xy"), mul(var('x'), var('y')));
    assert_eq!(expr("(x+1)y"), mul(add(var('x'), num("1")), var('y')));
    assert_eq!(expr("2(x+1)"), mul(num("2"), add(var('x'), num("1"))));
    assert_eq!(
        expr("(x+1)(y+2)"),
        mul(add(var('x'), num("1")), add(var('y'), num("2")))
    );
}

#[test]
fn implicit_product_binds_inside_the_factor() {
    assert_eq!(expr("8 / 2x"), div(num("8"), mul(num("2"), var('x'))));
    assert_eq!(expr("2xy"), mul(num("2"), mul(var('x'), var('y'))));
    assert_eq!(expr("2x / 3"), div(mul(num("2"), var('x')), num("3")));
}

#[test]
fn unary_signs() {
    assert_eq!(expr("-x"), Expr::unary(UnaryOp::Minus, var('x')));
    assert_eq!(
        expr("2 - -3"),
        sub(num("2"), Expr::unary(UnaryOp::Minus, num("3")))
    );
    assert_eq!(expr("+(x)"), Expr::unary(UnaryOp::Plus, var('x')));
}

#[test]
fn numbers_do_not_multiply_implicitly() {
    let err = parse("2 3 = x").unwrap_err();
    assert!(matches!(
        err,
        EquationError::Parse(ParseError::UnexpectedToken {
            found: TokenKind::Number,
            ..
        })
    ));
}

#[test]
fn single_equation_is_a_system_of_one() {
    let system = parse("2x(3y-4)=4y-7(4-y)").unwrap();
    assert_eq!(system.len(), 1);
    assert_eq!(
        system.equations[0].right,
        sub(
            mul(num("4"), var('y')),
            mul(num("7"), sub(num("4"), var('y')))
        )
    );
}

#[test]
fn systems_split_on_semicolons() {
    let system = parse("x + y = 5; x - y = 1").unwrap();
    assert_eq!(system.len(), 2);
    assert_eq!(system.equations[1].left, sub(var('x'), var('y')));
}

#[test]
fn trailing_semicolon_is_dropped() {
    let system = parse("x = 1; y = 2;").unwrap();
    assert_eq!(system.len(), 2);
}

#[test]
fn missing_equals_reports_expected_token() {
    let err = parse("x + 1").unwrap_err();
    assert_eq!(
        err,
        EquationError::Parse(ParseError::UnexpectedToken {
            expected: vec![TokenKind::Equals],
            found: TokenKind::Eof,
            position: 5,
        })
    );
    assert_eq!(
        err.to_string(),
        "parse error: expected EQUALS, but got EOF at position 5"
    );
}

#[test]
fn truncated_input_is_incomplete() {
    for input in ["", "x =", "x = 1 +", "x = 1; y", "x + y = 1; x", "x = 1; (y"] {
        assert_eq!(
            parse(input).unwrap_err(),
            EquationError::Parse(ParseError::IncompleteEquation),
            "{input:?}"
        );
    }
}

#[test]
fn double_semicolon_is_rejected() {
    let err = parse("x = 1;;").unwrap_err();
    assert!(matches!(
        err,
        EquationError::Parse(ParseError::UnexpectedToken {
            found: TokenKind::Semicolon,
            ..
        })
    ));
}

#[test]
fn unbalanced_parentheses() {
    let err = parse("2(x + 1 = 4").unwrap_err();
    assert!(matches!(
        err,
        EquationError::Parse(ParseError::UnexpectedToken {
            found: TokenKind::Equals,
            ..
        })
    ));
}

#[test]
fn malformed_number_literal() {
    assert_eq!(
        parse("1.2.3x = 4").unwrap_err(),
        EquationError::Parse(ParseError::InvalidNumber("1.2.3".to_string()))
    );
}

#[test]
fn pretty_output_parses_back_to_the_same_tree() {
    for input in [
        "2x(3y-4)",
        "8 / 2x",
        "(x+1)(y+2) - -3",
        "1 - (2 - x)",
        "a / (b / c)",
        "-(x + 1) * 2",
    ] {
        let tree = expr(input);
        let rendered = eqsolve::pretty(&tree);
        assert_eq!(expr(&rendered), tree, "{input} rendered as {rendered}");
    }
}

fn too_deep(input: &str) {
    assert_eq!(
        parse(input).unwrap_err(),
        EquationError::Parse(ParseError::TooDeep { limit: MAX_DEPTH }),
        "{} chars",
        input.len()
    );
}

#[test]
fn long_operand_chains_are_capped() {
    too_deep(&format!("{} = 1", vec!["x"; 5000].join(" + ")));
    too_deep(&format!("{} = 1", vec!["x"; 5000].join(" * ")));
    too_deep(&format!("x = {}", vec!["1"; 5000].join(" - ")));
}

#[test]
fn deep_factor_nesting_is_capped() {
    too_deep(&format!("{}x{} = 1", "(".repeat(2000), ")".repeat(2000)));
    too_deep(&format!("{}x = 1", "-".repeat(10_000)));
    too_deep(&format!("{} = 1", "x".repeat(5000)));
}

#[test]
fn nesting_up_to_the_limit_parses() {
    let depth = MAX_DEPTH - 1;
    let input = format!("{}x{} = 1", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(parse(&input).unwrap().equations[0].left, var('x'));

    let chain = vec!["x"; MAX_DEPTH].join(" + ");
    assert!(parse_expression(&chain).is_ok());
}
