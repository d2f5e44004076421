use eqsolve::{EquationError, LexError, Lexer, TokenKind, tokenize};

fn kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input)
        .expect("tokenize input")
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn operators_and_punctuation() {
    use TokenKind::*;
    assert_eq!(
        kinds("+ - * / ( ) = ;"),
        vec![Plus, Minus, Star, Slash, LParen, RParen, Equals, Semicolon, Eof]
    );
}

#[test]
fn numbers_keep_their_literal_text() {
    let tokens = tokenize("3.14 + 42 .5").unwrap();
    let numbers: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Number)
        .map(|t| t.text)
        .collect();
    assert_eq!(numbers, vec!["3.14", "42", ".5"]);
}

#[test]
fn letters_are_separate_variables() {
    let tokens = tokenize("xY").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Variable);
    assert_eq!(tokens[0].text, "x");
    assert_eq!(tokens[1].kind, TokenKind::Variable);
    assert_eq!(tokens[1].text, "Y");
    assert_eq!(tokens[2].kind, TokenKind::Eof);
}

#[test]
fn implicit_product_source_tokenizes_cleanly() {
    use TokenKind::*;
    assert_eq!(
        kinds("2x(3y-4)"),
        vec![Number, Variable, LParen, Number, Variable, Minus, Number, RParen, Eof]
    );
}

#[test]
fn positions_skip_spaces() {
    let tokens = tokenize("  x =  1").unwrap();
    let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
    assert_eq!(positions, vec![2, 4, 7, 8]);
}

#[test]
fn eof_repeats_after_end_of_input() {
    let mut lexer = Lexer::new("x");
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Variable);
    for _ in 0..3 {
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
    }
}

#[test]
fn unexpected_character_is_named() {
    let err = tokenize("@").unwrap_err();
    assert_eq!(
        err,
        EquationError::Lex(LexError::UnexpectedCharacter {
            character: '@',
            position: 0,
        })
    );
    assert!(err.to_string().contains('@'));
}

#[test]
fn unexpected_character_after_valid_tokens() {
    let err = tokenize("2x + 3 ^ 2").unwrap_err();
    assert!(matches!(
        err,
        EquationError::Lex(LexError::UnexpectedCharacter {
            character: '^',
            position: 7,
        })
    ));
}
