//! On-demand tokenizer for equation text.
//!
//! Tokens are produced one at a time by [`Lexer::next_token`]. Letters never
//! group into identifiers: `xy` is the two variables `x` and `y`, which is what
//! lets the parser read it as an implicit product.

use std::fmt;

use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::take_while1;
use nom::character::complete::{char, satisfy};
use nom::combinator::value;

use crate::error::{LexError, Result};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TokenKind {
    Number,
    Variable,
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
    Equals,
    Semicolon,
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Number => "NUMBER",
            TokenKind::Variable => "VARIABLE",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "MULTIPLY",
            TokenKind::Slash => "DIVIDE",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Equals => "EQUALS",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Eof => "EOF",
        };
        f.write_str(name)
    }
}

/// A lexed token. `text` borrows the exact source slice, so number literals
/// reach the fraction engine unchanged.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub position: usize,
}

impl<'a> Token<'a> {
    fn new(kind: TokenKind, text: &'a str, position: usize) -> Self {
        Self {
            kind,
            text,
            position,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

pub struct Lexer<'a> {
    rest: &'a str,
    offset: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            rest: input,
            offset: 0,
        }
    }

    /// Returns the next token. Once the input is exhausted every call yields
    /// `Eof`.
    pub fn next_token(&mut self) -> Result<Token<'a>> {
        self.skip_spaces();
        let input = self.rest;
        let position = self.offset;
        let Some(current) = input.chars().next() else {
            return Ok(Token::new(TokenKind::Eof, "", position));
        };
        let single = &input[..current.len_utf8()];

        if let Ok((rest, text)) = number(input) {
            self.advance_to(rest);
            return Ok(Token::new(TokenKind::Number, text, position));
        }

        if let Ok((rest, _)) = variable(input) {
            self.advance_to(rest);
            return Ok(Token::new(TokenKind::Variable, single, position));
        }

        if let Ok((rest, kind)) = symbol(input) {
            self.advance_to(rest);
            return Ok(Token::new(kind, single, position));
        }

        Err(LexError::UnexpectedCharacter {
            character: current,
            position,
        }
        .into())
    }

    fn skip_spaces(&mut self) {
        let trimmed = self.rest.trim_start_matches(' ');
        self.advance_to(trimmed);
    }

    fn advance_to(&mut self, rest: &'a str) {
        self.offset += self.rest.len() - rest.len();
        self.rest = rest;
    }
}

/// Lexes the whole input, including the trailing `Eof` token.
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        tokens.push(token);
        if token.is(TokenKind::Eof) {
            return Ok(tokens);
        }
    }
}

fn number(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_digit() || c == '.')(input)
}

fn variable(input: &str) -> IResult<&str, char> {
    satisfy(|c: char| c.is_ascii_alphabetic())(input)
}

fn symbol(input: &str) -> IResult<&str, TokenKind> {
    alt((
        value(TokenKind::Plus, char('+')),
        value(TokenKind::Minus, char('-')),
        value(TokenKind::Star, char('*')),
        value(TokenKind::Slash, char('/')),
        value(TokenKind::LParen, char('(')),
        value(TokenKind::RParen, char(')')),
        value(TokenKind::Equals, char('=')),
        value(TokenKind::Semicolon, char(';')),
    ))(input)
}
