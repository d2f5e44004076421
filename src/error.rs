use thiserror::Error;

use crate::lexer::TokenKind;

pub type Result<T> = std::result::Result<T, EquationError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EquationError {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("semantic error: {0}")]
    Semantic(#[from] SemanticError),
    #[error("equation count ({have}) is less than variable count ({need})")]
    InsufficientEquations { have: usize, need: usize },
    #[error("equation system has no solution")]
    NoSolution,
    #[error("equation has infinite solutions")]
    InfiniteSolutions,
    #[error("equation system is underdetermined; free variables: {}", join_vars(.free))]
    UnderdeterminedSystem { free: Vec<char> },
    #[error("equation {equation} is not linear and cannot be solved as part of a system")]
    NonlinearSystem { equation: usize },
    #[error("no root found in any search interval")]
    NoRootFound,
    #[error("denominator cannot be zero")]
    DivisionByZero,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected {}, but got {found} at position {position}", join_kinds(.expected))]
    UnexpectedToken {
        expected: Vec<TokenKind>,
        found: TokenKind,
        position: usize,
    },
    #[error("incomplete equation")]
    IncompleteEquation,
    #[error("invalid number literal '{0}'")]
    InvalidNumber(String),
    #[error("expression nests deeper than {limit} levels")]
    TooDeep { limit: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemanticError {
    #[error("equation {equation} does not contain any variables")]
    NoVariables { equation: usize },
}

fn join_kinds(kinds: &[TokenKind]) -> String {
    kinds
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" or ")
}

fn join_vars(vars: &[char]) -> String {
    vars.iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
