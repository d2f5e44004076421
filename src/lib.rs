//! Exact solver for linear equations and small linear systems written in
//! everyday algebraic notation, such as `2x(3y-4)=4y-7(4-y)` or
//! `x + y = 5; x - y = 1`.
//!
//! Variables are single letters and adjacent operands multiply implicitly.
//! Coefficients are recovered by evaluating each equation at a few points in
//! exact rational arithmetic, and systems are reduced by Gaussian elimination
//! over the same rationals. A single equation with its variable in a
//! denominator is solved numerically instead.

pub mod error;
pub mod expr;
pub mod format;
pub mod fraction;
pub mod lexer;
pub mod parser;
pub mod semantic;
pub mod solver;

pub use error::{EquationError, LexError, ParseError, Result, SemanticError};
pub use expr::{BinaryOp, Equation, EquationSystem, Expr, UnaryOp};
pub use format::{pretty, solution_summary, tree};
pub use fraction::{Fraction, Value};
pub use lexer::{Lexer, Token, TokenKind, tokenize};
pub use parser::{MAX_DEPTH, Parser, parse, parse_expression};
pub use solver::{Solution, SolverOptions, solve, solve_system, solve_with};
