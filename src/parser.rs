//! Recursive-descent parser over the lexer's token stream.
//!
//! Precedence, lowest first: `;`, `=`, `+ -`, `* /`, then factors. A factor
//! directly followed by another operand is an implicit product, and the right
//! operand of that product is parsed as a factor of its own. So `8 / 2x` is
//! `8 / (2 * x)`, and `2xy` is `2 * (x * y)`.
//!
//! Both the nesting of factors and the height of the resulting tree are capped
//! at [`MAX_DEPTH`], which bounds the recursion of every later tree walk.

use crate::error::{EquationError, ParseError, Result};
use crate::expr::{BinaryOp, Equation, EquationSystem, Expr, UnaryOp};
use crate::fraction::Fraction;
use crate::lexer::{Lexer, Token, TokenKind};

const OPERAND_START: [TokenKind; 3] = [TokenKind::Number, TokenKind::Variable, TokenKind::LParen];
/// A number is never implicitly multiplied by a following number.
const AFTER_NUMBER: [TokenKind; 2] = [TokenKind::Variable, TokenKind::LParen];

/// Deepest factor nesting, and tallest expression tree, the parser accepts.
pub const MAX_DEPTH: usize = 256;

/// A parsed expression together with the height of its tree.
struct Node {
    expr: Expr,
    depth: usize,
}

impl Node {
    fn leaf(expr: Expr) -> Self {
        Node { expr, depth: 1 }
    }

    fn unary(op: UnaryOp, operand: Node) -> Result<Self> {
        let depth = checked_depth(operand.depth + 1)?;
        Ok(Node {
            expr: Expr::unary(op, operand.expr),
            depth,
        })
    }

    fn binary(op: BinaryOp, left: Node, right: Node) -> Result<Self> {
        let depth = checked_depth(left.depth.max(right.depth) + 1)?;
        Ok(Node {
            expr: Expr::binary(op, left.expr, right.expr),
            depth,
        })
    }
}

fn checked_depth(depth: usize) -> Result<usize> {
    if depth > MAX_DEPTH {
        return Err(ParseError::TooDeep { limit: MAX_DEPTH }.into());
    }
    Ok(depth)
}

/// Parses a single equation or a `;`-separated system.
pub fn parse(input: &str) -> Result<EquationSystem> {
    Parser::new(input)?.parse()
}

/// Parses a bare expression with no `=`.
pub fn parse_expression(input: &str) -> Result<Expr> {
    let mut parser = Parser::new(input)?;
    let node = parser.expression()?;
    parser.expect(TokenKind::Eof)?;
    Ok(node.expr)
}

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token<'a>,
    nesting: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Result<Self> {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            nesting: 0,
        })
    }

    pub fn parse(mut self) -> Result<EquationSystem> {
        let mut equations = vec![self.equation()?];
        while self.current.is(TokenKind::Semicolon) {
            self.advance()?;
            // a single trailing semicolon closes the system
            if self.current.is(TokenKind::Eof) {
                break;
            }
            // input that stops short after a `;` left an equation unfinished
            let equation = self.equation().map_err(|err| match err {
                EquationError::Parse(ParseError::UnexpectedToken {
                    found: TokenKind::Eof,
                    ..
                }) => ParseError::IncompleteEquation.into(),
                other => other,
            })?;
            equations.push(equation);
        }
        if !self.current.is(TokenKind::Eof) {
            return Err(self.unexpected(&[TokenKind::Semicolon, TokenKind::Eof]));
        }
        Ok(EquationSystem::new(equations))
    }

    pub fn equation(&mut self) -> Result<Equation> {
        let left = self.expression()?;
        self.expect(TokenKind::Equals)?;
        let right = self.expression()?;
        Ok(Equation::new(left.expr, right.expr))
    }

    fn expression(&mut self) -> Result<Node> {
        let mut node = self.term()?;
        loop {
            let op = match self.current.kind {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => return Ok(node),
            };
            self.advance()?;
            let rhs = self.term()?;
            node = Node::binary(op, node, rhs)?;
        }
    }

    fn term(&mut self) -> Result<Node> {
        let mut node = self.factor()?;
        loop {
            let op = match self.current.kind {
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                _ => return Ok(node),
            };
            self.advance()?;
            let rhs = self.factor()?;
            node = Node::binary(op, node, rhs)?;
        }
    }

    fn factor(&mut self) -> Result<Node> {
        if self.nesting >= MAX_DEPTH {
            return Err(ParseError::TooDeep { limit: MAX_DEPTH }.into());
        }
        self.nesting += 1;
        let node = self.operand();
        self.nesting -= 1;
        node
    }

    fn operand(&mut self) -> Result<Node> {
        let token = self.current;
        match token.kind {
            TokenKind::Number => {
                self.advance()?;
                // validated here so evaluation never sees a malformed literal
                token.text.parse::<Fraction>()?;
                self.implicit_product(Node::leaf(Expr::number(token.text)), &AFTER_NUMBER)
            }
            TokenKind::Variable => {
                self.advance()?;
                let name = variable_name(&token)?;
                self.implicit_product(Node::leaf(Expr::var(name)), &OPERAND_START)
            }
            TokenKind::LParen => {
                self.advance()?;
                let inner = self.expression()?;
                self.expect(TokenKind::RParen)?;
                self.implicit_product(inner, &OPERAND_START)
            }
            TokenKind::Plus | TokenKind::Minus => {
                self.advance()?;
                let op = if token.is(TokenKind::Plus) {
                    UnaryOp::Plus
                } else {
                    UnaryOp::Minus
                };
                let operand = self.factor()?;
                Node::unary(op, operand)
            }
            TokenKind::Eof => Err(ParseError::IncompleteEquation.into()),
            _ => Err(self.unexpected(&OPERAND_START)),
        }
    }

    fn implicit_product(&mut self, left: Node, triggers: &[TokenKind]) -> Result<Node> {
        if triggers.contains(&self.current.kind) {
            let right = self.factor()?;
            Node::binary(BinaryOp::Mul, left, right)
        } else {
            Ok(left)
        }
    }

    fn advance(&mut self) -> Result<Token<'a>> {
        let consumed = self.current;
        self.current = self.lexer.next_token()?;
        Ok(consumed)
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token<'a>> {
        if self.current.is(kind) {
            self.advance()
        } else {
            Err(self.unexpected(&[kind]))
        }
    }

    fn unexpected(&self, expected: &[TokenKind]) -> EquationError {
        ParseError::UnexpectedToken {
            expected: expected.to_vec(),
            found: self.current.kind,
            position: self.current.position,
        }
        .into()
    }
}

fn variable_name(token: &Token<'_>) -> Result<char> {
    token.text.chars().next().ok_or_else(|| {
        ParseError::UnexpectedToken {
            expected: vec![TokenKind::Variable],
            found: token.kind,
            position: token.position,
        }
        .into()
    })
}
