//! Syntax tree produced by the parser.

use std::collections::BTreeSet;
use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum UnaryOp {
    Plus,
    Minus,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
        }
    }
}

impl UnaryOp {
    pub fn symbol(self) -> char {
        match self {
            UnaryOp::Plus => '+',
            UnaryOp::Minus => '-',
        }
    }
}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Expr {
    /// Literal text as written, e.g. `0.1`.
    Number(String),
    Variable(char),
    Unary(UnaryOp, Box<Expr>),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn number(literal: impl Into<String>) -> Self {
        Expr::Number(literal.into())
    }

    pub fn var(name: char) -> Self {
        Expr::Variable(name)
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::Unary(op, operand.boxed())
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary(op, left.boxed(), right.boxed())
    }

    pub fn as_variable(&self) -> Option<char> {
        if let Expr::Variable(name) = self {
            Some(*name)
        } else {
            None
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Expr::Number(_))
    }

    pub fn contains_variable(&self) -> bool {
        match self {
            Expr::Number(_) => false,
            Expr::Variable(_) => true,
            Expr::Unary(_, operand) => operand.contains_variable(),
            Expr::Binary(_, left, right) => left.contains_variable() || right.contains_variable(),
        }
    }

    /// Adds every variable referenced by this expression to `out`.
    pub fn collect_variables(&self, out: &mut BTreeSet<char>) {
        match self {
            Expr::Number(_) => {}
            Expr::Variable(name) => {
                out.insert(*name);
            }
            Expr::Unary(_, operand) => operand.collect_variables(out),
            Expr::Binary(_, left, right) => {
                left.collect_variables(out);
                right.collect_variables(out);
            }
        }
    }

    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::format::pretty(self))
    }
}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Equation {
    pub left: Expr,
    pub right: Expr,
}

impl Equation {
    pub fn new(left: Expr, right: Expr) -> Self {
        Self { left, right }
    }

    /// `left - right`, which is zero at every solution.
    pub fn standard_form(&self) -> Expr {
        Expr::binary(BinaryOp::Sub, self.left.clone(), self.right.clone())
    }

    pub fn variables(&self) -> BTreeSet<char> {
        let mut vars = BTreeSet::new();
        self.left.collect_variables(&mut vars);
        self.right.collect_variables(&mut vars);
        vars
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.left, self.right)
    }
}

#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct EquationSystem {
    pub equations: Vec<Equation>,
}

impl EquationSystem {
    pub fn new(equations: Vec<Equation>) -> Self {
        Self { equations }
    }

    /// Distinct variables in alphabetical order. This order fixes the matrix
    /// columns used by the solver.
    pub fn variables(&self) -> BTreeSet<char> {
        let mut vars = BTreeSet::new();
        for equation in &self.equations {
            equation.left.collect_variables(&mut vars);
            equation.right.collect_variables(&mut vars);
        }
        vars
    }

    pub fn len(&self) -> usize {
        self.equations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.equations.is_empty()
    }
}

impl fmt::Display for EquationSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, equation) in self.equations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{equation}")?;
        }
        Ok(())
    }
}
