//! Coefficient extraction by evaluating an expression at chosen points.
//!
//! An equation's standard form is assumed affine in each variable once the
//! other variables are pinned to zero, so a coefficient is the difference of
//! two evaluations and the constant term is the value at the origin.

use std::collections::BTreeMap;

use log::trace;

use crate::error::Result;
use crate::expr::{BinaryOp, Expr, UnaryOp};
use crate::fraction::{Fraction, Value};

/// Values substituted for variables during evaluation. Variables without an
/// entry read as zero.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Assignment {
    values: BTreeMap<char, Fraction>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(var: char, value: impl Into<Fraction>) -> Self {
        Self::new().with(var, value)
    }

    /// Assigns `value` to every variable in `vars`.
    pub fn uniform(vars: &[char], value: impl Into<Fraction>) -> Self {
        let value = value.into();
        Self {
            values: vars.iter().map(|&v| (v, value.clone())).collect(),
        }
    }

    pub fn with(mut self, var: char, value: impl Into<Fraction>) -> Self {
        self.values.insert(var, value.into());
        self
    }

    pub fn get(&self, var: char) -> Fraction {
        self.values.get(&var).cloned().unwrap_or_else(Fraction::zero)
    }
}

/// Evaluates `expr` exactly under `assignment`. Division by zero produces
/// [`Value::Undefined`], which then follows the propagation rules of `Value`.
pub fn evaluate(expr: &Expr, assignment: &Assignment) -> Result<Value> {
    Ok(match expr {
        Expr::Number(literal) => Value::Finite(literal.parse()?),
        Expr::Variable(name) => Value::Finite(assignment.get(*name)),
        Expr::Unary(op, operand) => {
            let value = evaluate(operand, assignment)?;
            match op {
                UnaryOp::Plus => value,
                UnaryOp::Minus => -value,
            }
        }
        Expr::Binary(op, left, right) => {
            let lhs = evaluate(left, assignment)?;
            let rhs = evaluate(right, assignment)?;
            match op {
                BinaryOp::Add => lhs + rhs,
                BinaryOp::Sub => lhs - rhs,
                BinaryOp::Mul => lhs * rhs,
                BinaryOp::Div => lhs / rhs,
            }
        }
    })
}

/// Linear coefficient of `var` in `expr`, other variables held at zero.
///
/// When `var = 0` is a pole the difference is taken one step to the right,
/// between `var = 1` and `var = 2`.
pub fn coefficient(expr: &Expr, var: char) -> Result<Value> {
    let at = |x: i64| evaluate(expr, &Assignment::single(var, x));
    let at_zero = at(0)?;
    let coeff = if at_zero.is_finite() {
        at(1)? - at_zero
    } else {
        at(2)? - at(1)?
    };
    trace!("coefficient of {var} in {expr}: {coeff}");
    Ok(coeff)
}

/// Constant term of `expr`. `coeffs` holds the coefficient of each variable
/// in `vars`, in the same order; they are only used when the origin is a
/// pole, to recover the intercept from the value at all-ones.
pub fn constant(expr: &Expr, vars: &[char], coeffs: &[Value]) -> Result<Value> {
    let at_origin = evaluate(expr, &Assignment::new())?;
    if at_origin.is_finite() {
        trace!("constant of {expr}: {at_origin}");
        return Ok(at_origin);
    }
    let at_ones = evaluate(expr, &Assignment::uniform(vars, 1))?;
    let constant = coeffs
        .iter()
        .cloned()
        .fold(at_ones, |acc, coeff| acc - coeff);
    trace!("constant of {expr} (shifted from origin): {constant}");
    Ok(constant)
}

/// True when a variable sits in a denominator in a shape that probing cannot
/// handle. A bare `x`, `2*x` or `x*2` in the denominator is still accepted.
pub fn has_variable_denominator(expr: &Expr) -> bool {
    match expr {
        Expr::Number(_) | Expr::Variable(_) => false,
        Expr::Unary(_, operand) => has_variable_denominator(operand),
        Expr::Binary(BinaryOp::Div, left, right) => {
            (!is_simple_variable_product(right) && right.contains_variable())
                || has_variable_denominator(left)
                || has_variable_denominator(right)
        }
        Expr::Binary(_, left, right) => {
            has_variable_denominator(left) || has_variable_denominator(right)
        }
    }
}

fn is_simple_variable_product(expr: &Expr) -> bool {
    match expr {
        Expr::Variable(_) => true,
        Expr::Binary(BinaryOp::Mul, left, right) => {
            (left.is_number() && right.as_variable().is_some())
                || (left.as_variable().is_some() && right.is_number())
        }
        _ => false,
    }
}
