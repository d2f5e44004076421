//! Numeric fallback for single-variable equations with the variable in a
//! denominator. Evaluation stays exact; only the returned root is a float.

use log::debug;
use num_rational::BigRational;

use crate::error::{EquationError, Result};
use crate::expr::Expr;
use crate::fraction::{Fraction, Value};

use super::SolverOptions;
use super::probe::{Assignment, evaluate};

/// Searches the configured brackets in order and bisects the first one whose
/// endpoints differ in sign. Other variables in `form` read as zero.
pub(crate) fn find_root(form: &Expr, var: char, options: &SolverOptions) -> Result<f64> {
    for &(lo, hi) in &options.brackets {
        let (Some(lo), Some(hi)) = (Fraction::from_f64(lo), Fraction::from_f64(hi)) else {
            continue;
        };
        let f_lo = evaluate_at(form, var, &lo)?;
        let f_hi = evaluate_at(form, var, &hi)?;
        let (Some(f_lo), Some(f_hi)) = (f_lo.into_finite(), f_hi.into_finite()) else {
            debug!("bracket [{lo}, {hi}] has an undefined endpoint");
            continue;
        };

        if f_lo.is_zero() {
            return Ok(lo.to_f64());
        }
        if f_hi.is_zero() {
            return Ok(hi.to_f64());
        }
        if f_lo.is_negative() == f_hi.is_negative() {
            debug!("no sign change on [{lo}, {hi}]");
            continue;
        }

        debug!("bisecting {var} on [{lo}, {hi}]");
        return bisect(form, var, lo, f_lo, hi, options);
    }
    Err(EquationError::NoRootFound)
}

fn bisect(
    form: &Expr,
    var: char,
    mut lo: Fraction,
    mut f_lo: Fraction,
    mut hi: Fraction,
    options: &SolverOptions,
) -> Result<f64> {
    let tolerance = Fraction::from_f64(options.tolerance).unwrap_or_else(Fraction::zero);

    for iteration in 0..options.max_iterations {
        let mid = midpoint(&lo, &hi);
        match evaluate_at(form, var, &mid)? {
            Value::Finite(f_mid) => {
                if f_mid.abs() < tolerance {
                    debug!("converged after {} iterations", iteration + 1);
                    return Ok(mid.to_f64());
                }
                if f_mid.is_negative() != f_lo.is_negative() {
                    hi = mid;
                } else {
                    lo = mid;
                    f_lo = f_mid;
                }
            }
            // a pole inside the bracket: keep the half that still ends at `hi`
            Value::Undefined => lo = mid,
        }
    }

    Ok(midpoint(&lo, &hi).to_f64())
}

fn evaluate_at(form: &Expr, var: char, at: &Fraction) -> Result<Value> {
    evaluate(form, &Assignment::single(var, at))
}

fn midpoint(lo: &Fraction, hi: &Fraction) -> Fraction {
    let half = Fraction::from(BigRational::new(1.into(), 2.into()));
    lo.add(hi).multiply(half)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_expression;

    fn root(input: &str) -> Result<f64> {
        let form = parse_expression(input).expect("parse expression");
        find_root(&form, 'x', &SolverOptions::default())
    }

    #[test]
    fn finds_positive_root() {
        let x = root("1 / (x + 1) - 0.25").unwrap();
        assert!((x - 3.0).abs() < 1e-8, "{x}");
    }

    #[test]
    fn falls_through_to_negative_bracket() {
        let x = root("(x + 1) / (x*x + 1)").unwrap();
        assert!((x + 1.0).abs() < 1e-8, "{x}");
    }

    #[test]
    fn reports_missing_root() {
        assert_eq!(root("1 / (x * x + 1) + 1"), Err(EquationError::NoRootFound));
    }

    #[test]
    fn respects_custom_brackets() {
        let form = parse_expression("1 / (x + 1) - 0.25").unwrap();
        let options = SolverOptions {
            brackets: vec![(10.0, 20.0)],
            ..SolverOptions::default()
        };
        assert_eq!(find_root(&form, 'x', &options), Err(EquationError::NoRootFound));
    }
}
