use std::collections::BTreeMap;
use std::ops::Index;

use log::debug;

use crate::error::{EquationError, Result, SemanticError};
use crate::expr::{EquationSystem, Expr};
use crate::fraction::{Fraction, Value};
use crate::parser::parse;
use crate::semantic;

mod bisection;
mod linear;
pub mod probe;

use linear::{Matrix, Reduction};

/// Settings for the numeric fallback used on non-linear equations.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverOptions {
    /// Candidate intervals, tried in order until one shows a sign change.
    pub brackets: Vec<(f64, f64)>,
    /// Bisection stops once `|f(mid)|` drops below this.
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            brackets: vec![(0.1, 1000.0), (-1000.0, -0.1), (0.1, 10000.0)],
            tolerance: 1e-10,
            max_iterations: 100,
        }
    }
}

/// Value of every variable in the input, keyed by name.
///
/// Values found on the exact path keep their fraction, see [`Solution::exact`].
/// Roots found by bisection only have a float.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Solution {
    values: BTreeMap<char, f64>,
    exact: BTreeMap<char, Fraction>,
}

impl Solution {
    fn insert_exact(&mut self, var: char, value: Fraction) {
        self.values.insert(var, value.to_f64());
        self.exact.insert(var, value);
    }

    fn insert_approximate(&mut self, var: char, value: f64) {
        self.values.insert(var, value);
    }

    pub fn get(&self, var: char) -> Option<f64> {
        self.values.get(&var).copied()
    }

    pub fn exact(&self, var: char) -> Option<&Fraction> {
        self.exact.get(&var)
    }

    pub fn is_exact(&self) -> bool {
        self.exact.len() == self.values.len()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Variables in alphabetical order with their values.
    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        self.values.iter().map(|(&var, &value)| (var, value))
    }

    pub fn into_map(self) -> BTreeMap<char, f64> {
        self.values
    }
}

/// Looks up a solved variable.
///
/// # Panics
///
/// Panics if `var` is not part of the solution. Use [`Solution::get`] when the
/// variable may be absent.
impl Index<char> for Solution {
    type Output = f64;

    fn index(&self, var: char) -> &f64 {
        match self.values.get(&var) {
            Some(value) => value,
            None => panic!("variable '{var}' is not part of the solution"),
        }
    }
}

/// Parses, checks and solves `input` with the default options.
pub fn solve(input: &str) -> Result<Solution> {
    solve_with(input, &SolverOptions::default())
}

pub fn solve_with(input: &str, options: &SolverOptions) -> Result<Solution> {
    let system = parse(input)?;
    semantic::check(&system)?;
    solve_system(&system, options)
}

/// Solves an already parsed system.
///
/// A single equation in a single variable may be non-linear and then falls
/// back to bisection. Everything else goes through exact Gaussian
/// elimination, which requires every equation to be linear.
pub fn solve_system(system: &EquationSystem, options: &SolverOptions) -> Result<Solution> {
    let variables: Vec<char> = system.variables().into_iter().collect();
    if variables.is_empty() {
        return Err(SemanticError::NoVariables { equation: 1 }.into());
    }
    if system.len() < variables.len() {
        return Err(EquationError::InsufficientEquations {
            have: system.len(),
            need: variables.len(),
        });
    }
    debug!("solving {} equation(s) in {:?}", system.len(), variables);

    let forms: Vec<Expr> = system
        .equations
        .iter()
        .map(|equation| equation.standard_form())
        .collect();

    if let ([form], [var]) = (forms.as_slice(), variables.as_slice()) {
        return solve_single(form, *var, options);
    }
    solve_linear_system(&forms, &variables)
}

fn solve_single(form: &Expr, var: char, options: &SolverOptions) -> Result<Solution> {
    let mut solution = Solution::default();

    if probe::has_variable_denominator(form) {
        debug!("{var} appears in a denominator; using bisection");
        let root = bisection::find_root(form, var, options)?;
        solution.insert_approximate(var, root);
        return Ok(solution);
    }

    let coeff = probe::coefficient(form, var)?;
    let constant = probe::constant(form, &[var], std::slice::from_ref(&coeff))?;
    let (Value::Finite(coeff), Value::Finite(constant)) = (coeff, constant) else {
        debug!("probing {var} hit a pole; using bisection");
        let root = bisection::find_root(form, var, options)?;
        solution.insert_approximate(var, root);
        return Ok(solution);
    };

    if coeff.is_zero() {
        return Err(if constant.is_zero() {
            EquationError::InfiniteSolutions
        } else {
            EquationError::NoSolution
        });
    }

    let value = constant
        .neg()
        .divide(&coeff)
        .into_finite()
        .ok_or(EquationError::NoSolution)?;
    solution.insert_exact(var, value);
    Ok(solution)
}

fn solve_linear_system(forms: &[Expr], variables: &[char]) -> Result<Solution> {
    let mut rows = Vec::with_capacity(forms.len());
    for (idx, form) in forms.iter().enumerate() {
        let nonlinear = || EquationError::NonlinearSystem { equation: idx + 1 };
        if probe::has_variable_denominator(form) {
            return Err(nonlinear());
        }

        let coeffs = variables
            .iter()
            .map(|&var| probe::coefficient(form, var))
            .collect::<Result<Vec<_>>>()?;
        let constant = probe::constant(form, variables, &coeffs)?;

        let mut row = Vec::with_capacity(variables.len() + 1);
        for coeff in coeffs {
            let coeff = coeff.into_finite().ok_or_else(nonlinear)?;
            row.push(coeff.as_rational().clone());
        }
        let constant = constant.into_finite().ok_or_else(nonlinear)?;
        // moved to the right-hand side
        row.push(-constant.as_rational().clone());
        rows.push(row);
    }

    match Matrix::augmented(rows, variables.len()).solve() {
        Reduction::Unique(values) => {
            let mut solution = Solution::default();
            for (&var, value) in variables.iter().zip(values) {
                solution.insert_exact(var, Fraction::from(value));
            }
            Ok(solution)
        }
        Reduction::Inconsistent { row } => {
            debug!("row {row} reduced to 0 = c");
            Err(EquationError::NoSolution)
        }
        Reduction::Underdetermined { free_columns } => {
            if variables.len() == 1 {
                Err(EquationError::InfiniteSolutions)
            } else {
                Err(EquationError::UnderdeterminedSystem {
                    free: free_columns.into_iter().map(|c| variables[c]).collect(),
                })
            }
        }
    }
}
