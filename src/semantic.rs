//! Structural checks that run between parsing and solving.

use crate::error::{Result, SemanticError};
use crate::expr::EquationSystem;

/// Rejects any equation that references no variable at all, such as `2 = 5`.
/// Solvability is left to the solver.
pub fn check(system: &EquationSystem) -> Result<()> {
    for (idx, equation) in system.equations.iter().enumerate() {
        if !equation.left.contains_variable() && !equation.right.contains_variable() {
            return Err(SemanticError::NoVariables { equation: idx + 1 }.into());
        }
    }
    Ok(())
}
