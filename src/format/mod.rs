//! Formatting helpers for rendering expressions and solver output.

pub mod expr;
pub mod solve;

pub use expr::{pretty, tree};
pub use solve::solution_summary;
