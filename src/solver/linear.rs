//! Gaussian elimination over exact rationals.

use log::debug;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

pub(crate) type Rational = BigRational;

/// Outcome of reducing an augmented matrix `[A | b]`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Reduction {
    /// One value per column of `A`.
    Unique(Vec<Rational>),
    /// Some row reads `0 = c` with `c != 0`.
    Inconsistent { row: usize },
    /// Consistent, but these columns never received a pivot.
    Underdetermined { free_columns: Vec<usize> },
}

pub(crate) struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Rational>,
}

impl Matrix {
    /// Builds an augmented matrix from rows of `n_vars` coefficients followed
    /// by the right-hand side.
    pub(crate) fn augmented(rows: Vec<Vec<Rational>>, n_vars: usize) -> Self {
        let cols = n_vars + 1;
        let row_count = rows.len();
        let mut data = Vec::with_capacity(row_count * cols);
        for row in rows {
            debug_assert_eq!(row.len(), cols);
            data.extend(row);
        }
        Matrix {
            rows: row_count,
            cols,
            data,
        }
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn get(&self, row: usize, col: usize) -> &Rational {
        &self.data[self.idx(row, col)]
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let cols = self.cols;
        let start_a = a * cols;
        let start_b = b * cols;
        for offset in 0..cols {
            self.data.swap(start_a + offset, start_b + offset);
        }
    }

    fn row(&self, row: usize) -> &[Rational] {
        let start = self.idx(row, 0);
        &self.data[start..start + self.cols]
    }

    /// Forward elimination with partial pivoting, followed by
    /// back-substitution when every column has a pivot.
    pub(crate) fn solve(mut self) -> Reduction {
        let n_vars = self.cols - 1;
        let pivots = self.forward_eliminate(n_vars);

        for r in pivots.len()..self.rows {
            let row = self.row(r);
            if row[..n_vars].iter().all(|v| v.is_zero()) && !row[n_vars].is_zero() {
                return Reduction::Inconsistent { row: r };
            }
        }

        if pivots.len() < n_vars {
            let free_columns = (0..n_vars).filter(|c| !pivots.contains(c)).collect();
            return Reduction::Underdetermined { free_columns };
        }

        Reduction::Unique(self.back_substitute(&pivots))
    }

    /// Reduces to row echelon form. Returns the pivot column of each leading
    /// row, so row `i` pivots on column `pivots[i]`.
    fn forward_eliminate(&mut self, n_vars: usize) -> Vec<usize> {
        let rows = self.rows;
        let cols = self.cols;
        let mut pivots = Vec::with_capacity(n_vars.min(rows));
        let mut row = 0;
        for col in 0..n_vars {
            if row >= rows {
                break;
            }

            let mut pivot_row = None;
            let mut pivot_abs = Rational::zero();
            for r in row..rows {
                let value = self.get(r, col);
                if !value.is_zero() && value.abs() > pivot_abs {
                    pivot_abs = value.abs();
                    pivot_row = Some(r);
                }
            }

            let Some(pivot_idx) = pivot_row else {
                debug!("column {col} has no pivot at or below row {row}");
                continue;
            };
            self.swap_rows(row, pivot_idx);

            let pivot_value = self.get(row, col).clone();
            let (upper, lower) = self.data.split_at_mut((row + 1) * cols);
            let pivot_row_ref = &upper[row * cols..];
            for rrow in lower.chunks_exact_mut(cols) {
                if rrow[col].is_zero() {
                    continue;
                }
                let factor = &rrow[col] / &pivot_value;
                for c in col..cols {
                    rrow[c] -= &factor * &pivot_row_ref[c];
                }
            }

            pivots.push(col);
            row += 1;
        }
        pivots
    }

    fn back_substitute(&self, pivots: &[usize]) -> Vec<Rational> {
        let n_vars = self.cols - 1;
        let mut values = vec![Rational::zero(); n_vars];
        for (row, &col) in pivots.iter().enumerate().rev() {
            let mut rhs = self.get(row, n_vars).clone();
            for c in col + 1..n_vars {
                rhs -= self.get(row, c) * &values[c];
            }
            values[col] = rhs / self.get(row, col);
        }
        values
    }
}
