use crate::solver::Solution;

/// One `name = value` line per variable. Exact results show the fraction when
/// it is not an integer; bisection results are marked as approximate.
pub fn solution_summary(solution: &Solution) -> Vec<String> {
    solution
        .iter()
        .map(|(var, value)| match solution.exact(var) {
            Some(exact) if exact.is_integer() => format!("{var} = {exact}"),
            Some(exact) => format!("{var} = {exact} ({value})"),
            None => format!("{var} ≈ {value}"),
        })
        .collect()
}
