use eqsolve::{Fraction, solve};
use proptest::prelude::*;

fn term(coeff: i64, var: &str) -> String {
    if coeff < 0 {
        format!("- {}{var}", -coeff)
    } else {
        format!("+ {coeff}{var}")
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn single_linear_equation_matches_closed_form(
        a in (-50i64..50).prop_filter("nonzero", |a| *a != 0),
        b in -100i64..100,
        c in -100i64..100,
    ) {
        let input = format!("0 {} {} = {c}", term(a, "x"), term(b, ""));
        let solution = solve(&input).unwrap();
        let expected = Fraction::new(c - b, a).unwrap();
        prop_assert_eq!(solution.exact('x'), Some(&expected));
        let x = solution.get('x').unwrap();
        let residual = a as f64 * x + b as f64 - c as f64;
        prop_assert!(residual.abs() < 1e-9, "{}: x = {}", input, x);
    }

    #[test]
    fn two_by_two_system_satisfies_both_equations(
        a in -20i64..20, b in -20i64..20, c in -20i64..20, d in -20i64..20,
        e in -50i64..50, f in -50i64..50,
    ) {
        prop_assume!(a * d - b * c != 0);
        let input = format!(
            "0 {} {} = {e}; 0 {} {} = {f}",
            term(a, "x"), term(b, "y"), term(c, "x"), term(d, "y"),
        );
        let solution = solve(&input).unwrap();
        let x = solution.exact('x').unwrap();
        let y = solution.exact('y').unwrap();
        prop_assert_eq!(x.multiply(a).add(y.multiply(b)), Fraction::from(e));
        prop_assert_eq!(x.multiply(c).add(y.multiply(d)), Fraction::from(f));
    }
}
