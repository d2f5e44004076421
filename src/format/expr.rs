use crate::expr::{BinaryOp, Equation, EquationSystem, Expr};

/// Infix rendering with the fewest brackets that still parse back to the
/// same tree.
pub fn pretty(expr: &Expr) -> String {
    fn pp(ctx: u8, expr: &Expr) -> String {
        match expr {
            Expr::Number(literal) => literal.clone(),
            Expr::Variable(v) => v.to_string(),

            Expr::Unary(op, operand) => format!("{}{}", op.symbol(), pp(3, operand)),

            Expr::Binary(op @ (BinaryOp::Add | BinaryOp::Sub), a, b) => {
                let body = format!("{} {} {}", pp(1, a), op.symbol(), pp(2, b));
                bracket(ctx, 1, body)
            }

            Expr::Binary(op, a, b) => {
                let body = format!("{}{}{}", pp(2, a), op.symbol(), pp(3, b));
                bracket(ctx, 2, body)
            }
        }
    }

    pp(0, expr)
}

/// Indented node-per-line dump, handy when debugging how implicit products
/// were grouped.
pub fn tree(system: &EquationSystem) -> String {
    let mut lines = Vec::new();
    for equation in &system.equations {
        equation_lines(equation, 0, &mut lines);
    }
    lines.join("\n")
}

fn equation_lines(equation: &Equation, indent: usize, out: &mut Vec<String>) {
    out.push(format!("{}EQUATION", "  ".repeat(indent)));
    expr_lines(&equation.left, indent + 1, out);
    expr_lines(&equation.right, indent + 1, out);
}

fn expr_lines(expr: &Expr, indent: usize, out: &mut Vec<String>) {
    let pad = "  ".repeat(indent);
    match expr {
        Expr::Number(literal) => out.push(format!("{pad}NUMBER: {literal}")),
        Expr::Variable(v) => out.push(format!("{pad}VARIABLE: {v}")),
        Expr::Unary(op, operand) => {
            out.push(format!("{pad}UNARY_OP: {}", op.symbol()));
            expr_lines(operand, indent + 1, out);
        }
        Expr::Binary(op, a, b) => {
            out.push(format!("{pad}BINARY_OP: {}", op.symbol()));
            expr_lines(a, indent + 1, out);
            expr_lines(b, indent + 1, out);
        }
    }
}

fn bracket(ctx: u8, prec: u8, body: String) -> String {
    if prec < ctx {
        format!("({body})")
    } else {
        body
    }
}
