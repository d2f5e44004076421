use eqsolve::{solution_summary, solve};

fn main() {
    env_logger::init();

    let systems = [
        "2x + y - z = 8; x - 2y + 3z = 1; 3x + 2y + z = 9",
        "x + y = 5; x + y = 10",
        "x + y = 5; 2x + 2y = 10",
        "1 / (x + 1) = 0.25",
    ];

    for input in systems {
        println!("{input}");
        match solve(input) {
            Ok(solution) => {
                for line in solution_summary(&solution) {
                    println!("  {line}");
                }
            }
            Err(err) => println!("  error: {err}"),
        }
    }
}
