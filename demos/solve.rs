use eqsolve::{parse, solution_summary, solve, tree};

fn main() {
    env_logger::init();

    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "2(3y-4)=4y-7(4-y)".to_string());

    match parse(&input) {
        Ok(system) => println!("{}\n", tree(&system)),
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    }

    match solve(&input) {
        Ok(solution) => println!("{}", solution_summary(&solution).join("\n")),
        Err(err) => eprintln!("{err}"),
    }
}
