use clap::Parser;
use exprcalc::{
    Options, calculate,
    interpreter::evaluator::{core::Environment, function::BUILTIN_FUNCTIONS},
};
use rustyline::{DefaultEditor, error::ReadlineError};

/// exprcalc parses, simplifies and evaluates arithmetic and logical
/// expressions. Without an expression it starts an interactive session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of decimals printed for numeric results.
    #[arg(long, default_value_t = 10)]
    precision: usize,

    /// Evaluate the parsed expression as written, without simplifying it
    /// first.
    #[arg(long)]
    no_simplify: bool,

    /// An expression to evaluate once. Starts the interactive session when
    /// omitted.
    expression: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let options = Options { simplify: !args.no_simplify };
    let mut env = Environment::new();

    if let Some(expression) = &args.expression {
        if !run_line(expression, &mut env, options, args.precision) {
            std::process::exit(1);
        }
        return;
    }

    if let Err(e) = repl(&mut env, options, args.precision) {
        eprintln!("readline error: {e}");
        std::process::exit(1);
    }
}

fn repl(env: &mut Environment, options: Options, precision: usize) -> rustyline::Result<()> {
    let mut rl = DefaultEditor::new()?;

    println!("Expression calculator. Type 'exit' or 'quit' to leave.");
    println!("Functions: {}", BUILTIN_FUNCTIONS.join(", "));
    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line)?;
                if line == "exit" || line == "quit" {
                    break;
                }
                run_line(line, env, options, precision);
            },
            Err(ReadlineError::Interrupted) => {},
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e),
        }
    }

    println!("Goodbye!");
    Ok(())
}

/// Prints the outcome of one input. Returns `false` if it could not be
/// parsed or simplified.
fn run_line(line: &str, env: &mut Environment, options: Options, precision: usize) -> bool {
    match calculate(line, env, options) {
        Ok(calc) => {
            println!("Simplified: {}", calc.expr);
            match calc.value {
                Ok(value) => println!("Result: {value:.precision$}"),
                Err(e) => println!("Note: {e} (only symbolic simplification available)"),
            }
            true
        },
        Err(e) => {
            eprintln!("Error: {e}");
            false
        },
    }
}
