use owo_colors::OwoColorize;
use plusone::prelude::*;
use std::io::{self, Write};

fn main() -> Result<(), io::Error> {
    let mut stdout = io::stdout().lock();

    loop {
        write!(stdout, "{} ", ">".green())?;
        stdout.flush()?;

        let Some(Ok(input)) = io::stdin().lines().next() else {
            writeln!(stdout, "{}", "exiting...".yellow())?;
            std::process::exit(0);
        };
        if input.trim().is_empty() {
            continue;
        }

        if let Err(e) = show(&mut stdout, &input) {
            writeln!(stdout, "{} {e}", "error:".red().bold())?;
        }
    }
}

///
/// Print every stage of the pipeline for one line of input.
///
fn show(out: &mut impl Write, input: &str) -> Result<(), Box<dyn std::error::Error>> {
    write!(out, "{:>8} ", "tokens".cyan())?;
    for token in Lexer::new(input)? {
        write!(out, "{} ", token?)?;
    }
    writeln!(out)?;

    let expr = Parser::new(Lexer::new(input)?).parse()?;
    writeln!(out, "{:>8} {expr}", "tree".cyan())?;
    writeln!(out, "{:>8} {}", "sexp".cyan(), Sexp::from(&expr))?;

    let program = Program::flatten(&expr);
    write!(out, "{:>8}\n{program}", "program".cyan())?;

    let interpreted = Interpreter::new().evaluate(&expr)?;
    writeln!(out, "{:>8} {}", "interp".cyan(), interpreted.bold())?;

    let reduced = Vm::new().evaluate(&expr)?;
    writeln!(out, "{:>8} {}", "vm".cyan(), reduced.bold())?;

    Ok(())
}
