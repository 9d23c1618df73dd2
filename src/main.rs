use std::io::{self, Write};

use clap::Parser;
use infixtree::{
    config::{Config, NumericMode},
    run,
};

/// infixtree converts an infix expression to postfix, builds an expression
/// tree from it, evaluates the tree and draws it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Numeric mode. Integer mode truncates division and disables functions.
    #[arg(short, long, value_enum, default_value_t = NumericMode::Floating)]
    mode: NumericMode,

    /// Clears the terminal before prompting.
    #[arg(short, long)]
    clear: bool,

    /// The expression to evaluate. Read from standard input when omitted.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    if args.clear {
        print!("\x1B[2J\x1B[1;1H");
    }

    let infix = match args.expression {
        Some(expression) => expression,
        None => match prompt("Enter an infix expression: ") {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Error: Failed to read the expression: {e}");
                return;
            },
        },
    };

    let mut stdout = io::stdout().lock();
    if let Err(e) = run(&infix, &Config::new(args.mode), &mut stdout) {
        eprintln!("Error: {e}");
    }
}

/// Prints `message` and reads one line from standard input, without its line
/// terminator.
fn prompt(message: &str) -> io::Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{message}")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
