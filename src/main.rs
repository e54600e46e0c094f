use std::{
    fs,
    io::{self, Write},
};

use clap::Parser;
use cosmo::{error::report, run};

/// cosmo is an easy to use interpreter for plain arithmetic expressions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells cosmo to look at a file instead of an inline expression.
    #[arg(short, long)]
    file: bool,

    /// The expression (or, with --file, the path) to evaluate. Starts the
    /// interactive shell when omitted.
    contents: Option<String>,
}

/// Bright red, used for diagnostics.
const RED: &str = "\x1b[91m";
/// Bright blue, used for results.
const BLUE: &str = "\x1b[94m";
/// Resets the terminal color.
const RESET: &str = "\x1b[0m";

fn main() {
    let args = Args::parse();

    match args.contents {
        Some(contents) => {
            if args.file {
                let script = fs::read_to_string(&contents).unwrap_or_else(|_| {
                    eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                    std::process::exit(1);
                });
                evaluate_and_print(&contents, &script);
            } else {
                evaluate_and_print("<cli>", &contents);
            }
        },
        None => shell(),
    }
}

/// The interactive shell: one expression per line until end of input.
fn shell() {
    loop {
        print!("cosmo > ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }
        if line.trim().is_empty() {
            continue;
        }

        evaluate_and_print("<stdin>", &line);
    }
}

fn evaluate_and_print(source_id: &str, source_text: &str) {
    match run(source_id, source_text) {
        Ok(value) => println!("{BLUE}{value}{RESET}"),
        Err(diagnostic) => {
            eprintln!("{RED}{}{RESET}", report::render(source_text, &diagnostic));
        },
    }
}
