use std::fs;

use clap::Parser;
use letlang::run;

/// letlang is an interpreter for Let Lang, a small expression-oriented
/// functional language with first-order functions and lexical closures.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells letlang to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode is a feature that automatically prints out the final value
    /// of a Let Lang program.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Prints every grammar rule the parser enters to standard error.
    #[arg(short, long)]
    trace: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    if let Err(e) = run(&script, args.pipe_mode, args.trace) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
