use std::fs;

use clap::Parser;
use intcalc::{evaluate, interpreter::lexer::tokenize};

/// intcalc evaluates integer arithmetic expressions built from `+`, `-`, `*`,
/// `/` and unary minus.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells intcalc to read the expression from a file instead.
    #[arg(short, long)]
    file: bool,

    /// Prints the token stream instead of evaluating it.
    #[arg(short, long)]
    tokens: bool,

    contents: String,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };
    let source = source.trim_end_matches(['\n', '\r']);

    if args.tokens {
        match tokenize(source) {
            Ok(tokens) => {
                for token in tokens {
                    println!("{:?} {:?}", token.kind(), token.text());
                }
            },
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    match evaluate(source) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
