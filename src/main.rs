use std::{fs, process};

use clap::Parser;
use lamb::{get_result, parse, tokenize};

/// lamb is a small functional language with closures, recursive let and
/// built-in list operations.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells lamb to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Prints the token stream instead of evaluating.
    #[arg(short, long, conflicts_with = "ast")]
    tokens: bool,

    /// Prints the parsed syntax tree instead of evaluating.
    #[arg(short, long)]
    ast: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            process::exit(1);
        })
    } else {
        args.contents
    };

    let outcome: Result<(), Box<dyn std::error::Error>> = if args.tokens {
        tokenize(&script).map(|tokens| {
                             for (token, line) in tokens {
                                 println!("{line:>4}  {token}");
                             }
                         })
                         .map_err(Into::into)
    } else if args.ast {
        parse(&script).map(|expr| println!("{expr:#?}")).map_err(Into::into)
    } else {
        get_result(&script, true).map(|_| ())
    };

    if let Err(e) = outcome {
        eprintln!("{e}");
        process::exit(1);
    }
}
