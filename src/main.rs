// minic: lexical scanner and grammar recognizer for a small C-like language

mod lexer;
mod recognizer;

use std::fs;
use std::path::Path;

use lexer::scanner::{scan, ScanOutput};
use recognizer::Recognizer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        let program_name = args.first().map(|s| s.as_str()).unwrap_or("minic");
        eprintln!("Error: No input file provided");
        eprintln!();
        eprintln!("Usage: {} <file.c>", program_name);
        eprintln!();
        eprintln!("Scans the source into tokens, lists them with the symbol");
        eprintln!("table, then checks the token stream against the grammar.");
        std::process::exit(1);
    }

    let source_file = &args[1];

    if !Path::new(source_file).exists() {
        eprintln!("Error: File '{}' not found", source_file);
        eprintln!(
            "Usage: {} <file.c>",
            args.first().map(|s| s.as_str()).unwrap_or("minic")
        );
        std::process::exit(1);
    }

    let source = fs::read_to_string(source_file)?;

    // Stage one: scan and list what was found.
    let ScanOutput { tokens, symbols } = scan(&source);

    for token in &tokens {
        println!("{}: {}", token.kind, token.lexeme);
    }

    println!("Symbol Table:");
    for (i, name) in symbols.iter().enumerate() {
        println!("Index {}: {}", i, name);
    }

    // Stage two: recognize the token stream.
    let mut recognizer = Recognizer::new(&tokens);
    let outcome = recognizer.recognize();

    for kind in recognizer.trace() {
        println!("Parsed a statement: {}", kind);
    }

    match outcome {
        Ok(()) => {
            println!(
                "Recognized {} tokens, {} statements.",
                tokens.len(),
                recognizer.trace().len()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("Recognition error: {}", e);
            std::process::exit(1);
        }
    }
}
