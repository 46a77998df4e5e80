//! Imperium scanner CLI.

use impc::commands::{lex_files, list_reserved_words, parse_lex_options};

fn main() {
    impc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: impc lex <file>... [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --block-size=<n>     Refill block size in bytes (default: 4096)");
                eprintln!("  --capacity=<n>       Buffer capacity in bytes (default: 256 blocks)");
                eprintln!("  --invalid=<policy>   On invalid bytes: abort (default), emit");
                eprintln!("  --reserved=<words>   Comma-separated reserved words");
                eprintln!("  --jobs=<n>           Files scanned in parallel (default: auto)");
                std::process::exit(1);
            }

            let options = match parse_lex_options(&args[2..]) {
                Ok(options) => options,
                Err(msg) => {
                    eprintln!("error: {msg}");
                    std::process::exit(1);
                }
            };

            if !lex_files(&options) {
                std::process::exit(1);
            }
        }
        "words" => {
            list_reserved_words();
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("impc {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Imperium streaming scanner");
    println!();
    println!("Usage: impc <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>...        Tokenize files and display tokens");
    println!("  words                List the standard reserved words");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --block-size=<n>     Refill block size in bytes (default: 4096)");
    println!("  --capacity=<n>       Buffer capacity in bytes; longest token is n - 1");
    println!("  --invalid=<policy>   On invalid bytes: abort (default), emit");
    println!("  --reserved=<words>   Comma-separated reserved words (replaces the standard set)");
    println!("  --jobs=<n>           Files scanned in parallel (default: auto)");
    println!();
    println!("Examples:");
    println!("  impc lex main.imp");
    println!("  impc lex a.imp b.imp --jobs=2");
    println!("  impc lex big.imp --block-size=512 --capacity=65536");
    println!("  RUST_LOG=imp_lexer_core=debug impc lex main.imp");
}
