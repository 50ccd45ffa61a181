//! Lispy CLI
//!
//! Evaluates prefix arithmetic expressions.

use std::io::Write;

use lispyc::commands::{eval_expression, parse_expression, run_file};
use lispyc::{CommandError, Outcome, RunConfig};

fn main() {
    lispyc::tracing_setup::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = args[1].as_str();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match command {
        "eval" => {
            let (config, expression) = options_and_expression(&args[2..], "eval");
            eval_expression(&expression, &config, &mut out)
        }
        "parse" => {
            let (_, expression) = options_and_expression(&args[2..], "parse");
            parse_expression(&expression, &mut out)
        }
        "run" => {
            let (config, positional) = parse_options(&args[2..]);
            let Some(path) = positional.first() else {
                eprintln!("error: missing file path");
                eprintln!("Usage: lispy run <file> [--precision=N] [--no-parallel] [--stats]");
                std::process::exit(1);
            };
            run_file(path, &config, &mut out)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        "version" | "--version" | "-V" => {
            println!("Lispy {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    finish(result, &mut out);
}

/// Parse options, exiting on a bad flag.
fn parse_options(args: &[String]) -> (RunConfig, Vec<&str>) {
    match RunConfig::from_args(args) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

/// Options plus the expression, which may be given as one quoted argument
/// (`lispy eval "+ 1 2"`) or spread over several (`lispy eval + 1 2`).
fn options_and_expression(args: &[String], command: &str) -> (RunConfig, String) {
    let (config, positional) = parse_options(args);
    if positional.is_empty() {
        eprintln!("Usage: lispy {command} <expression> [--precision=N]");
        std::process::exit(1);
    }
    (config, positional.join(" "))
}

fn finish<W: Write>(result: Result<Outcome, CommandError>, out: &mut W) {
    let flushed = out.flush();
    match result {
        Ok(outcome) => {
            if let Err(err) = flushed {
                eprintln!("error: failed to write output: {err}");
                std::process::exit(1);
            }
            std::process::exit(outcome.exit_code());
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Lispy - prefix arithmetic interpreter");
    println!();
    println!("Usage: lispy <command> [options]");
    println!();
    println!("Commands:");
    println!("  eval <expression>    Evaluate one expression, e.g. lispy eval \"+ 1 (* 2 3)\"");
    println!("  run <file>           Evaluate every line of a file");
    println!("  parse <expression>   Show the syntax tree for an expression");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --precision=N        Decimal places in printed numbers (default 6)");
    println!("  --no-parallel        Evaluate file lines on one thread (run)");
    println!("  --stats              Print an expression/error summary (run)");
    println!();
    println!("Operators: + - * / % ^ mod min max");
    println!();
    println!("Environment:");
    println!("  LISPY_LOG            Log filter, e.g. LISPY_LOG=lispy_eval=trace");
}
