//! Command-line interface for stationlog
//! This binary audits assembly-line station logs and reports completion counts.
//!
//! Usage:
//!   stationlog audit `<path>` [--format `<format>`]    - Audit a station log file
//!   stationlog extract `<path>` [--format `<format>`]  - Show the extracted symbol stream

use clap::{Arg, Command};
use stationlog::audit::extractor::extract_symbols;
use stationlog::audit::processor::{process_file, OutputFormat};

fn main() {
    let matches = Command::new("stationlog")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for auditing assembly-line station visit logs")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("audit")
                .about("Audit a station log file")
                .arg(
                    Arg::new("path")
                        .help("Path to the log file to audit")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('text' or 'json')")
                        .default_value("text"),
                ),
        )
        .subcommand(
            Command::new("extract")
                .about("Show the symbol stream extracted from a log file")
                .arg(
                    Arg::new("path")
                        .help("Path to the log file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('simple' or 'json')")
                        .default_value("simple"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("audit", audit_matches)) => {
            let path = audit_matches.get_one::<String>("path").unwrap();
            let format = audit_matches.get_one::<String>("format").unwrap();
            handle_audit_command(path, format);
        }
        Some(("extract", extract_matches)) => {
            let path = extract_matches.get_one::<String>("path").unwrap();
            let format = extract_matches.get_one::<String>("format").unwrap();
            handle_extract_command(path, format);
        }
        _ => unreachable!(),
    }
}

/// Handle the audit command
fn handle_audit_command(path: &str, format: &str) {
    let format = OutputFormat::from_string(format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let output = process_file(path, &format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    println!("{}", output);
}

/// Handle the extract command
fn handle_extract_command(path: &str, format: &str) {
    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    let stream = extract_symbols(&source).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    match format {
        "simple" => {
            for symbol in stream.symbols() {
                println!("{}", symbol);
            }
        }
        "json" => {
            let json = serde_json::to_string_pretty(stream.symbols()).unwrap_or_else(|e| {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            });
            println!("{}", json);
        }
        other => {
            eprintln!("Error: Invalid format: {}", other);
            std::process::exit(1);
        }
    }
}
