//! Whole-roll analysis CLI.
//!
//! Analyzes a backgammon position for every distinct dice roll and
//! outputs one JSON record per roll as JSONL.
//!
//! Usage:
//!   cargo run --release --bin analyze -- [OPTIONS]
//!
//! Options:
//!   --position TEXT  Position notation, or `start` (default: start)
//!   --output FILE    Output file path (default: stdout)
//!   --quiet          Suppress summary output

use std::env;
use std::fs::File;
use std::io::{self, BufWriter};
use std::time::Instant;

use pipsqueak::analysis::{analyze_position, write_jsonl};
use pipsqueak::board::Board;
use pipsqueak::protocol::notation::parse_position;

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut position_text = "start".to_string();
    let mut output_path: Option<String> = None;
    let mut quiet = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--position" => {
                i += 1;
                position_text = args[i].clone();
            }
            "--output" => {
                i += 1;
                output_path = Some(args[i].clone());
            }
            "--quiet" => {
                quiet = true;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let board = if position_text == "start" {
        Board::opening()
    } else {
        match parse_position(&position_text) {
            Ok(b) => b,
            Err(e) => {
                eprintln!("failed to parse position: {}", e);
                std::process::exit(1);
            }
        }
    };

    let start = Instant::now();
    let records = analyze_position(&board);
    let elapsed = start.elapsed();

    if !quiet {
        let playable = records.iter().filter(|r| r.score.is_some()).count();
        eprintln!(
            "Analyzed {} rolls in {:.1}ms ({} playable)",
            records.len(),
            elapsed.as_secs_f64() * 1000.0,
            playable
        );
    }

    match output_path {
        Some(path) => {
            let file = File::create(&path).expect("failed to create output file");
            let mut writer = BufWriter::new(file);
            write_jsonl(&records, &mut writer).expect("failed to write output");
            if !quiet {
                eprintln!("Wrote {} records to {}", records.len(), path);
            }
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            write_jsonl(&records, &mut writer).expect("failed to write output");
        }
    }
}

fn print_usage() {
    eprintln!("Usage: analyze [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --position TEXT  Position notation, or `start` (default: start)");
    eprintln!("  --output FILE    Output file path (default: stdout)");
    eprintln!("  --quiet          Suppress summary output");
    eprintln!("  --help           Show this help");
}
