//! Integration tests for the pipsqueak engine binary.
//!
//! Tests the full BGI protocol session flow by spawning the engine
//! process, sending commands via stdin, and verifying stdout responses.

use std::io::{BufRead, Write};
use std::process::{Command, Stdio};

/// Sends a sequence of commands to the engine and collects stdout lines.
fn run_engine(commands: &[&str]) -> Vec<String> {
    let exe = env!("CARGO_BIN_EXE_pipsqueak");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start pipsqueak");

    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let reader = std::io::BufReader::new(stdout);

    for cmd in commands {
        writeln!(stdin, "{}", cmd).unwrap();
    }
    stdin.flush().unwrap();
    drop(stdin);

    let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
    let status = child.wait().expect("failed to wait on child");
    assert!(status.success());
    lines
}

/// Forced-move position: the 2 plays 20/22 but the 1 is blocked on
/// both 21 and 23.
const SOLITUDE_POSITION: &str =
    "0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,2,-2,0,-2,0,0,0,0";

/// Bar checker facing a closed home board: no legal move at all.
const CLOSED_POSITION: &str =
    "1,-2,-2,-2,-2,-2,-2,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0";

#[test]
fn bgi_handshake_with_protocol_version() {
    let lines = run_engine(&["bgi", "quit"]);

    assert!(lines.iter().any(|l| l == "id name pipsqueak"));
    assert!(lines.iter().any(|l| l == "protocol_version 1"));
    assert!(lines.iter().any(|l| l == "bgiok"));

    // bgiok must close the handshake
    let bgiok_idx = lines.iter().position(|l| l == "bgiok").unwrap();
    let proto_idx = lines.iter().position(|l| l == "protocol_version 1").unwrap();
    assert!(proto_idx < bgiok_idx, "protocol_version must appear before bgiok");
}

#[test]
fn bgi_handshake_includes_options() {
    let lines = run_engine(&["bgi", "quit"]);

    let option_lines: Vec<&String> = lines.iter().filter(|l| l.starts_with("option ")).collect();
    assert!(!option_lines.is_empty(), "handshake should include option declarations");
    for opt in &option_lines {
        assert!(opt.contains("type "), "option line missing type: {}", opt);
    }
}

#[test]
fn isready_response() {
    let lines = run_engine(&["isready", "quit"]);
    assert!(lines.contains(&"readyok".to_string()));
}

#[test]
fn unknown_commands_are_ignored() {
    let lines = run_engine(&["frobnicate", "isready", "quit"]);
    assert!(lines.contains(&"readyok".to_string()));
}

#[test]
fn opening_six_one_best_move() {
    let lines = run_engine(&["position start", "roll 1 6", "go", "quit"]);

    let bestmove = lines
        .iter()
        .find(|l| l.starts_with("bestmove "))
        .expect("go should produce a bestmove line");
    assert_eq!(bestmove, "bestmove 17/18 12/18");

    let info = lines
        .iter()
        .find(|l| l.starts_with("info candidates "))
        .expect("go should report candidate count");
    assert!(info.contains("score "));
}

#[test]
fn explicit_position_matches_start() {
    let opening =
        "0,2,0,0,0,0,-5,0,-3,0,0,0,5,-5,0,0,0,3,0,5,0,0,0,0,-2,0,0,0";
    let lines = run_engine(&[
        &format!("position {}", opening),
        "roll 1 6",
        "go",
        "quit",
    ]);
    let bestmove = lines.iter().find(|l| l.starts_with("bestmove ")).unwrap();
    assert_eq!(bestmove, "bestmove 17/18 12/18");
}

#[test]
fn forced_move_is_reported() {
    let lines = run_engine(&[
        &format!("position {}", SOLITUDE_POSITION),
        "roll 1 2",
        "go",
        "quit",
    ]);

    assert!(lines.contains(&"info forced".to_string()));
    let bestmove = lines.iter().find(|l| l.starts_with("bestmove ")).unwrap();
    assert_eq!(bestmove, "bestmove 20/22");
}

#[test]
fn closed_board_reports_no_move() {
    let lines = run_engine(&[
        &format!("position {}", CLOSED_POSITION),
        "roll 3 5",
        "go",
        "quit",
    ]);

    let bestmove = lines.iter().find(|l| l.starts_with("bestmove ")).unwrap();
    assert_eq!(bestmove, "bestmove none");
}

#[test]
fn go_without_position_produces_no_bestmove() {
    let lines = run_engine(&["roll 1 6", "go", "quit"]);
    assert!(!lines.iter().any(|l| l.starts_with("bestmove ")));
}

#[test]
fn seeded_roll_is_echoed() {
    let lines = run_engine(&[
        "setoption name Seed value 42",
        "position start",
        "roll",
        "quit",
    ]);

    let roll_line = lines
        .iter()
        .find(|l| l.starts_with("info roll "))
        .expect("bare roll should echo the dice");
    let values: Vec<u8> = roll_line
        .split_whitespace()
        .skip(2)
        .map(|t| t.parse().unwrap())
        .collect();
    assert_eq!(values.len(), 2);
    assert!(values.iter().all(|v| (1..=6).contains(v)));

    // Same seed, same roll.
    let again = run_engine(&[
        "setoption name Seed value 42",
        "position start",
        "roll",
        "quit",
    ]);
    let roll_again = again.iter().find(|l| l.starts_with("info roll ")).unwrap();
    assert_eq!(roll_line, roll_again);
}

#[test]
fn newgame_clears_position() {
    let lines = run_engine(&[
        "position start",
        "roll 1 6",
        "newgame",
        "go",
        "quit",
    ]);
    assert!(!lines.iter().any(|l| l.starts_with("bestmove ")));
}
