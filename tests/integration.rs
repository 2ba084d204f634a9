//! Integration tests for the conquest-bot binary.
//!
//! Drives full protocol sessions by spawning the bot process, sending
//! commands via stdin, and verifying stdout responses.

mod common;

use std::io::{BufRead, Write};
use std::process::{Command, Stdio};

use common::{SETTINGS, WORLD_MAP};

/// Sends a sequence of commands to the bot and collects stdout lines.
fn run_bot(commands: &[&str]) -> Vec<String> {
    let exe = env!("CARGO_BIN_EXE_conquest-bot");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start conquest-bot");

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

/// Settings and world map setup, followed by `extra`.
fn session<'a>(extra: &[&'a str]) -> Vec<&'a str> {
    SETTINGS
        .iter()
        .chain(WORLD_MAP.iter())
        .chain(extra)
        .copied()
        .collect()
}

#[test]
fn eof_exits_cleanly() {
    let lines = run_bot(&[]);
    assert!(lines.is_empty());
}

#[test]
fn setup_produces_no_output() {
    let lines = run_bot(&session(&[]));
    assert!(lines.is_empty());
}

#[test]
fn unknown_commands_are_ignored() {
    let lines = run_bot(&["foobar", "nonsense 1 2 3"]);
    assert!(lines.is_empty());
}

#[test]
fn empty_lines_are_ignored() {
    let lines = run_bot(&session(&["", "  ", "pick_starting_regions 2000 11 12"]));
    assert_eq!(lines, vec!["11 12"]);
}

#[test]
fn pick_starting_regions_on_world_map() {
    let lines = run_bot(&session(&[
        "pick_starting_regions 2000 5 3 11 12 16 18 26 25 31 38 42 41",
    ]));
    assert_eq!(lines, vec!["11 12 42 41 26 25"]);
}

#[test]
fn full_round_on_world_map() {
    let lines = run_bot(&session(&[
        "pick_starting_regions 2000 5 3 11 12 16 18 26 25 31 38 42 41",
        "update_map 9 neutral 2 10 neutral 2 11 player1 6 12 player1 2 13 player2 2 21 neutral 2",
        "opponent_moves player2 place_armies 13 2",
        "go place_armies 2000",
        "go attack/transfer 2000",
    ]));

    assert_eq!(
        lines,
        vec![
            "11 12 42 41 26 25",
            "player1 place_armies 12 2",
            "player1 attack/transfer 11 13 4",
        ]
    );
}

#[test]
fn every_decision_gets_exactly_one_line() {
    let lines = run_bot(&session(&[
        "update_map 39 player1 1",
        "go place_armies 2000",
        "go attack/transfer 2000",
        "go place_armies 2000",
    ]));
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|l| l == "No moves"));
}

#[test]
fn decisions_without_settings_pass() {
    let lines = run_bot(&["go place_armies 100", "go attack/transfer 100"]);
    assert_eq!(lines, vec!["No moves", "No moves"]);
}

#[test]
fn broken_map_keeps_answering() {
    let lines = run_bot(&session(&[
        "update_map 99 player1 3",
        "go place_armies 2000",
        "pick_starting_regions 2000 11 12",
    ]));
    assert_eq!(lines, vec!["No moves", ""]);
}

#[test]
fn malformed_go_passes() {
    let lines = run_bot(&session(&["go place_armies later", "go sideways 100"]));
    assert_eq!(lines, vec!["No moves", "No moves"]);
}
