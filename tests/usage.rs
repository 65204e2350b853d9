//! exit code and usage text checks against the real binary

use std::process::{Command, Output};

fn run_helper(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gtkmm-helper"))
        .args(args)
        .output()
        .expect("cant run the gtkmm-helper binary")
}

#[test]
fn test_no_arguments_prints_usage_and_exits_zero() {
    let output = run_helper(&[]);

    assert!(output.status.success(), "no-arg run did not exit 0");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("Usage"), "no usage text on stdout");
    assert!(stdout.contains("--new"), "usage text dose not list --new");
    assert!(stdout.contains("--dir"), "usage text dose not list --dir");
}

#[test]
fn test_help_flag_prints_usage_and_exits_zero() {
    let output = run_helper(&["--help"]);

    assert!(output.status.success(), "--help did not exit 0");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("Usage"), "no usage text on stdout");
    assert!(stdout.contains("--new"), "usage text dose not list --new");
}

#[test]
fn test_short_help_flag_exits_zero() {
    let output = run_helper(&["-h"]);

    assert!(output.status.success(), "-h did not exit 0");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("Usage"), "no usage text on stdout");
}

#[test]
fn test_dir_without_new_exits_nonzero() {
    let output = run_helper(&["--dir", "/tmp"]);

    assert!(!output.status.success(), "--dir alone exited 0");

    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        stderr.contains("--dir option can only be used after --new"),
        "no diagnostic for --dir without --new"
    );
}
