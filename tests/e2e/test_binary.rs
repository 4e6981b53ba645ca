//! Integration tests for the room-grid binary.
//!
//! These run the compiled binary with plan text on stdin and check stdout.

use std::io::Write;
use std::process::{Command, Output, Stdio};

/// Run the binary with the given stdin input and extra CLI args.
fn run_binary(input: &str, extra_args: &[&str]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_room-grid"))
        .args(extra_args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to run binary");
    if let Some(ref mut stdin) = child.stdin {
        stdin.write_all(input.as_bytes()).ok();
    }
    child.wait_with_output().expect("Failed to wait for binary")
}

fn stdout_of(input: &str, extra_args: &[&str]) -> String {
    let output = run_binary(input, extra_args);
    assert!(
        output.status.success(),
        "Binary exited with {:?}:\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("Non-UTF8 output")
}

#[test]
fn test_renders_single_room() {
    assert_eq!(stdout_of("rect 3x3\n", &[]), "┌───┐\n│   │\n└───┘\n");
}

#[test]
fn test_ascii_flag() {
    assert_eq!(stdout_of("rect 3x2\n", &["--ascii"]), "+---+\n+---+\n");
}

#[test]
fn test_trim_flag() {
    let out = stdout_of("canvas 5x2\nrect 2x2\n", &["--trim"]);
    assert_eq!(out, "┌─┐\n└─┘\n");
}

#[test]
fn test_stats_go_to_stderr() {
    let output = run_binary("rect 8x4\nrect 4x8\n", &["--stats"]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("vertices: 8"), "stderr: {stderr}");
    assert!(stderr.contains("edges: 10"), "stderr: {stderr}");
    assert!(stderr.contains("components: 1"), "stderr: {stderr}");
}

#[test]
fn test_output_file() {
    let path = std::env::temp_dir().join(format!("room-grid-{}.txt", std::process::id()));
    let path_str = path.to_string_lossy().to_string();
    let out = stdout_of("rect 3x3\n", &["-o", &path_str]);
    assert!(out.is_empty());
    let written = std::fs::read_to_string(&path).expect("output file written");
    assert_eq!(written, "┌───┐\n│   │\n└───┘\n");
    std::fs::remove_file(&path).ok();
}

#[test]
fn test_parse_error_exits_nonzero() {
    let output = run_binary("rect 3x3\nblob\n", &[]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: line 2: unrecognised directive `blob`"), "stderr: {stderr}");
}

#[test]
fn test_unknown_anchor_exits_nonzero() {
    let output = run_binary("rect 6x4\nrect 2x2 at 9,9\n", &[]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no vertex at (9, 9)"), "stderr: {stderr}");
}

#[test]
fn test_missing_input_file() {
    let output = run_binary("", &["/nonexistent/plan.txt"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("error: "));
}

#[test]
fn test_tight_flag_sizes_from_root_bounds() {
    let src = "root -5,-5\nrect 3x3\n";
    assert_eq!(stdout_of(src, &[]), " \n");
    let output = run_binary(src, &["--tight", "--stats"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bounds: x -5..=-3, y -5..=-3"), "stderr: {stderr}");
}
