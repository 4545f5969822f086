/// Smoke tests to verify the binary runs without panicking
use std::process::Command;

fn worldtime() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_worldtime"));
    // Keep the user's real config out of the picture
    cmd.args(["--config", "/nonexistent/worldtime.toml"]);
    cmd
}

#[test]
fn binary_shows_help() {
    let output = worldtime().arg("--help").output().expect("Failed to run worldtime");

    assert!(
        output.status.success(),
        "Binary failed to run --help: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("worldtime"), "Help output should mention worldtime");
    assert!(stdout.contains("print"));
}

#[test]
fn binary_shows_version() {
    let output = worldtime().arg("--version").output().expect("Failed to run worldtime");

    assert!(
        output.status.success(),
        "Binary failed to run --version: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn print_raw_frame() {
    let output = worldtime()
        .args(["print", "--width", "68", "--height", "17", "--raw"])
        .output()
        .expect("Failed to run worldtime");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 14);
    assert!(stdout.contains("[dodgerblue::b]NYC[-::-]"));
    assert!(stdout.contains("[green]"));
}

#[test]
fn print_day_night_ansi_frame() {
    let output = worldtime()
        .args(["print", "-W", "40", "-H", "12", "--day-night"])
        .output()
        .expect("Failed to run worldtime");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 9);
    assert!(stdout.contains("\x1b[38;2;"));
    assert!(!stdout.contains("[-]"));
}

#[test]
fn print_tiny_frame_is_empty() {
    let output = worldtime()
        .args(["print", "-W", "1", "-H", "1", "--raw"])
        .output()
        .expect("Failed to run worldtime");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "");
}

#[test]
fn lists_cities() {
    let output = worldtime().arg("cities").output().expect("Failed to run worldtime");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[Middle East]"));
    assert!(stdout.contains("Tokyo"));
}

#[test]
fn invalid_subcommand_fails_gracefully() {
    let output = worldtime()
        .arg("nonexistent-command")
        .output()
        .expect("Failed to run worldtime");

    // Should fail with error, not panic
    assert!(
        !output.status.success(),
        "Invalid subcommand should return error status"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        !stderr.contains("panicked at"),
        "Invalid subcommand should not cause panic"
    );
}
