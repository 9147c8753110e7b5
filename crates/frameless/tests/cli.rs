use std::process::Command;

#[test]
fn help_exits_successfully() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_frameless"));
    cmd.arg("--help");

    // Act
    let output = cmd.output().expect("failed to execute frameless");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Borderless fullscreen"));
    assert!(stdout.contains("displays"));
    assert!(stdout.contains("set-primary"));
}

#[test]
fn version_exits_successfully() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_frameless"));
    cmd.arg("--version");

    // Act
    let output = cmd.output().expect("failed to execute frameless");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("frameless"));
}

#[test]
fn set_resolution_requires_dimensions() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_frameless"));
    cmd.args(["set-resolution", r"\\.\DISPLAY1"]);

    // Act
    let output = cmd.output().expect("failed to execute frameless");

    // Assert: clap rejects the incomplete invocation before any OS call.
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("WIDTH") || stderr.contains("required"));
}
